//! Application flow: collect, request, render, reset
//!
//! The three-state UI flow is a tagged enum so illegal combinations
//! (loading with a stale reply shown) cannot be represented. While a
//! request is in flight the state slot actually holds `Loading` and the
//! loop is awaiting the spawned task, so a second submission cannot
//! start.

use anyhow::Result;
use rustyline::DefaultEditor;
use tracing::{error, warn};

use crate::input;
use crate::provider::GeminiCoach;
use crate::render;
use crate::types::{CoachResponse, UserInput};

/// Every failure kind folds into this one retry-inviting message.
pub const GENERIC_ERROR_MESSAGE: &str =
    "Whoops! Something went wrong connecting to your AI coach. Please try again.";

/// UI flow states.
#[derive(Debug)]
pub enum AppState {
    /// Collecting the check-in form, with the previous failure if any.
    Input { error: Option<String> },
    /// One request in flight.
    Loading,
    /// Reply received and ready to render.
    Result(CoachResponse),
}

/// Top-level view: owns the state, the editor, and the generator.
pub struct App {
    coach: GeminiCoach,
    editor: DefaultEditor,
    state: AppState,
}

impl App {
    pub fn new(coach: GeminiCoach) -> Result<Self> {
        Ok(Self {
            coach,
            editor: DefaultEditor::new()?,
            state: AppState::Input { error: None },
        })
    }

    /// Run the collect -> request -> render-or-error -> reset loop until
    /// the user leaves.
    pub async fn run(&mut self) -> Result<()> {
        if !self.coach.has_api_key() {
            warn!("no Gemini API key configured; check-ins will fail until one is set");
        }

        loop {
            // Leaving Loading in the slot while this iteration works is
            // what makes a concurrent second submission unrepresentable.
            match std::mem::replace(&mut self.state, AppState::Loading) {
                AppState::Input { error } => {
                    if let Some(message) = error {
                        println!("\n{}\n", message);
                    }
                    match input::collect(&mut self.editor)? {
                        Some(check_in) => match self.await_reply(check_in).await {
                            Some(next) => self.state = next,
                            None => break,
                        },
                        None => break,
                    }
                }
                AppState::Result(reply) => {
                    print!("{}", render::render_reply(&reply));
                    match self
                        .editor
                        .readline("\nPress Enter to start over (Ctrl-D to quit): ")
                    {
                        Ok(_) => self.state = AppState::Input { error: None },
                        Err(_) => break,
                    }
                }
                AppState::Loading => break,
            }
        }

        println!("\nTake care out there!");
        Ok(())
    }

    /// Drive one request as a spawned task raced against Ctrl-C.
    /// Returns the next state, or `None` when interrupted.
    async fn await_reply(&self, check_in: UserInput) -> Option<AppState> {
        println!("\nThinking...");
        println!("Crafting your perfect hype plan\n");

        let coach = self.coach.clone();
        let mut handle = tokio::spawn(async move { coach.generate(&check_in).await });

        let joined = tokio::select! {
            res = &mut handle => res,
            _ = tokio::signal::ctrl_c() => {
                handle.abort();
                return None;
            }
        };

        Some(match joined {
            Ok(Ok(reply)) => AppState::Result(reply),
            Ok(Err(e)) => {
                error!(error = %e, "coaching request failed");
                AppState::Input {
                    error: Some(GENERIC_ERROR_MESSAGE.to_string()),
                }
            }
            Err(e) => {
                error!(error = %e, "coaching task failed");
                AppState::Input {
                    error: Some(GENERIC_ERROR_MESSAGE.to_string()),
                }
            }
        })
    }
}
