//! Interactive check-in form
//!
//! Collects mood, confidence, worries, and goals one prompt at a time.
//! The widgets are the only validation layer: mood is a fixed choice,
//! confidence is an integer in 1-10, the text fields accept anything
//! including nothing. Ctrl-C or Ctrl-D bails out of the form.

use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::types::{Mood, UserInput};

pub const DEFAULT_CONFIDENCE: u8 = 5;

/// Run the form once. Returns `None` when the user bails out.
pub fn collect(editor: &mut DefaultEditor) -> Result<Option<UserInput>> {
    println!("Let's check in. No judgment, just vibes.\n");

    let Some(mood) = prompt_mood(editor)? else {
        return Ok(None);
    };
    let Some(confidence) = prompt_confidence(editor)? else {
        return Ok(None);
    };
    let Some(fears) = prompt_text(editor, "What's worrying you? ")? else {
        return Ok(None);
    };
    let Some(goals) = prompt_text(editor, "What do you want to achieve? ")? else {
        return Ok(None);
    };

    Ok(Some(UserInput::new(mood, confidence, fears, goals)))
}

fn prompt_mood(editor: &mut DefaultEditor) -> Result<Option<Mood>> {
    println!("Current mood:");
    for (i, mood) in Mood::ALL.iter().enumerate() {
        println!("  {}. {}", i + 1, mood);
    }

    loop {
        match editor.readline(&format!("Pick 1-5 [{}]: ", Mood::default())) {
            Ok(line) => {
                if let Some(mood) = parse_mood_choice(&line) {
                    return Ok(Some(mood));
                }
                println!("Pick a number between 1 and 5, or type a mood.");
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => return Ok(None),
            Err(err) => return Err(err.into()),
        }
    }
}

fn prompt_confidence(editor: &mut DefaultEditor) -> Result<Option<u8>> {
    loop {
        match editor.readline(&format!("Confidence level 1-10 [{}]: ", DEFAULT_CONFIDENCE)) {
            Ok(line) => {
                if let Some(confidence) = parse_confidence(&line) {
                    return Ok(Some(confidence));
                }
                println!("Enter a number between 1 and 10.");
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => return Ok(None),
            Err(err) => return Err(err.into()),
        }
    }
}

fn prompt_text(editor: &mut DefaultEditor, prompt: &str) -> Result<Option<String>> {
    match editor.readline(prompt) {
        Ok(line) => Ok(Some(line.trim().to_string())),
        Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
        Err(err) => Err(err.into()),
    }
}

/// Empty accepts the default; a digit picks from the list; a mood name
/// works too. Anything else re-prompts.
fn parse_mood_choice(input: &str) -> Option<Mood> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Some(Mood::default());
    }
    if let Ok(n) = trimmed.parse::<usize>() {
        if (1..=Mood::ALL.len()).contains(&n) {
            return Some(Mood::ALL[n - 1]);
        }
        return None;
    }
    trimmed.parse::<Mood>().ok()
}

/// Empty accepts the default; out-of-range and non-numeric re-prompt.
fn parse_confidence(input: &str) -> Option<u8> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Some(DEFAULT_CONFIDENCE);
    }
    match trimmed.parse::<u8>() {
        Ok(n) if (1..=10).contains(&n) => Some(n),
        _ => None,
    }
}
