//! ZenTeen - AI life coach for teens, in your terminal
//!
//! Collects a short emotional check-in (mood, confidence, worries,
//! goals) and turns it into structured coaching advice via the Gemini
//! generateContent API.

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use zenteen::app::App;
use zenteen::config::Config;
use zenteen::provider::gemini::{GeminiCoach, DEFAULT_MODEL};

#[derive(Parser)]
#[command(name = "zenteen")]
#[command(about = "Your personal space to vent, plan, and level up")]
struct Args {
    /// Gemini API key
    #[arg(long, env = "GEMINI_API_KEY")]
    api_key: Option<String>,

    /// Gemini model id
    #[arg(long)]
    model: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env (from ~/.zenteen/.env or current dir)
    let env_path = dirs::home_dir()
        .map(|h| h.join(".zenteen").join(".env"))
        .filter(|p| p.exists());
    if let Some(path) = env_path {
        let _ = dotenvy::from_path(&path);
    } else {
        let _ = dotenvy::dotenv();
    }

    // Initialize logging
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let args = Args::parse();

    // Load config file (~/.zenteen/config.toml)
    let config = Config::load();

    // Resolve values: CLI args > env vars (handled by clap) > config file > defaults
    let api_key = args.api_key.or(config.gemini_api_key);
    let model = args
        .model
        .or(config.model)
        .unwrap_or_else(|| DEFAULT_MODEL.to_string());
    let timeout = args.timeout.or(config.request_timeout_secs);

    let mut coach = GeminiCoach::new(api_key).with_model(model);
    if let Some(secs) = timeout {
        coach = coach.with_timeout(Duration::from_secs(secs));
    }

    println!("ZenTeen - your personal space to vent, plan, and level up\n");

    App::new(coach)?.run().await
}
