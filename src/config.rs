//! Configuration file support for zenteen
//!
//! Loads config from ~/.zenteen/config.toml

use serde::Deserialize;
use std::path::PathBuf;

/// Configuration for zenteen
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Gemini API key
    pub gemini_api_key: Option<String>,

    /// Gemini model id
    pub model: Option<String>,

    /// Request timeout in seconds
    pub request_timeout_secs: Option<u64>,
}

impl Config {
    /// Load config from ~/.zenteen/config.toml
    pub fn load() -> Self {
        let path = config_path();

        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                eprintln!("Warning: Failed to read {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}

/// Get the config file path
pub fn config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_default()
        .join(".zenteen")
        .join("config.toml")
}
