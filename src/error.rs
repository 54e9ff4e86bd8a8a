// src/error.rs
// Error taxonomy for the advice generator

use thiserror::Error;

/// Everything that can go wrong between a submitted check-in and a
/// rendered coaching reply.
#[derive(Error, Debug)]
pub enum CoachError {
    #[error("Gemini API key is not configured")]
    MissingApiKey,
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Gemini API error ({status}): {message}")]
    Api { status: u16, message: String },
    #[error("no response received from the coach")]
    EmptyResponse,
    #[error("failed to parse coaching reply: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid coaching reply: {0}")]
    Invalid(String),
}

impl CoachError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::Invalid(msg.into())
    }
}

/// Advice generation result type
pub type CoachResult<T> = Result<T, CoachError>;
