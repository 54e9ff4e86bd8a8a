//! Gemini generateContent provider for coaching replies.
//!
//! Single-shot structured output: the request declares a JSON response
//! schema and the reply text is parsed straight into [`CoachResponse`].
//! One atomic round trip - no retry, no streaming, no caching.

use std::time::Duration;

use reqwest::Client as HttpClient;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, error};

use crate::error::{CoachError, CoachResult};
use crate::prompt::{self, SYSTEM_INSTRUCTION};
use crate::schema;
use crate::types::{CoachResponse, UserInput};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Gemini-backed advice generator.
#[derive(Clone)]
pub struct GeminiCoach {
    client: HttpClient,
    api_key: Option<String>,
    model: String,
    base_url: String,
    timeout: Duration,
}

impl GeminiCoach {
    /// Create a generator. A missing key is not an error until
    /// [`generate`](Self::generate) is called.
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            client: HttpClient::new(),
            api_key,
            model: DEFAULT_MODEL.to_string(),
            base_url: GEMINI_API_BASE.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Create from the GEMINI_API_KEY environment variable.
    pub fn from_env() -> Self {
        Self::new(std::env::var("GEMINI_API_KEY").ok())
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Override the endpoint base. Tests point this at a local server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// One atomic round trip: check-in in, validated coaching reply out.
    pub async fn generate(&self, input: &UserInput) -> CoachResult<CoachResponse> {
        let api_key = self.api_key.as_deref().ok_or(CoachError::MissingApiKey)?;

        let request = build_request(input);
        let url = format!("{}/{}:generateContent", self.base_url, self.model);
        debug!(model = %self.model, "sending coaching request");

        let response = self
            .client
            .post(&url)
            .query(&[("key", api_key)])
            .json(&request)
            .timeout(self.timeout)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            error!(%status, "Gemini API returned an error");
            return Err(CoachError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        if body.trim().is_empty() {
            return Err(CoachError::EmptyResponse);
        }

        let api_response: GeminiResponse = serde_json::from_str(&body)?;

        if let Some(err) = api_response.error {
            return Err(CoachError::Api {
                status: err.code.unwrap_or(status.as_u16()),
                message: err.message,
            });
        }

        let text = extract_text(api_response);
        if text.trim().is_empty() {
            return Err(CoachError::EmptyResponse);
        }

        let reply: CoachResponse = serde_json::from_str(&text)?;
        schema::validate_reply(&reply)?;

        Ok(reply)
    }
}

/// Build the request body from a check-in.
fn build_request(input: &UserInput) -> GeminiRequest {
    GeminiRequest {
        contents: vec![GeminiContent {
            role: "user".to_string(),
            parts: vec![GeminiTextPart {
                text: prompt::build_prompt(input),
            }],
        }],
        system_instruction: GeminiSystemInstruction {
            parts: vec![GeminiTextPart {
                text: SYSTEM_INSTRUCTION.to_string(),
            }],
        },
        generation_config: GeminiGenerationConfig {
            response_mime_type: "application/json".to_string(),
            response_schema: schema::response_schema(),
        },
    }
}

/// Concatenate the text parts of the first candidate.
fn extract_text(response: GeminiResponse) -> String {
    let mut text = String::new();
    if let Some(candidates) = response.candidates {
        if let Some(candidate) = candidates.into_iter().next() {
            for part in candidate.content.parts {
                if let Some(t) = part.text {
                    text.push_str(&t);
                }
            }
        }
    }
    text
}

// ============================================================================
// API Types
// ============================================================================

#[derive(Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    #[serde(rename = "systemInstruction")]
    system_instruction: GeminiSystemInstruction,
    #[serde(rename = "generationConfig")]
    generation_config: GeminiGenerationConfig,
}

#[derive(Serialize)]
struct GeminiSystemInstruction {
    parts: Vec<GeminiTextPart>,
}

#[derive(Serialize)]
struct GeminiContent {
    role: String,
    parts: Vec<GeminiTextPart>,
}

#[derive(Serialize)]
struct GeminiTextPart {
    text: String,
}

#[derive(Serialize)]
struct GeminiGenerationConfig {
    #[serde(rename = "responseMimeType")]
    response_mime_type: String,
    #[serde(rename = "responseSchema")]
    response_schema: Value,
}

#[derive(Deserialize)]
struct GeminiResponse {
    candidates: Option<Vec<GeminiCandidate>>,
    error: Option<GeminiApiError>,
}

#[derive(Deserialize)]
struct GeminiCandidate {
    content: GeminiCandidateContent,
}

#[derive(Deserialize)]
struct GeminiCandidateContent {
    #[serde(default)]
    parts: Vec<GeminiResponsePart>,
}

#[derive(Deserialize)]
struct GeminiResponsePart {
    text: Option<String>,
}

#[derive(Deserialize)]
struct GeminiApiError {
    code: Option<u16>,
    message: String,
}
