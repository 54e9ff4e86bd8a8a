// src/schema.rs
// Declarative reply schema, shared between the request and validation.
// The same definition instructs Gemini (as responseSchema) and backs
// validate_reply, so the two cannot drift apart.

use serde_json::{json, Value};

use crate::error::{CoachError, CoachResult};
use crate::types::CoachResponse;

/// Wire names of the seven mandatory reply fields.
pub const RESPONSE_FIELDS: [&str; 7] = [
    "emotionalAnalysis",
    "personalizedAdvice",
    "affirmations",
    "habits",
    "dailyChallenge",
    "journalPrompt",
    "motivationalClosing",
];

/// JSON schema for the structured coaching reply, in Gemini
/// responseSchema format (uppercase type names).
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "emotionalAnalysis": { "type": "STRING" },
            "personalizedAdvice": { "type": "STRING" },
            "affirmations": {
                "type": "ARRAY",
                "items": { "type": "STRING" }
            },
            "habits": {
                "type": "ARRAY",
                "items": { "type": "STRING" }
            },
            "dailyChallenge": { "type": "STRING" },
            "journalPrompt": { "type": "STRING" },
            "motivationalClosing": { "type": "STRING" }
        },
        "required": RESPONSE_FIELDS,
    })
}

/// Reject replies that deserialized but still break the contract.
/// The five plain strings must be non-empty; the arrays are only held
/// to length 3 by the prompt, not here.
pub fn validate_reply(reply: &CoachResponse) -> CoachResult<()> {
    if reply.emotional_analysis.trim().is_empty() {
        return Err(CoachError::invalid("emotionalAnalysis is empty"));
    }
    if reply.personalized_advice.trim().is_empty() {
        return Err(CoachError::invalid("personalizedAdvice is empty"));
    }
    if reply.daily_challenge.trim().is_empty() {
        return Err(CoachError::invalid("dailyChallenge is empty"));
    }
    if reply.journal_prompt.trim().is_empty() {
        return Err(CoachError::invalid("journalPrompt is empty"));
    }
    if reply.motivational_closing.trim().is_empty() {
        return Err(CoachError::invalid("motivationalClosing is empty"));
    }
    Ok(())
}
