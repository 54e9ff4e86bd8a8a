// src/types.rs
// Check-in input and structured coaching reply

use serde::{Deserialize, Serialize};

/// The five selectable moods on the check-in form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mood {
    Stressed,
    Sad,
    #[default]
    Okay,
    Happy,
    Excited,
}

impl Mood {
    /// Form display order.
    pub const ALL: [Mood; 5] = [
        Mood::Stressed,
        Mood::Sad,
        Mood::Okay,
        Mood::Happy,
        Mood::Excited,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Mood::Stressed => "Stressed",
            Mood::Sad => "Sad",
            Mood::Okay => "Okay",
            Mood::Happy => "Happy",
            Mood::Excited => "Excited",
        }
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Mood {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "stressed" => Ok(Mood::Stressed),
            "sad" => Ok(Mood::Sad),
            "okay" => Ok(Mood::Okay),
            "happy" => Ok(Mood::Happy),
            "excited" => Ok(Mood::Excited),
            other => Err(format!("unknown mood '{}'", other)),
        }
    }
}

/// A single check-in, immutable once submitted.
///
/// The form is the only validation layer: mood is a fixed choice,
/// confidence lands in 1-10, the text fields take anything including
/// nothing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInput {
    pub mood: Mood,
    pub confidence: u8,
    pub fears: String,
    pub goals: String,
}

impl UserInput {
    /// Assemble a check-in, clamping confidence into 1-10.
    pub fn new(mood: Mood, confidence: u8, fears: impl Into<String>, goals: impl Into<String>) -> Self {
        Self {
            mood,
            confidence: confidence.clamp(1, 10),
            fears: fears.into(),
            goals: goals.into(),
        }
    }
}

impl Default for UserInput {
    fn default() -> Self {
        Self {
            mood: Mood::default(),
            confidence: 5,
            fears: String::new(),
            goals: String::new(),
        }
    }
}

/// Structured coaching reply. All seven fields are mandatory: a reply
/// missing any of them fails deserialization and no partial record is
/// ever produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoachResponse {
    pub emotional_analysis: String,
    pub personalized_advice: String,
    /// First-person confidence boosters, 3 by prompt instruction.
    pub affirmations: Vec<String>,
    /// Well-being habits, 3 by prompt instruction.
    pub habits: Vec<String>,
    pub daily_challenge: String,
    pub journal_prompt: String,
    pub motivational_closing: String,
}
