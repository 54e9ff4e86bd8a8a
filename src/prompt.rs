// src/prompt.rs
// Prompt assembly for the coaching request

use crate::types::UserInput;

/// System-level persona sent with every request.
pub const SYSTEM_INSTRUCTION: &str =
    "You are a helpful, empathetic, and cool AI life coach for teenagers.";

/// Builds the user prompt: the check-in profile verbatim, then the
/// fixed authoring instructions for the seven reply elements.
pub fn build_prompt(input: &UserInput) -> String {
    let mut prompt = String::new();

    // 1. The user's check-in, embedded as-is
    prompt.push_str("User Profile:\n");
    prompt.push_str(&format!("- Current Mood: {}\n", input.mood));
    prompt.push_str(&format!("- Confidence Level: {}/10\n", input.confidence));
    prompt.push_str(&format!("- Current Fears/Worries: {}\n", input.fears));
    prompt.push_str(&format!("- Main Goals: {}\n\n", input.goals));

    // 2. Tone
    prompt.push_str(
        "You are an AI Life Coach for Teenagers. Speak in a supportive, friendly, \
         and non-judgmental tone. Your goal is to help teens understand their \
         emotions and build confidence. Do not sound like a therapist - sound like \
         a friendly coach or mentor. Keep the total response concise (under 300 \
         words roughly).\n\n",
    );

    // 3. The seven required elements
    prompt.push_str("Provide the following structured output:\n");
    prompt.push_str("1. A short emotional analysis based on the user's current mood.\n");
    prompt.push_str("2. Personalized advice that is realistic and actionable.\n");
    prompt.push_str(
        "3. 3 confidence-boosting affirmations written in first person (\"I am...\").\n",
    );
    prompt.push_str("4. 3 specific habits the user can follow to improve their well-being.\n");
    prompt.push_str(
        "5. One daily challenge that helps them step out of their comfort zone safely.\n",
    );
    prompt.push_str("6. A journal prompt for self-reflection.\n");
    prompt.push_str("7. One motivational closing line starting with \"Remember:\".\n");

    prompt
}
