//! Advice-card rendering for the terminal
//!
//! One titled section per reply field, in the same order the reply is
//! authored. Returns a String so the display can be asserted in tests.

use crate::types::CoachResponse;

/// Format the seven reply fields as advice cards.
pub fn render_reply(reply: &CoachResponse) -> String {
    let mut out = String::new();

    card(&mut out, "Here's the Vibe Check");
    out.push_str(&format!("\"{}\"\n", reply.emotional_analysis));

    card(&mut out, "Real Talk Advice");
    out.push_str(&format!("{}\n", reply.personalized_advice));

    card(&mut out, "Power Affirmations");
    for affirmation in &reply.affirmations {
        out.push_str(&format!("  \"{}\"\n", affirmation));
    }

    card(&mut out, "3 Habits to Try");
    for (i, habit) in reply.habits.iter().enumerate() {
        out.push_str(&format!("  {}. {}\n", i + 1, habit));
    }

    card(&mut out, "Daily Challenge");
    out.push_str(&format!("{}\n", reply.daily_challenge));

    card(&mut out, "Journal This");
    out.push_str(&format!("\"{}\"\n", reply.journal_prompt));

    out.push_str(&format!("\n{}\n", reply.motivational_closing));

    out
}

fn card(out: &mut String, title: &str) {
    out.push_str(&format!("\n── {} ", title));
    let fill = 50usize.saturating_sub(title.len());
    for _ in 0..fill {
        out.push('─');
    }
    out.push('\n');
}
