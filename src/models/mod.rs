//! Core data types shared across the quiz flow.

mod question;

use serde::{Deserialize, Serialize};

pub use question::Question;

/// Fixed grade levels offered on the home screen.
pub const GRADES: [&str; 12] = [
    "Grade 1", "Grade 2", "Grade 3", "Grade 4", "Grade 5", "Grade 6", "Grade 7", "Grade 8",
    "Grade 9", "Grade 10", "Grade 11", "Grade 12",
];

/// Fixed subjects offered on the home screen.
pub const SUBJECTS: [&str; 6] = [
    "Mathematics",
    "Science",
    "History",
    "Geography",
    "English",
    "General Knowledge",
];

/// Nickname length cap, matching the home screen input.
pub const NICKNAME_MAX_LENGTH: usize = 20;

/// Settings chosen on the home screen for a single quiz run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSettings {
    pub nickname: String,
    pub grade: String,
    pub subject: String,
}

/// One persisted leaderboard row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub name: String,
    pub score: u32,
}

/// Validates and normalizes a nickname: trimmed, non-empty, capped at
/// [`NICKNAME_MAX_LENGTH`] characters.
///
/// Returns the trimmed nickname, or an error message suitable for display.
pub fn validate_nickname(raw: &str) -> Result<String, &'static str> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err("Please enter a nickname to play");
    }

    if trimmed.chars().count() > NICKNAME_MAX_LENGTH {
        return Err("Nickname must be at most 20 characters");
    }

    Ok(trimmed.to_string())
}
