//! # quizquest
//!
//! A terminal trivia quiz powered by AI-generated questions.
//!
//! The player picks a nickname, grade, and subject; an external generative
//! model produces a batch of multiple-choice questions; each question runs
//! under a 15-second countdown where faster correct answers score more; the
//! final score lands on a local, file-backed leaderboard.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use quizquest::{App, JsonFileStore, QuestionProvider};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), quizquest::QuizError> {
//!     let store = JsonFileStore::open("quizquest-data.json".into());
//!     let provider = QuestionProvider::new("api-key".into(), "gemini-2.5-flash".into(), 10);
//!     quizquest::run(App::new(store), provider).await
//! }
//! ```

mod app;
pub mod leaderboard;
mod models;
mod provider;
mod runner;
mod session;
mod store;
pub mod terminal;
mod ui;

use std::io;

use thiserror::Error;

pub use app::{App, GameState, HomeFocus};
pub use models::{GRADES, LeaderboardEntry, Question, QuizSettings, SUBJECTS, validate_nickname};
pub use provider::{ProviderError, QuestionProvider};
pub use runner::run;
pub use session::{
    Advance, BASE_POINTS, FeedbackHook, QUESTION_TIME_LIMIT, QuizSession, SessionError,
    SilentFeedback,
};
pub use store::{JsonFileStore, MemoryStore, Store, StoreError};

/// Top-level error type for running the application.
#[derive(Debug, Error)]
pub enum QuizError {
    /// The `GEMINI_API_KEY` environment variable is missing or empty.
    #[error("GEMINI_API_KEY is not set; the question generator needs an API key")]
    MissingApiKey,

    /// IO error from the terminal.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
