//! Playing rounds: timed sessions and 2×2 practice quizzes

mod config;
pub mod practice;
mod session;

pub use config::{DEFAULT_DURATION_SECS, GameConfig};
pub use practice::{Difficulty, PracticeQuiz, generate_practice_quiz, practice_quiz_from_letters};
pub use session::{
    GameKind, GameResult, GameSession, QUIT_COMMAND, RejectReason, SessionState, SubmitOutcome,
};
