//! Application Layer - Use Cases
//!
//! This layer orchestrates domain logic and infrastructure.
//! Contains use case implementations.

pub mod config;
pub mod leaderboard;
pub mod questions;
pub mod record_answer;
pub mod users;

// Re-exports
pub use config::QuizConfig;
pub use leaderboard::LeaderboardUseCase;
pub use questions::QuestionUseCase;
pub use record_answer::{RecordAnswerInput, RecordAnswerUseCase};
pub use users::UserUseCase;
