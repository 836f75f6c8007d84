//! Application Configuration
//!
//! Configuration for the quiz application layer.

pub use crate::domain::value_objects::AnswerMatching;

/// Quiz application configuration
#[derive(Debug, Clone, Default)]
pub struct QuizConfig {
    /// How submitted choices are compared with stored answers
    pub answer_matching: AnswerMatching,
}

impl QuizConfig {
    /// Config that only scores the exact upper-case letter
    pub fn case_sensitive() -> Self {
        Self {
            answer_matching: AnswerMatching::CaseSensitive,
        }
    }
}
