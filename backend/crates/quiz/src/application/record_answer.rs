//! Record Answer Use Case
//!
//! Scores one answer attempt against a question and bumps the user's
//! aggregate counters. The attempt itself is not stored.

use std::sync::Arc;

use kernel::id::{QuestionId, UserId};

use crate::application::config::QuizConfig;
use crate::domain::entities::User;
use crate::domain::repository::{QuestionRepository, UserRepository};
use crate::domain::value_objects::Choice;
use crate::error::{QuizError, QuizResult};

/// Input DTO for record answer
#[derive(Debug, Clone)]
pub struct RecordAnswerInput {
    pub user_id: UserId,
    pub question_id: QuestionId,
    /// Raw submitted choice, validated here
    pub choice: String,
}

/// Record Answer Use Case
pub struct RecordAnswerUseCase<U, Q>
where
    U: UserRepository,
    Q: QuestionRepository,
{
    user_repo: Arc<U>,
    question_repo: Arc<Q>,
    config: Arc<QuizConfig>,
}

impl<U, Q> RecordAnswerUseCase<U, Q>
where
    U: UserRepository,
    Q: QuestionRepository,
{
    pub fn new(user_repo: Arc<U>, question_repo: Arc<Q>, config: Arc<QuizConfig>) -> Self {
        Self {
            user_repo,
            question_repo,
            config,
        }
    }

    /// Checks run in order (user, question, choice); any failure leaves
    /// the store untouched.
    pub async fn execute(&self, input: RecordAnswerInput) -> QuizResult<User> {
        self.user_repo
            .find_by_id(input.user_id)
            .await?
            .ok_or(QuizError::UserNotFound)?;

        let question = self
            .question_repo
            .find_by_id(input.question_id)
            .await?
            .ok_or(QuizError::QuestionNotFound)?;

        Choice::parse(&input.choice)?;

        // An unanswered question never scores
        let is_correct = question
            .answer
            .is_some_and(|answer| self.config.answer_matching.is_match(&input.choice, answer));

        let user = self
            .user_repo
            .record_attempt(input.user_id, is_correct)
            .await?
            .ok_or(QuizError::UserNotFound)?;

        tracing::info!(
            user_id = %input.user_id,
            question_id = %input.question_id,
            is_correct,
            attempted = user.attempted,
            correct = user.correct,
            "Answer recorded"
        );

        Ok(user)
    }
}
