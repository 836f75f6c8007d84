//! Question Use Cases
//!
//! CRUD over question records.

use std::sync::Arc;

use kernel::id::QuestionId;

use crate::domain::entities::{Question, QuestionFields};
use crate::domain::repository::QuestionRepository;
use crate::error::{QuizError, QuizResult};

/// Question CRUD use case
pub struct QuestionUseCase<Q>
where
    Q: QuestionRepository,
{
    question_repo: Arc<Q>,
}

impl<Q> QuestionUseCase<Q>
where
    Q: QuestionRepository,
{
    pub fn new(question_repo: Arc<Q>) -> Self {
        Self { question_repo }
    }

    pub async fn list(&self) -> QuizResult<Vec<Question>> {
        let questions = self.question_repo.find_all().await?;
        tracing::debug!(count = questions.len(), "Listed questions");
        Ok(questions)
    }

    /// Absence is a valid outcome, not an error
    pub async fn get(&self, id: QuestionId) -> QuizResult<Option<Question>> {
        self.question_repo.find_by_id(id).await
    }

    pub async fn create(&self, fields: QuestionFields) -> QuizResult<Question> {
        let question = self.question_repo.insert(&fields).await?;

        tracing::info!(question_id = %question.id, "Question created");

        Ok(question)
    }

    /// Merge the supplied fields into the stored question
    pub async fn update(&self, id: QuestionId, changes: QuestionFields) -> QuizResult<Question> {
        let mut question = self
            .question_repo
            .find_by_id(id)
            .await?
            .ok_or(QuizError::QuestionNotFound)?;

        question.apply(changes);
        self.question_repo.update(&question).await?;

        tracing::info!(question_id = %id, "Question updated");

        Ok(question)
    }

    /// Remove the question and return what was stored
    pub async fn delete(&self, id: QuestionId) -> QuizResult<Question> {
        let question = self
            .question_repo
            .find_by_id(id)
            .await?
            .ok_or(QuizError::QuestionNotFound)?;

        if !self.question_repo.delete(id).await? {
            // Removed by a concurrent request between the read and the delete
            return Err(QuizError::QuestionNotFound);
        }

        tracing::info!(question_id = %id, "Question deleted");

        Ok(question)
    }
}
