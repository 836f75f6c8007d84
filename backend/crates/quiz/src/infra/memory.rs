//! In-Memory Repository Implementation
//!
//! Process-local store used by tests and by the server when no database is
//! configured. Ids are assigned from per-table counters starting at 1 and
//! are never reused.

use std::collections::BTreeMap;
use std::sync::Arc;

use kernel::id::{QuestionId, UserId};
use tokio::sync::RwLock;

use crate::domain::entities::{NewUser, Question, QuestionFields, User};
use crate::domain::repository::{QuestionRepository, UserRepository};
use crate::error::QuizResult;

#[derive(Default)]
struct MemoryState {
    questions: BTreeMap<QuestionId, Question>,
    users: BTreeMap<UserId, User>,
    last_question_id: i32,
    last_user_id: i32,
}

/// In-memory quiz repository
#[derive(Clone, Default)]
pub struct MemoryQuizRepository {
    state: Arc<RwLock<MemoryState>>,
}

impl MemoryQuizRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl QuestionRepository for MemoryQuizRepository {
    async fn find_all(&self) -> QuizResult<Vec<Question>> {
        let state = self.state.read().await;
        Ok(state.questions.values().cloned().collect())
    }

    async fn find_by_id(&self, id: QuestionId) -> QuizResult<Option<Question>> {
        let state = self.state.read().await;
        Ok(state.questions.get(&id).cloned())
    }

    async fn insert(&self, fields: &QuestionFields) -> QuizResult<Question> {
        let mut state = self.state.write().await;
        state.last_question_id += 1;
        let question = Question::from_fields(QuestionId::new(state.last_question_id), fields.clone());
        state.questions.insert(question.id, question.clone());
        Ok(question)
    }

    async fn update(&self, question: &Question) -> QuizResult<()> {
        let mut state = self.state.write().await;
        // Saving a row that was deleted meanwhile is a no-op, like UPDATE
        if let Some(stored) = state.questions.get_mut(&question.id) {
            *stored = question.clone();
        }
        Ok(())
    }

    async fn delete(&self, id: QuestionId) -> QuizResult<bool> {
        let mut state = self.state.write().await;
        Ok(state.questions.remove(&id).is_some())
    }
}

impl UserRepository for MemoryQuizRepository {
    async fn find_all(&self) -> QuizResult<Vec<User>> {
        let state = self.state.read().await;
        Ok(state.users.values().cloned().collect())
    }

    async fn find_by_id(&self, id: UserId) -> QuizResult<Option<User>> {
        let state = self.state.read().await;
        Ok(state.users.get(&id).cloned())
    }

    async fn insert(&self, new_user: &NewUser) -> QuizResult<User> {
        let mut state = self.state.write().await;
        state.last_user_id += 1;
        let user = User::from_new(UserId::new(state.last_user_id), new_user.clone());
        state.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, user: &User) -> QuizResult<()> {
        let mut state = self.state.write().await;
        if let Some(stored) = state.users.get_mut(&user.id) {
            *stored = user.clone();
        }
        Ok(())
    }

    async fn delete(&self, id: UserId) -> QuizResult<bool> {
        let mut state = self.state.write().await;
        Ok(state.users.remove(&id).is_some())
    }

    async fn record_attempt(&self, id: UserId, is_correct: bool) -> QuizResult<Option<User>> {
        let mut state = self.state.write().await;
        let Some(user) = state.users.get_mut(&id) else {
            return Ok(None);
        };
        user.record_attempt(is_correct)?;
        Ok(Some(user.clone()))
    }
}
