//! Repository Traits
//!
//! Interfaces for data persistence. Implementations are in the infra layer.

use kernel::id::{QuestionId, UserId};

use crate::domain::entities::{NewUser, Question, QuestionFields, User};
use crate::error::QuizResult;

/// Question repository trait
#[trait_variant::make(QuestionRepository: Send)]
pub trait LocalQuestionRepository {
    /// All questions, ascending id
    async fn find_all(&self) -> QuizResult<Vec<Question>>;

    /// Find question by ID
    async fn find_by_id(&self, id: QuestionId) -> QuizResult<Option<Question>>;

    /// Insert a question; the store assigns the id
    async fn insert(&self, fields: &QuestionFields) -> QuizResult<Question>;

    /// Persist every field of an existing question
    async fn update(&self, question: &Question) -> QuizResult<()>;

    /// Delete by ID, returning whether a row was removed
    async fn delete(&self, id: QuestionId) -> QuizResult<bool>;
}

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// All users, ascending id
    async fn find_all(&self) -> QuizResult<Vec<User>>;

    /// Find user by ID
    async fn find_by_id(&self, id: UserId) -> QuizResult<Option<User>>;

    /// Insert a user; the store assigns the id
    async fn insert(&self, new_user: &NewUser) -> QuizResult<User>;

    /// Persist every field of an existing user
    async fn update(&self, user: &User) -> QuizResult<()>;

    /// Delete by ID, returning whether a row was removed
    async fn delete(&self, id: UserId) -> QuizResult<bool>;

    /// Add one attempt (and one correct answer if `is_correct`) in a single
    /// write. Returns `None` if the user no longer exists.
    async fn record_attempt(&self, id: UserId, is_correct: bool) -> QuizResult<Option<User>>;
}
