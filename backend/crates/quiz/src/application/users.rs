//! User Use Cases
//!
//! CRUD over user records.

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::entities::{NewUser, User, UserChanges};
use crate::domain::repository::UserRepository;
use crate::error::{QuizError, QuizResult};

/// User CRUD use case
pub struct UserUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> UserUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    pub async fn list(&self) -> QuizResult<Vec<User>> {
        let users = self.user_repo.find_all().await?;
        tracing::debug!(count = users.len(), "Listed users");
        Ok(users)
    }

    pub async fn get(&self, id: UserId) -> QuizResult<Option<User>> {
        self.user_repo.find_by_id(id).await
    }

    pub async fn create(&self, new_user: NewUser) -> QuizResult<User> {
        new_user.validate()?;

        let user = self.user_repo.insert(&new_user).await?;

        tracing::info!(
            user_id = %user.id,
            attempted = user.attempted,
            correct = user.correct,
            "User created"
        );

        Ok(user)
    }

    pub async fn update(&self, id: UserId, changes: UserChanges) -> QuizResult<User> {
        let mut user = self
            .user_repo
            .find_by_id(id)
            .await?
            .ok_or(QuizError::UserNotFound)?;

        user.apply(changes)?;
        self.user_repo.update(&user).await?;

        tracing::info!(user_id = %id, "User updated");

        Ok(user)
    }

    pub async fn delete(&self, id: UserId) -> QuizResult<User> {
        let user = self
            .user_repo
            .find_by_id(id)
            .await?
            .ok_or(QuizError::UserNotFound)?;

        if !self.user_repo.delete(id).await? {
            return Err(QuizError::UserNotFound);
        }

        tracing::info!(user_id = %id, "User deleted");

        Ok(user)
    }
}
