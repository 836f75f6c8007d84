//! Leaderboard Use Case

use std::sync::Arc;

use crate::domain::entities::User;
use crate::domain::repository::UserRepository;
use crate::domain::services::top_k;
use crate::error::{QuizError, QuizResult};

/// Top-K Leaderboard Use Case
pub struct LeaderboardUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> LeaderboardUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    /// Best `k` users, best first. `k` must be a non-negative integer.
    pub async fn execute(&self, k: &str) -> QuizResult<Vec<User>> {
        let k: usize = k
            .trim()
            .parse()
            .map_err(|_| QuizError::InvalidLeaderboardSize(k.to_string()))?;

        let users = self.user_repo.find_all().await?;
        let population = users.len();
        let leaders = top_k(users, k);

        tracing::debug!(k, population, returned = leaders.len(), "Leaderboard computed");

        Ok(leaders)
    }
}
