//! PostgreSQL Repository Implementations

use kernel::id::{QuestionId, UserId};
use sqlx::PgPool;

use crate::domain::entities::{COUNTER_OVERFLOW, NewUser, Question, QuestionFields, User};
use crate::domain::repository::{QuestionRepository, UserRepository};
use crate::domain::value_objects::Choice;
use crate::error::{QuizError, QuizResult};

/// PostgreSQL-backed repository
#[derive(Clone)]
pub struct PgQuizRepository {
    pool: PgPool,
}

impl PgQuizRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// Question Repository Implementation
// ============================================================================

impl QuestionRepository for PgQuizRepository {
    async fn find_all(&self) -> QuizResult<Vec<Question>> {
        let rows = sqlx::query_as::<_, QuestionRow>(
            r#"
            SELECT question_id, name, choice_a, choice_b, choice_c, choice_d, answer
            FROM questions
            ORDER BY question_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(QuestionRow::into_question).collect()
    }

    async fn find_by_id(&self, id: QuestionId) -> QuizResult<Option<Question>> {
        let row = sqlx::query_as::<_, QuestionRow>(
            r#"
            SELECT question_id, name, choice_a, choice_b, choice_c, choice_d, answer
            FROM questions
            WHERE question_id = $1
            "#,
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await?;

        row.map(QuestionRow::into_question).transpose()
    }

    async fn insert(&self, fields: &QuestionFields) -> QuizResult<Question> {
        let row = sqlx::query_as::<_, QuestionRow>(
            r#"
            INSERT INTO questions (name, choice_a, choice_b, choice_c, choice_d, answer)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING question_id, name, choice_a, choice_b, choice_c, choice_d, answer
            "#,
        )
        .bind(fields.name.as_deref())
        .bind(fields.a.as_deref())
        .bind(fields.b.as_deref())
        .bind(fields.c.as_deref())
        .bind(fields.d.as_deref())
        .bind(fields.answer.map(|answer| answer.as_str()))
        .fetch_one(&self.pool)
        .await?;

        row.into_question()
    }

    async fn update(&self, question: &Question) -> QuizResult<()> {
        sqlx::query(
            r#"
            UPDATE questions SET
                name = $2,
                choice_a = $3,
                choice_b = $4,
                choice_c = $5,
                choice_d = $6,
                answer = $7
            WHERE question_id = $1
            "#,
        )
        .bind(question.id.value())
        .bind(question.name.as_deref())
        .bind(question.a.as_deref())
        .bind(question.b.as_deref())
        .bind(question.c.as_deref())
        .bind(question.d.as_deref())
        .bind(question.answer.map(|answer| answer.as_str()))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, id: QuestionId) -> QuizResult<bool> {
        let deleted = sqlx::query("DELETE FROM questions WHERE question_id = $1")
            .bind(id.value())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }
}

// ============================================================================
// User Repository Implementation
// ============================================================================

impl UserRepository for PgQuizRepository {
    async fn find_all(&self) -> QuizResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserRow>(
            "SELECT user_id, user_name, attempted, correct FROM users ORDER BY user_id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(UserRow::into_user).collect())
    }

    async fn find_by_id(&self, id: UserId) -> QuizResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT user_id, user_name, attempted, correct FROM users WHERE user_id = $1",
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(UserRow::into_user))
    }

    async fn insert(&self, new_user: &NewUser) -> QuizResult<User> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (user_name, attempted, correct)
            VALUES ($1, $2, $3)
            RETURNING user_id, user_name, attempted, correct
            "#,
        )
        .bind(new_user.name.as_deref())
        .bind(new_user.attempted)
        .bind(new_user.correct)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_user())
    }

    async fn update(&self, user: &User) -> QuizResult<()> {
        sqlx::query(
            r#"
            UPDATE users SET
                user_name = $2,
                attempted = $3,
                correct = $4
            WHERE user_id = $1
            "#,
        )
        .bind(user.id.value())
        .bind(user.name.as_deref())
        .bind(user.attempted)
        .bind(user.correct)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, id: UserId) -> QuizResult<bool> {
        let deleted = sqlx::query("DELETE FROM users WHERE user_id = $1")
            .bind(id.value())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }

    async fn record_attempt(&self, id: UserId, is_correct: bool) -> QuizResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            UPDATE users SET
                attempted = attempted + 1,
                correct = correct + $2
            WHERE user_id = $1
            RETURNING user_id, user_name, attempted, correct
            "#,
        )
        .bind(id.value())
        .bind(i32::from(is_correct))
        .fetch_optional(&self.pool)
        .await
        .map_err(counter_error)?;

        Ok(row.map(UserRow::into_user))
    }
}

/// SQLSTATE `numeric_value_out_of_range`
const NUMERIC_VALUE_OUT_OF_RANGE: &str = "22003";

/// An increment past `INTEGER` range is a counter invariant violation
fn counter_error(err: sqlx::Error) -> QuizError {
    match &err {
        sqlx::Error::Database(db_err)
            if db_err.code().as_deref() == Some(NUMERIC_VALUE_OUT_OF_RANGE) =>
        {
            QuizError::InvalidCounters(COUNTER_OVERFLOW)
        }
        _ => QuizError::Database(err),
    }
}

// Internal row types for sqlx mapping
#[derive(sqlx::FromRow)]
struct QuestionRow {
    question_id: i32,
    name: Option<String>,
    choice_a: Option<String>,
    choice_b: Option<String>,
    choice_c: Option<String>,
    choice_d: Option<String>,
    answer: Option<String>,
}

impl QuestionRow {
    fn into_question(self) -> QuizResult<Question> {
        let answer = self
            .answer
            .map(|raw| {
                Choice::parse(&raw).map_err(|_| {
                    QuizError::Internal(format!(
                        "question {} has corrupt answer {raw:?}",
                        self.question_id
                    ))
                })
            })
            .transpose()?;

        Ok(Question {
            id: QuestionId::new(self.question_id),
            name: self.name,
            a: self.choice_a,
            b: self.choice_b,
            c: self.choice_c,
            d: self.choice_d,
            answer,
        })
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    user_id: i32,
    user_name: Option<String>,
    attempted: i32,
    correct: i32,
}

impl UserRow {
    fn into_user(self) -> User {
        User {
            id: UserId::new(self.user_id),
            name: self.user_name,
            attempted: self.attempted,
            correct: self.correct,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_error_passes_other_errors_through() {
        assert!(matches!(
            counter_error(sqlx::Error::RowNotFound),
            QuizError::Database(sqlx::Error::RowNotFound)
        ));
        assert!(matches!(
            counter_error(sqlx::Error::PoolTimedOut),
            QuizError::Database(_)
        ));
    }
}
