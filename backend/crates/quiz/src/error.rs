//! Quiz Error Types
//!
//! This module provides quiz-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Quiz-specific result type alias
pub type QuizResult<T> = Result<T, QuizError>;

/// Quiz-specific error variants
#[derive(Debug, Error)]
pub enum QuizError {
    /// No question with the requested id
    #[error("Question not found")]
    QuestionNotFound,

    /// No user with the requested id
    #[error("User not found")]
    UserNotFound,

    /// Choice or answer key outside A-D
    #[error("Invalid choice: {0:?}")]
    InvalidChoice(String),

    /// Attempt counters would break an invariant
    #[error("Invalid counters: {0}")]
    InvalidCounters(&'static str),

    /// Leaderboard size missing, negative or not an integer
    #[error("Invalid leaderboard size: {0:?}")]
    InvalidLeaderboardSize(String),

    /// Malformed JSON body or path segment
    #[error("Bad request: {0}")]
    BadRequestBody(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl QuizError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            QuizError::QuestionNotFound | QuizError::UserNotFound => StatusCode::NOT_FOUND,
            QuizError::InvalidChoice(_)
            | QuizError::InvalidLeaderboardSize(_)
            | QuizError::BadRequestBody(_) => StatusCode::BAD_REQUEST,
            QuizError::InvalidCounters(_) => StatusCode::UNPROCESSABLE_ENTITY,
            QuizError::Database(_) | QuizError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            QuizError::QuestionNotFound | QuizError::UserNotFound => ErrorKind::NotFound,
            QuizError::InvalidChoice(_)
            | QuizError::InvalidLeaderboardSize(_)
            | QuizError::BadRequestBody(_) => ErrorKind::BadRequest,
            QuizError::InvalidCounters(_) => ErrorKind::UnprocessableEntity,
            QuizError::Database(_) | QuizError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    ///
    /// Database errors go through the kernel's SQLSTATE mapping so that
    /// constraint violations surface as 4xx.
    pub fn into_app_error(self) -> AppError {
        match self {
            QuizError::Database(e) => AppError::from(e),
            QuizError::InvalidChoice(_) => {
                let message = self.to_string();
                AppError::new(ErrorKind::BadRequest, message)
                    .with_action("Use one of A, B, C, D")
            }
            other => AppError::new(other.kind(), other.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            QuizError::Database(e) => {
                tracing::error!(error = %e, "Quiz database error");
            }
            QuizError::Internal(msg) => {
                tracing::error!(message = %msg, "Quiz internal error");
            }
            QuizError::InvalidChoice(_) | QuizError::InvalidCounters(_) => {
                tracing::warn!(error = %self, "Rejected quiz input");
            }
            _ => {
                tracing::debug!(error = %self, "Quiz error");
            }
        }
    }
}

impl IntoResponse for QuizError {
    fn into_response(self) -> Response {
        self.log();
        self.into_app_error().into_response()
    }
}

impl From<JsonRejection> for QuizError {
    fn from(rejection: JsonRejection) -> Self {
        QuizError::BadRequestBody(rejection.body_text())
    }
}

impl From<PathRejection> for QuizError {
    fn from(rejection: PathRejection) -> Self {
        QuizError::BadRequestBody(rejection.body_text())
    }
}
