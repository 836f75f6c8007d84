//! Error conversions
//!
//! Store errors into [`AppError`], and [`AppError`] into an HTTP response.

#[allow(unused_imports)]
use super::{app_error::AppError, kind::ErrorKind};

// ============================================================================
// SQLx conversions (feature-gated)
// ============================================================================

/// Classify a PostgreSQL SQLSTATE
///
/// See <https://www.postgresql.org/docs/current/errcodes-appendix.html>
#[cfg(feature = "sqlx")]
fn classify_sqlstate(code: &str) -> (ErrorKind, &'static str) {
    match code {
        // Counters or answer key rejected by a CHECK constraint
        "23514" => (ErrorKind::UnprocessableEntity, "Record violates a stored constraint"),
        "23502" => (ErrorKind::BadRequest, "Required column is null"),
        // Counter incremented past the column range
        "22003" => (ErrorKind::UnprocessableEntity, "Value out of range"),
        "23505" => (ErrorKind::Conflict, "Record already exists"),
        c if c.starts_with("23") => (ErrorKind::Conflict, "Integrity constraint violation"),
        "42501" => (ErrorKind::Forbidden, "Insufficient privilege"),
        c if c.starts_with("53") => (ErrorKind::ServiceUnavailable, "Database resource exhausted"),
        c if c.starts_with("57") => (ErrorKind::ServiceUnavailable, "Database unavailable"),
        _ => (ErrorKind::InternalServerError, "Database error"),
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        let (kind, message) = match &err {
            sqlx::Error::RowNotFound => (ErrorKind::NotFound, "Record not found"),
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
                (ErrorKind::ServiceUnavailable, "Database connection pool exhausted")
            }
            sqlx::Error::Io(_) => (ErrorKind::ServiceUnavailable, "Database connection error"),
            sqlx::Error::Database(db_err) => match db_err.code() {
                Some(code) => classify_sqlstate(&code),
                None => (ErrorKind::InternalServerError, "Database error"),
            },
            _ => (ErrorKind::InternalServerError, "Database error"),
        };
        AppError::new(kind, message).with_source(err)
    }
}

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status, Json(self.problem())).into_response()
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[cfg(feature = "sqlx")]
    #[test]
    fn test_sqlstate_classes() {
        assert_eq!(classify_sqlstate("23514").0, ErrorKind::UnprocessableEntity);
        assert_eq!(classify_sqlstate("22003").0, ErrorKind::UnprocessableEntity);
        assert_eq!(classify_sqlstate("23505").0, ErrorKind::Conflict);
        assert_eq!(classify_sqlstate("23503").0, ErrorKind::Conflict);
        assert_eq!(classify_sqlstate("53300").0, ErrorKind::ServiceUnavailable);
        assert_eq!(classify_sqlstate("57P01").0, ErrorKind::ServiceUnavailable);
        assert_eq!(classify_sqlstate("XX000").0, ErrorKind::InternalServerError);
    }

    #[cfg(feature = "sqlx")]
    #[test]
    fn test_sqlx_variants() {
        let app_err: AppError = sqlx::Error::RowNotFound.into();
        assert_eq!(app_err.kind(), ErrorKind::NotFound);

        let app_err: AppError = sqlx::Error::PoolTimedOut.into();
        assert_eq!(app_err.kind(), ErrorKind::ServiceUnavailable);
    }

    #[cfg(feature = "axum")]
    #[test]
    fn test_problem_response_status() {
        use axum::response::IntoResponse;

        let response = AppError::new(ErrorKind::UnprocessableEntity, "correct exceeds attempted")
            .into_response();
        assert_eq!(response.status().as_u16(), 422);
    }
}
