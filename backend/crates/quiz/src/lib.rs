//! Quiz Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits, leaderboard selection
//! - `application/` - Use cases
//! - `infra/` - PostgreSQL and in-memory stores
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Model
//! - Questions carry four choices and an answer key in A-D
//! - Users carry aggregate `attempted`/`correct` counters only; individual
//!   attempts are not stored
//! - The leaderboard ranks by exact `correct / attempted`, ties by lower id

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::QuizConfig;
pub use error::{QuizError, QuizResult};
pub use infra::{MemoryQuizRepository, PgQuizRepository};
pub use presentation::router::{quiz_router, quiz_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
