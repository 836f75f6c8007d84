//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (Question, User)
//! - Domain value objects (Choice, AnswerMatching, Score)
//! - Domain services (top-K leaderboard selection)
//! - Repository traits (interfaces)

pub mod entities;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entities::{NewUser, Question, QuestionFields, User, UserChanges};
pub use repository::{QuestionRepository, UserRepository};
