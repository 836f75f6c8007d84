//! Quiz Router

use axum::{
    Router,
    routing::{get, put},
};
use std::sync::Arc;

use crate::application::config::QuizConfig;
use crate::domain::repository::{QuestionRepository, UserRepository};
use crate::infra::postgres::PgQuizRepository;
use crate::presentation::handlers::{self, QuizAppState};

/// Create the quiz router with PostgreSQL repository
pub fn quiz_router(repo: PgQuizRepository, config: QuizConfig) -> Router {
    quiz_router_generic(repo, config)
}

/// Create a quiz router for any repository implementation
pub fn quiz_router_generic<R>(repo: R, config: QuizConfig) -> Router
where
    R: QuestionRepository + UserRepository + Clone + Send + Sync + 'static,
{
    let state = QuizAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    Router::new()
        .route(
            "/questions",
            get(handlers::list_questions::<R>).post(handlers::create_question::<R>),
        )
        .route(
            "/questions/{id}",
            get(handlers::get_question::<R>)
                .put(handlers::update_question::<R>)
                .delete(handlers::delete_question::<R>),
        )
        .route(
            "/users",
            get(handlers::list_users::<R>).post(handlers::create_user::<R>),
        )
        .route(
            "/users/{id}",
            get(handlers::get_user::<R>)
                .put(handlers::update_user::<R>)
                .delete(handlers::delete_user::<R>),
        )
        .route("/users/{id}/answer", put(handlers::record_answer::<R>))
        .route("/leaderboard/{k}", get(handlers::leaderboard::<R>))
        .route("/health", get(handlers::health))
        .with_state(state)
}
