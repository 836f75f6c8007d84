//! HTTP Handlers

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::id::{QuestionId, UserId};
use std::sync::Arc;

use crate::application::{
    LeaderboardUseCase, QuestionUseCase, QuizConfig, RecordAnswerInput, RecordAnswerUseCase,
    UserUseCase,
};
use crate::domain::repository::{QuestionRepository, UserRepository};
use crate::error::QuizResult;
use crate::presentation::dto::{
    AnswerRequest, HealthResponse, QuestionRequest, QuestionResponse, UserRequest, UserResponse,
};

/// Shared state for quiz handlers
#[derive(Clone)]
pub struct QuizAppState<R>
where
    R: QuestionRepository + UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<QuizConfig>,
}

type JsonBody<T> = Result<Json<T>, JsonRejection>;
type IdPath = Result<Path<i32>, PathRejection>;

// ============================================================================
// Questions
// ============================================================================

/// GET /questions
pub async fn list_questions<R>(
    State(state): State<QuizAppState<R>>,
) -> QuizResult<Json<Vec<QuestionResponse>>>
where
    R: QuestionRepository + UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = QuestionUseCase::new(state.repo.clone());
    let questions = use_case.list().await?;

    Ok(Json(questions.into_iter().map(Into::into).collect()))
}

/// GET /questions/{id}
pub async fn get_question<R>(
    State(state): State<QuizAppState<R>>,
    path: IdPath,
) -> QuizResult<Response>
where
    R: QuestionRepository + UserRepository + Clone + Send + Sync + 'static,
{
    let Path(id) = path?;
    let use_case = QuestionUseCase::new(state.repo.clone());

    // Absent is an empty result, not an error body
    Ok(match use_case.get(QuestionId::new(id)).await? {
        Some(question) => Json(QuestionResponse::from(question)).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    })
}

/// POST /questions
pub async fn create_question<R>(
    State(state): State<QuizAppState<R>>,
    body: JsonBody<QuestionRequest>,
) -> QuizResult<impl IntoResponse>
where
    R: QuestionRepository + UserRepository + Clone + Send + Sync + 'static,
{
    let Json(req) = body?;
    let use_case = QuestionUseCase::new(state.repo.clone());

    let question = use_case.create(req.into_fields()?).await?;

    Ok((StatusCode::CREATED, Json(QuestionResponse::from(question))))
}

/// PUT /questions/{id}
pub async fn update_question<R>(
    State(state): State<QuizAppState<R>>,
    path: IdPath,
    body: JsonBody<QuestionRequest>,
) -> QuizResult<Json<QuestionResponse>>
where
    R: QuestionRepository + UserRepository + Clone + Send + Sync + 'static,
{
    let Path(id) = path?;
    let Json(req) = body?;
    let use_case = QuestionUseCase::new(state.repo.clone());

    let question = use_case
        .update(QuestionId::new(id), req.into_fields()?)
        .await?;

    Ok(Json(question.into()))
}

/// DELETE /questions/{id}
pub async fn delete_question<R>(
    State(state): State<QuizAppState<R>>,
    path: IdPath,
) -> QuizResult<Json<QuestionResponse>>
where
    R: QuestionRepository + UserRepository + Clone + Send + Sync + 'static,
{
    let Path(id) = path?;
    let use_case = QuestionUseCase::new(state.repo.clone());

    let question = use_case.delete(QuestionId::new(id)).await?;

    Ok(Json(question.into()))
}

// ============================================================================
// Users
// ============================================================================

/// GET /users
pub async fn list_users<R>(
    State(state): State<QuizAppState<R>>,
) -> QuizResult<Json<Vec<UserResponse>>>
where
    R: QuestionRepository + UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = UserUseCase::new(state.repo.clone());
    let users = use_case.list().await?;

    Ok(Json(users.into_iter().map(Into::into).collect()))
}

/// GET /users/{id}
pub async fn get_user<R>(
    State(state): State<QuizAppState<R>>,
    path: IdPath,
) -> QuizResult<Response>
where
    R: QuestionRepository + UserRepository + Clone + Send + Sync + 'static,
{
    let Path(id) = path?;
    let use_case = UserUseCase::new(state.repo.clone());

    Ok(match use_case.get(UserId::new(id)).await? {
        Some(user) => Json(UserResponse::from(user)).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    })
}

/// POST /users
pub async fn create_user<R>(
    State(state): State<QuizAppState<R>>,
    body: JsonBody<UserRequest>,
) -> QuizResult<impl IntoResponse>
where
    R: QuestionRepository + UserRepository + Clone + Send + Sync + 'static,
{
    let Json(req) = body?;
    let use_case = UserUseCase::new(state.repo.clone());

    let user = use_case.create(req.into_new_user()).await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// PUT /users/{id}
pub async fn update_user<R>(
    State(state): State<QuizAppState<R>>,
    path: IdPath,
    body: JsonBody<UserRequest>,
) -> QuizResult<Json<UserResponse>>
where
    R: QuestionRepository + UserRepository + Clone + Send + Sync + 'static,
{
    let Path(id) = path?;
    let Json(req) = body?;
    let use_case = UserUseCase::new(state.repo.clone());

    let user = use_case.update(UserId::new(id), req.into_changes()).await?;

    Ok(Json(user.into()))
}

/// DELETE /users/{id}
pub async fn delete_user<R>(
    State(state): State<QuizAppState<R>>,
    path: IdPath,
) -> QuizResult<Json<UserResponse>>
where
    R: QuestionRepository + UserRepository + Clone + Send + Sync + 'static,
{
    let Path(id) = path?;
    let use_case = UserUseCase::new(state.repo.clone());

    let user = use_case.delete(UserId::new(id)).await?;

    Ok(Json(user.into()))
}

/// PUT /users/{userid}/answer
pub async fn record_answer<R>(
    State(state): State<QuizAppState<R>>,
    path: IdPath,
    body: JsonBody<AnswerRequest>,
) -> QuizResult<Json<UserResponse>>
where
    R: QuestionRepository + UserRepository + Clone + Send + Sync + 'static,
{
    let Path(user_id) = path?;
    let Json(req) = body?;

    let use_case =
        RecordAnswerUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());

    let input = RecordAnswerInput {
        user_id: UserId::new(user_id),
        question_id: QuestionId::new(req.question_id),
        choice: req.choice,
    };

    let user = use_case.execute(input).await?;

    Ok(Json(user.into()))
}

// ============================================================================
// Leaderboard
// ============================================================================

/// GET /leaderboard/{k}
pub async fn leaderboard<R>(
    State(state): State<QuizAppState<R>>,
    path: Result<Path<String>, PathRejection>,
) -> QuizResult<Json<Vec<UserResponse>>>
where
    R: QuestionRepository + UserRepository + Clone + Send + Sync + 'static,
{
    let Path(k) = path?;
    let use_case = LeaderboardUseCase::new(state.repo.clone());

    let leaders = use_case.execute(&k).await?;

    Ok(Json(leaders.into_iter().map(Into::into).collect()))
}

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
