//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use crate::domain::entities::{NewUser, Question, QuestionFields, User, UserChanges};
use crate::domain::value_objects::Choice;
use crate::error::QuizResult;

// ============================================================================
// Questions
// ============================================================================

/// Body for POST /questions and PUT /questions/{id}
///
/// Every field is optional; on update an omitted or `null` field is left
/// unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionRequest {
    pub name: Option<String>,
    pub a: Option<String>,
    pub b: Option<String>,
    pub c: Option<String>,
    pub d: Option<String>,
    /// Validated separately so a bad key reports as an invalid choice
    pub answer: Option<String>,
}

impl QuestionRequest {
    pub fn into_fields(self) -> QuizResult<QuestionFields> {
        let answer = self.answer.as_deref().map(Choice::parse).transpose()?;
        Ok(QuestionFields {
            name: self.name,
            a: self.a,
            b: self.b,
            c: self.c,
            d: self.d,
            answer,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionResponse {
    pub id: i32,
    pub name: Option<String>,
    pub a: Option<String>,
    pub b: Option<String>,
    pub c: Option<String>,
    pub d: Option<String>,
    pub answer: Option<Choice>,
}

impl From<Question> for QuestionResponse {
    fn from(question: Question) -> Self {
        Self {
            id: question.id.value(),
            name: question.name,
            a: question.a,
            b: question.b,
            c: question.c,
            d: question.d,
            answer: question.answer,
        }
    }
}

// ============================================================================
// Users
// ============================================================================

/// Body for POST /users and PUT /users/{id}
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRequest {
    pub name: Option<String>,
    pub attempted: Option<i32>,
    pub correct: Option<i32>,
}

impl UserRequest {
    /// Counters default to zero on create
    pub fn into_new_user(self) -> NewUser {
        NewUser {
            name: self.name,
            attempted: self.attempted.unwrap_or(0),
            correct: self.correct.unwrap_or(0),
        }
    }

    pub fn into_changes(self) -> UserChanges {
        UserChanges {
            name: self.name,
            attempted: self.attempted,
            correct: self.correct,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i32,
    pub name: Option<String>,
    pub attempted: i32,
    pub correct: i32,
    /// Derived, 0.0 before the first attempt
    pub percent_correct: f64,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.value(),
            percent_correct: user.percent_correct(),
            name: user.name,
            attempted: user.attempted,
            correct: user.correct,
        }
    }
}

// ============================================================================
// Answers
// ============================================================================

/// Body for PUT /users/{userid}/answer
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerRequest {
    #[serde(alias = "question_id", alias = "questionid")]
    pub question_id: i32,
    pub choice: String,
}

// ============================================================================
// Health
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
