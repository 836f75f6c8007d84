//! Domain Entities
//!
//! クイズドメインの中核エンティティ。
//!
//! ## 不変条件
//! - ID はストアが採番する
//! - `attempted >= 0`、`correct >= 0`、`correct <= attempted`
//! - カウンタは減少しない。違反する変更は一切反映せずに拒否する
//! - 部分更新では `None` のフィールドを変更しない

use kernel::id::{QuestionId, UserId};

use crate::domain::value_objects::{Choice, Score};
use crate::error::{QuizError, QuizResult};

/// Question entity - a prompt with four choices and one correct slot
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    pub id: QuestionId,
    pub name: Option<String>,
    pub a: Option<String>,
    pub b: Option<String>,
    pub c: Option<String>,
    pub d: Option<String>,
    pub answer: Option<Choice>,
}

/// Question fields without an id
///
/// Used both as the insert payload and as a partial update, where `None`
/// leaves the stored field untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuestionFields {
    pub name: Option<String>,
    pub a: Option<String>,
    pub b: Option<String>,
    pub c: Option<String>,
    pub d: Option<String>,
    pub answer: Option<Choice>,
}

impl Question {
    /// Build the stored record once the store has assigned an id
    pub fn from_fields(id: QuestionId, fields: QuestionFields) -> Self {
        Self {
            id,
            name: fields.name,
            a: fields.a,
            b: fields.b,
            c: fields.c,
            d: fields.d,
            answer: fields.answer,
        }
    }

    /// Overwrite only the supplied fields
    pub fn apply(&mut self, changes: QuestionFields) {
        if let Some(name) = changes.name {
            self.name = Some(name);
        }
        if let Some(a) = changes.a {
            self.a = Some(a);
        }
        if let Some(b) = changes.b {
            self.b = Some(b);
        }
        if let Some(c) = changes.c {
            self.c = Some(c);
        }
        if let Some(d) = changes.d {
            self.d = Some(d);
        }
        if let Some(answer) = changes.answer {
            self.answer = Some(answer);
        }
    }
}

/// User entity - a player and their aggregate answer counts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub name: Option<String>,
    /// Questions attempted, never decreases
    pub attempted: i32,
    /// Correct answers, never decreases and never exceeds `attempted`
    pub correct: i32,
}

/// Insert payload for a user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewUser {
    pub name: Option<String>,
    pub attempted: i32,
    pub correct: i32,
}

impl NewUser {
    pub fn validate(&self) -> QuizResult<()> {
        check_counters(self.attempted, self.correct)
    }
}

/// Partial update for a user; `None` leaves the field untouched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserChanges {
    pub name: Option<String>,
    pub attempted: Option<i32>,
    pub correct: Option<i32>,
}

impl User {
    pub fn from_new(id: UserId, new_user: NewUser) -> Self {
        Self {
            id,
            name: new_user.name,
            attempted: new_user.attempted,
            correct: new_user.correct,
        }
    }

    pub fn score(&self) -> Score {
        Score::new(self.correct, self.attempted)
    }

    /// `correct / attempted`, 0.0 before the first attempt
    pub fn percent_correct(&self) -> f64 {
        self.score().ratio()
    }

    /// Merge supplied fields, rejecting the whole change if the merged
    /// counters are invalid. Nothing is modified on error.
    pub fn apply(&mut self, changes: UserChanges) -> QuizResult<()> {
        let attempted = changes.attempted.unwrap_or(self.attempted);
        let correct = changes.correct.unwrap_or(self.correct);

        check_counters(attempted, correct)?;
        if attempted < self.attempted || correct < self.correct {
            return Err(QuizError::InvalidCounters("counters must not decrease"));
        }

        if let Some(name) = changes.name {
            self.name = Some(name);
        }
        self.attempted = attempted;
        self.correct = correct;
        Ok(())
    }

    /// Count one answered question. Nothing is modified on overflow.
    pub fn record_attempt(&mut self, is_correct: bool) -> QuizResult<()> {
        let attempted = self.attempted.checked_add(1);
        let correct = self.correct.checked_add(i32::from(is_correct));
        let (Some(attempted), Some(correct)) = (attempted, correct) else {
            return Err(QuizError::InvalidCounters(COUNTER_OVERFLOW));
        };

        self.attempted = attempted;
        self.correct = correct;
        Ok(())
    }
}

/// Reported when an increment would exceed the counter range
pub const COUNTER_OVERFLOW: &str = "counter overflow";

fn check_counters(attempted: i32, correct: i32) -> QuizResult<()> {
    if attempted < 0 || correct < 0 {
        return Err(QuizError::InvalidCounters("counters must not be negative"));
    }
    if correct > attempted {
        return Err(QuizError::InvalidCounters(
            "correct must not exceed attempted",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question() -> Question {
        Question::from_fields(
            QuestionId::new(1),
            QuestionFields {
                name: Some("2 + 2?".into()),
                a: Some("3".into()),
                b: Some("4".into()),
                c: Some("5".into()),
                d: Some("22".into()),
                answer: Some(Choice::B),
            },
        )
    }

    fn user(attempted: i32, correct: i32) -> User {
        User {
            id: UserId::new(1),
            name: Some("ada".into()),
            attempted,
            correct,
        }
    }

    #[test]
    fn test_question_apply_keeps_omitted_fields() {
        let mut q = question();
        q.apply(QuestionFields {
            d: Some("six".into()),
            ..Default::default()
        });

        assert_eq!(q.d.as_deref(), Some("six"));
        assert_eq!(q.name.as_deref(), Some("2 + 2?"));
        assert_eq!(q.answer, Some(Choice::B));
    }

    #[test]
    fn test_question_apply_empty_is_noop() {
        let mut q = question();
        q.apply(QuestionFields::default());
        assert_eq!(q, question());
    }

    #[test]
    fn test_percent_correct() {
        assert_eq!(user(10, 8).percent_correct(), 0.8);
        assert_eq!(user(0, 0).percent_correct(), 0.0);
    }

    #[test]
    fn test_user_apply_merges() {
        let mut u = user(2, 1);
        u.apply(UserChanges {
            attempted: Some(5),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(u.attempted, 5);
        assert_eq!(u.correct, 1);
        assert_eq!(u.name.as_deref(), Some("ada"));
    }

    #[test]
    fn test_user_apply_rejects_without_mutation() {
        let mut u = user(2, 1);

        let err = u
            .apply(UserChanges {
                name: Some("bob".into()),
                correct: Some(3),
                ..Default::default()
            })
            .unwrap_err();
        assert!(matches!(err, QuizError::InvalidCounters(_)));

        let err = u
            .apply(UserChanges {
                attempted: Some(1),
                correct: Some(1),
                ..Default::default()
            })
            .unwrap_err();
        assert!(matches!(err, QuizError::InvalidCounters(_)));

        assert_eq!(u, user(2, 1));
    }

    #[test]
    fn test_new_user_validation() {
        assert!(NewUser::default().validate().is_ok());
        assert!(
            NewUser {
                attempted: -1,
                ..Default::default()
            }
            .validate()
            .is_err()
        );
        assert!(
            NewUser {
                attempted: 1,
                correct: 2,
                ..Default::default()
            }
            .validate()
            .is_err()
        );
    }

    #[test]
    fn test_record_attempt() {
        let mut u = user(0, 0);
        u.record_attempt(true).unwrap();
        u.record_attempt(false).unwrap();
        assert_eq!((u.attempted, u.correct), (2, 1));
    }

    #[test]
    fn test_record_attempt_at_counter_limit() {
        let mut u = user(i32::MAX, 7);
        let err = u.record_attempt(true).unwrap_err();
        assert!(matches!(err, QuizError::InvalidCounters(COUNTER_OVERFLOW)));
        assert_eq!((u.attempted, u.correct), (i32::MAX, 7));

        let mut u = user(i32::MAX, i32::MAX);
        assert!(u.record_attempt(false).is_err());
        assert_eq!((u.attempted, u.correct), (i32::MAX, i32::MAX));
    }
}
