//! Domain Value Objects
//!
//! クイズドメインの不変な値型。
//!
//! ## 設計方針
//! - 選択肢は `A`〜`D` の 4 つのみ。入力は大文字・小文字を問わず受け付け、
//!   正規形は大文字
//! - 正誤判定の大文字・小文字の扱いは [`AnswerMatching`] で切り替える
//! - 正答率は浮動小数点を介さず、有理数として厳密に比較する
//!
//! ## 不変条件
//! - [`Choice`] はちょうど 1 文字
//! - [`Score`] の分子・分母は 0 以上

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{QuizError, QuizResult};

/// 問題の 4 つの解答欄のいずれか
///
/// ## Examples
/// ```rust
/// use quiz::domain::value_objects::Choice;
///
/// assert_eq!(Choice::parse("b").unwrap(), Choice::B);
/// assert!(Choice::parse("E").is_err());
/// assert!(Choice::parse("AB").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Choice {
    A,
    B,
    C,
    D,
}

impl Choice {
    /// Parse a submitted choice.
    ///
    /// Must be exactly one character, `A`-`D` in either case.
    pub fn parse(raw: &str) -> QuizResult<Self> {
        let mut chars = raw.chars();
        let parsed = match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c),
            _ => None,
        };
        parsed.ok_or_else(|| QuizError::InvalidChoice(raw.to_string()))
    }

    fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'A' => Some(Choice::A),
            'B' => Some(Choice::B),
            'C' => Some(Choice::C),
            'D' => Some(Choice::D),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Choice::A => "A",
            Choice::B => "B",
            Choice::C => "C",
            Choice::D => "D",
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Choice {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Choice {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Choice::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// How a submitted choice is compared with the stored answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnswerMatching {
    /// `"b"` scores against answer `B`
    #[default]
    CaseInsensitive,
    /// Only the upper-case letter scores
    CaseSensitive,
}

impl AnswerMatching {
    /// Whether `submitted` (already validated by [`Choice::parse`]) hits `answer`
    pub fn is_match(&self, submitted: &str, answer: Choice) -> bool {
        match self {
            AnswerMatching::CaseInsensitive => submitted.eq_ignore_ascii_case(answer.as_str()),
            AnswerMatching::CaseSensitive => submitted == answer.as_str(),
        }
    }
}

/// 正答率（`correct / attempted`）
///
/// 比較は `c1 * a2` と `c2 * a1` の交差乗算で行うため丸め誤差が出ません。
/// 挑戦回数 0 は 0% として扱います。等価性は値で判定するので 1/2 == 2/4。
///
/// ## Examples
/// ```rust
/// use quiz::domain::value_objects::Score;
///
/// assert!(Score::new(4, 4) > Score::new(8, 10));
/// assert_eq!(Score::new(1, 2), Score::new(2, 4));
/// assert_eq!(Score::new(0, 0), Score::new(0, 5));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Score {
    correct: i64,
    attempted: i64,
}

impl Score {
    pub fn new(correct: i32, attempted: i32) -> Self {
        Self {
            correct: correct.max(0) as i64,
            attempted: attempted.max(0) as i64,
        }
    }

    pub fn ratio(&self) -> f64 {
        if self.attempted == 0 {
            0.0
        } else {
            self.correct as f64 / self.attempted as f64
        }
    }

    fn denominator(&self) -> i64 {
        self.attempted.max(1)
    }
}

impl Ord for Score {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.correct * other.denominator()).cmp(&(other.correct * self.denominator()))
    }
}

impl PartialOrd for Score {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Score {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Score {}
