//! Application Error - Unified error type for the application
//!
//! Defines [`AppError`], [`AppResult<T>`] and the [`Problem`] body every
//! error is rendered as.

use serde::Serialize;
use std::borrow::Cow;
use std::error::Error;
use std::fmt;

use super::kind::ErrorKind;

/// アプリケーション統一エラー型
///
/// ドメインクレートは HTTP 境界で独自のエラー列挙体をこの型へ変換し、
/// すべての失敗を同じ形式でレンダリングします。
///
/// ## Fields
/// * `kind` - エラーの分類（HTTP ステータスコードにマッピング）
/// * `message` - 利用者向けメッセージ（`detail` として返却）
/// * `action` - 利用者が取るべきアクション（オプション）
/// * `source` - 元のエラー（ログ専用、レスポンスには含めない）
///
/// ## Examples
/// ```rust
/// use kernel::error::{app_error::AppError, kind::ErrorKind};
///
/// let err = AppError::new(ErrorKind::NotFound, "Question not found")
///     .with_action("Check the question id");
/// assert_eq!(err.status_code(), 404);
/// assert_eq!(err.problem().title, "Not Found");
/// ```
pub struct AppError {
    /// エラー種別
    kind: ErrorKind,
    /// 利用者向けメッセージ
    message: Cow<'static, str>,
    /// 利用者が取るべきアクション
    action: Option<Cow<'static, str>>,
    /// 元のエラー（デバッグ用）
    source: Option<Box<dyn Error + Send + Sync + 'static>>,
}

/// アプリケーション結果型エイリアス
///
/// `Result<T, AppError>` の省略形です。
pub type AppResult<T> = Result<T, AppError>;

/// RFC 7807 Problem Details 本文
///
/// ## Fields
/// * `type` - ステータスコードごとの参照 URI
/// * `title` - ステータスの標準フレーズ
/// * `status` - HTTP ステータスコード
/// * `detail` - [`AppError`] のメッセージ
/// * `action` - 対処方法（無い場合は `null`）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Problem<'a> {
    #[serde(rename = "type")]
    pub type_uri: String,
    pub title: &'static str,
    pub status: u16,
    pub detail: &'a str,
    pub action: Option<&'a str>,
}

impl AppError {
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
            action: None,
            source: None,
        }
    }

    /// 対処方法を付与する
    ///
    /// ## Arguments
    /// * `action` - メッセージと一緒に返却されるヒント
    pub fn with_action(mut self, action: impl Into<Cow<'static, str>>) -> Self {
        self.action = Some(action.into());
        self
    }

    /// Attach the underlying error (kept for logs, never rendered)
    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn status_code(&self) -> u16 {
        self.kind.status_code()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn action(&self) -> Option<&str> {
        self.action.as_deref()
    }

    /// レスポンス本文を組み立てる
    ///
    /// `source` は含めません。
    pub fn problem(&self) -> Problem<'_> {
        let status = self.status_code();
        Problem {
            type_uri: format!("https://httpstatuses.io/{status}"),
            title: self.kind.as_str(),
            status,
            detail: &self.message,
            action: self.action(),
        }
    }
}

impl From<ErrorKind> for AppError {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind, kind.as_str())
    }
}

impl fmt::Debug for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppError")
            .field("kind", &self.kind)
            .field("message", &self.message)
            .field("action", &self.action)
            .field("source", &self.source)
            .finish()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind.status_code(), self.message)?;
        match &self.source {
            Some(source) => write!(f, " ({source})"),
            None => Ok(()),
        }
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn Error + 'static))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_problem_body() {
        let err = AppError::new(ErrorKind::BadRequest, "Invalid choice: \"E\"")
            .with_action("Use one of A, B, C, D");

        let json = serde_json::to_value(err.problem()).unwrap();
        assert_eq!(json["type"], "https://httpstatuses.io/400");
        assert_eq!(json["title"], "Bad Request");
        assert_eq!(json["status"], 400);
        assert_eq!(json["detail"], "Invalid choice: \"E\"");
        assert_eq!(json["action"], "Use one of A, B, C, D");
    }

    #[test]
    fn test_problem_without_action_is_null() {
        let err: AppError = ErrorKind::NotFound.into();
        let json = serde_json::to_value(err.problem()).unwrap();
        assert_eq!(json["detail"], "Not Found");
        assert!(json["action"].is_null());
    }

    #[test]
    fn test_source_is_logged_not_rendered() {
        let parse_err = "x".parse::<i32>().unwrap_err();
        let err = AppError::new(ErrorKind::BadRequest, "Invalid id").with_source(parse_err);

        assert!(err.source().is_some());
        assert_eq!(err.to_string(), "400: Invalid id (invalid digit found in string)");
        assert_eq!(err.problem().detail, "Invalid id");
    }
}
