use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorization of application errors.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AppErrorKind {
    NotFound,
    BadRequest,
    ValidationError,
    Unauthorized,
    Forbidden,
    /// The backend could not be reached or returned a malformed body.
    Unavailable,
    InternalError,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::NotFound => write!(f, "NotFound"),
            AppErrorKind::BadRequest => write!(f, "BadRequest"),
            AppErrorKind::ValidationError => write!(f, "ValidationError"),
            AppErrorKind::Unauthorized => write!(f, "Unauthorized"),
            AppErrorKind::Forbidden => write!(f, "Forbidden"),
            AppErrorKind::Unavailable => write!(f, "Unavailable"),
            AppErrorKind::InternalError => write!(f, "InternalError"),
        }
    }
}

/// Structured error for everything the client talks to.
///
/// `code` carries the backend's machine-readable error identifier
/// (e.g. `ERR_NO_PERMISSION`) when the response body had one. The UI
/// uses it as a translation key before falling back to `message`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// Error body shapes the backend is known to send.
#[derive(Debug, Deserialize)]
struct BackendErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl AppError {
    fn new(kind: AppErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            code: None,
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::NotFound, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::BadRequest, message)
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::ValidationError, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Unauthorized, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Forbidden, message)
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Unavailable, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::InternalError, message)
    }

    /// Attach a backend error code.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Build an error from a non-success HTTP status and its raw body.
    ///
    /// Bodies of the form `{"error": "ERR_..."}` populate `code`, and
    /// `{"message": "..."}` overrides the default message. Anything else
    /// is ignored.
    pub fn from_status(status: u16, body: &str) -> Self {
        let kind = match status {
            400 => AppErrorKind::BadRequest,
            401 => AppErrorKind::Unauthorized,
            403 => AppErrorKind::Forbidden,
            404 => AppErrorKind::NotFound,
            422 => AppErrorKind::ValidationError,
            502..=504 => AppErrorKind::Unavailable,
            _ => AppErrorKind::InternalError,
        };

        let parsed = serde_json::from_str::<BackendErrorBody>(body).ok();
        let message = parsed
            .as_ref()
            .and_then(|b| b.message.clone())
            .unwrap_or_else(|| format!("Request failed with status {status}"));

        let mut err = Self::new(kind, message);
        if let Some(code) = parsed.and_then(|b| b.error) {
            err.code = Some(code);
        }
        err
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.code {
            Some(code) => write!(f, "{}: {} ({})", self.kind, self.message, code),
            None => write!(f, "{}: {}", self.kind, self.message),
        }
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_status_maps_common_codes() {
        assert_eq!(AppError::from_status(400, "").kind, AppErrorKind::BadRequest);
        assert_eq!(AppError::from_status(401, "").kind, AppErrorKind::Unauthorized);
        assert_eq!(AppError::from_status(403, "").kind, AppErrorKind::Forbidden);
        assert_eq!(AppError::from_status(404, "").kind, AppErrorKind::NotFound);
        assert_eq!(AppError::from_status(422, "").kind, AppErrorKind::ValidationError);
        assert_eq!(AppError::from_status(503, "").kind, AppErrorKind::Unavailable);
        assert_eq!(AppError::from_status(500, "").kind, AppErrorKind::InternalError);
    }

    #[test]
    fn from_status_reads_backend_error_code() {
        let err = AppError::from_status(403, r#"{"error":"ERR_NO_PERMISSION"}"#);
        assert_eq!(err.code.as_deref(), Some("ERR_NO_PERMISSION"));
        assert_eq!(err.message, "Request failed with status 403");
    }

    #[test]
    fn from_status_prefers_body_message() {
        let err = AppError::from_status(400, r#"{"message":"bad queue filter"}"#);
        assert_eq!(err.message, "bad queue filter");
        assert!(err.code.is_none());
    }

    #[test]
    fn from_status_ignores_non_json_body() {
        let err = AppError::from_status(502, "<html>Bad Gateway</html>");
        assert_eq!(err.kind, AppErrorKind::Unavailable);
        assert!(err.code.is_none());
    }

    #[test]
    fn display_includes_code_when_present() {
        let err = AppError::unauthorized("bad session").with_code("ERR_SESSION_EXPIRED");
        assert_eq!(
            format!("{}", err),
            "Unauthorized: bad session (ERR_SESSION_EXPIRED)"
        );
        assert_eq!(
            format!("{}", AppError::not_found("gone")),
            "NotFound: gone"
        );
    }

    #[test]
    fn error_roundtrip_through_json() {
        let err = AppError::validation("Validation failed").with_code("ERR_X");
        let json = serde_json::to_string(&err).unwrap();
        let parsed: AppError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, parsed);
    }
}
