//! Error codes and the unified application error type.
//!
//! Every failure a handler can produce is an [`AppError`] carrying an
//! [`ErrorCode`]; the `IntoResponse` impl maps it to an HTTP status plus a
//! small JSON body, so handlers propagate with `?` instead of building
//! responses by hand.

use http::StatusCode;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Wire-level error codes, stable across clients.
///
/// - 0xxx: general
/// - 1xxx: authentication
/// - 2xxx: permission
/// - 9xxx: system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,

    /// User is not authenticated
    NotAuthenticated = 1001,
    /// Invalid credentials (username/password)
    InvalidCredentials = 1002,
    /// Session has expired
    SessionExpired = 1005,

    /// Permission denied
    PermissionDenied = 2001,
    /// A user may not delete their own account
    CannotDeleteSelf = 2004,
    /// User is still referenced by time entries or deposits
    UserInUse = 2005,

    /// Internal server error
    InternalError = 9001,
}

impl ErrorCode {
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Default human-readable message for this code
    pub fn message(&self) -> &'static str {
        match self {
            Self::ValidationFailed => "Validation failed",
            Self::NotFound => "Resource not found",
            Self::AlreadyExists => "Resource already exists",
            Self::NotAuthenticated => "Authentication required",
            Self::InvalidCredentials => "Invalid username or password",
            Self::SessionExpired => "Session has expired",
            Self::PermissionDenied => "Permission denied",
            Self::CannotDeleteSelf => "Cannot delete your own account",
            Self::UserInUse => "User is still referenced by other records",
            Self::InternalError => "Internal server error",
        }
    }

    /// HTTP status this code maps to
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::ValidationFailed => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::AlreadyExists | Self::UserInUse => StatusCode::CONFLICT,
            Self::NotAuthenticated | Self::InvalidCredentials | Self::SessionExpired => {
                StatusCode::UNAUTHORIZED
            }
            Self::PermissionDenied | Self::CannotDeleteSelf => StatusCode::FORBIDDEN,
            Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> u16 {
        code.code()
    }
}

impl TryFrom<u16> for ErrorCode {
    type Error = String;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(Self::ValidationFailed),
            3 => Ok(Self::NotFound),
            4 => Ok(Self::AlreadyExists),
            1001 => Ok(Self::NotAuthenticated),
            1002 => Ok(Self::InvalidCredentials),
            1005 => Ok(Self::SessionExpired),
            2001 => Ok(Self::PermissionDenied),
            2004 => Ok(Self::CannotDeleteSelf),
            2005 => Ok(Self::UserInUse),
            9001 => Ok(Self::InternalError),
            _ => Err(format!("unknown error code: {value}")),
        }
    }
}

/// Application error with a structured code and a human-readable message.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    pub code: ErrorCode,
    pub message: String,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::NotFound, format!("{} not found", resource.into()))
    }

    pub fn permission_denied(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::PermissionDenied, msg)
    }
}

/// Error response body sent to clients
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: u16,
    pub message: String,
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;

        let status = self.code.http_status();
        if status.is_server_error() {
            tracing::error!(code = %self.code, message = %self.message, "request failed");
        }
        let body = ErrorBody {
            code: self.code.code(),
            message: self.message,
        };
        (status, Json(body)).into_response()
    }
}

/// Log a database/infrastructure error and surface an opaque internal error.
pub fn internal(e: impl fmt::Display) -> AppError {
    tracing::error!(error = %e, "database error");
    AppError::new(ErrorCode::InternalError)
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_new() {
        let err = AppError::new(ErrorCode::NotFound);
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Resource not found");
    }

    #[test]
    fn test_app_error_with_message() {
        let err = AppError::with_message(ErrorCode::ValidationFailed, "start is not a timestamp");
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.message, "start is not a timestamp");
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(ErrorCode::ValidationFailed.http_status(), StatusCode::BAD_REQUEST);
        assert_eq!(ErrorCode::NotAuthenticated.http_status(), StatusCode::UNAUTHORIZED);
        assert_eq!(ErrorCode::PermissionDenied.http_status(), StatusCode::FORBIDDEN);
        assert_eq!(ErrorCode::CannotDeleteSelf.http_status(), StatusCode::FORBIDDEN);
        assert_eq!(ErrorCode::UserInUse.http_status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_code_round_trip() {
        for code in [
            ErrorCode::ValidationFailed,
            ErrorCode::NotFound,
            ErrorCode::AlreadyExists,
            ErrorCode::NotAuthenticated,
            ErrorCode::InvalidCredentials,
            ErrorCode::SessionExpired,
            ErrorCode::PermissionDenied,
            ErrorCode::CannotDeleteSelf,
            ErrorCode::UserInUse,
            ErrorCode::InternalError,
        ] {
            assert_eq!(ErrorCode::try_from(code.code()), Ok(code));
        }
    }
}
