//! Gate Error Types
//!
//! This module provides gate-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Gate-specific result type alias
pub type GateResult<T> = Result<T, GateError>;

/// Gate-specific error variants
///
/// Configuration errors (`MissingPassword`, `MissingTargetUrl`) signal a
/// deployment problem and halt rendering; `IncorrectPassword` is a
/// recoverable user-input error.
#[derive(Debug, Error)]
pub enum GateError {
    /// The shared password is not configured
    #[error("'VIEWER_PASSWORD' is not configured")]
    MissingPassword,

    /// The embed target is not configured
    #[error("'TARGET_SHEET_URL' is not configured")]
    MissingTargetUrl,

    /// Submitted password does not match
    #[error("Incorrect password")]
    IncorrectPassword,

    /// Session store failure
    #[error("Session store error: {0}")]
    Session(String),
}

impl GateError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            GateError::MissingPassword | GateError::MissingTargetUrl => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            GateError::IncorrectPassword => StatusCode::UNAUTHORIZED,
            GateError::Session(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            GateError::MissingPassword | GateError::MissingTargetUrl => {
                ErrorKind::InternalServerError
            }
            GateError::IncorrectPassword => ErrorKind::Unauthorized,
            GateError::Session(_) => ErrorKind::InternalServerError,
        }
    }

    /// Whether this is a configuration (deployment) error rather than a
    /// user-input error
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            GateError::MissingPassword | GateError::MissingTargetUrl
        )
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            GateError::MissingPassword | GateError::MissingTargetUrl => {
                tracing::error!(error = %self, "Gate configuration error");
            }
            GateError::IncorrectPassword => {
                tracing::warn!("Incorrect password attempt");
            }
            GateError::Session(msg) => {
                tracing::error!(message = %msg, "Session store error");
            }
        }
    }
}

impl IntoResponse for GateError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for GateError {
    fn from(err: AppError) -> Self {
        GateError::Session(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            GateError::MissingPassword.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            GateError::MissingTargetUrl.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            GateError::IncorrectPassword.status_code(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn test_config_errors_are_flagged() {
        assert!(GateError::MissingPassword.is_config_error());
        assert!(GateError::MissingTargetUrl.is_config_error());
        assert!(!GateError::IncorrectPassword.is_config_error());
        assert!(!GateError::Session("x".into()).is_config_error());
    }

    #[test]
    fn test_messages_name_the_missing_key() {
        assert!(GateError::MissingPassword.to_string().contains("VIEWER_PASSWORD"));
        assert!(
            GateError::MissingTargetUrl
                .to_string()
                .contains("TARGET_SHEET_URL")
        );
    }
}
