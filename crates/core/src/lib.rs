//! Shared primitives for all Rust crates in Realmgate.

#![forbid(unsafe_code)]

/// Bearer credential forwarded to the identity provider.
pub mod auth;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use auth::BearerToken;

/// Result type used across Realmgate crates.
pub type AppResult<T> = Result<T, AppError>;

/// A validated non-empty UTF-8 string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NonEmptyString(String);

impl NonEmptyString {
    /// Creates a validated non-empty string.
    pub fn new(value: impl Into<String>) -> AppResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(AppError::Validation(
                "value must not be empty or whitespace".to_owned(),
            ));
        }

        Ok(Self(value))
    }

    /// Creates a validated non-empty string, naming the offending field on failure.
    pub fn required(field: &str, value: impl Into<String>) -> AppResult<Self> {
        Self::new(value).map_err(|_| AppError::Validation(format!("{field} is required")))
    }

    /// Returns the underlying string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<NonEmptyString> for String {
    fn from(value: NonEmptyString) -> Self {
        value.0
    }
}

/// Common application error categories.
///
/// Upstream outcomes are classified once, where the identity provider
/// response is first inspected, and travel unchanged to the HTTP layer.
#[derive(Debug, Error)]
pub enum AppError {
    /// Invalid input or violated invariant.
    #[error("validation error: {0}")]
    Validation(String),

    /// Requested resource does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// Write operation conflicts with existing state.
    #[error("conflict: {0}")]
    Conflict(String),

    /// Caller is not authenticated or presented invalid credentials.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Caller is authenticated but the identity provider refused access.
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// Identity provider answered with an unclassified error status.
    #[error("identity provider error: status {status}")]
    Upstream {
        /// HTTP status returned by the identity provider.
        status: u16,
        /// Raw response body, kept as diagnostic context.
        body: String,
    },

    /// Identity provider could not be reached or returned an unreadable body.
    #[error("transport error: {0}")]
    Transport(String),

    /// Internal unexpected error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns true when the error was produced from an identity provider exchange.
    #[must_use]
    pub fn is_upstream_origin(&self) -> bool {
        matches!(
            self,
            Self::NotFound(_)
                | Self::Conflict(_)
                | Self::Forbidden(_)
                | Self::Upstream { .. }
                | Self::Transport(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{AppError, NonEmptyString};

    #[test]
    fn non_empty_string_rejects_whitespace() {
        let result = NonEmptyString::new("   ");
        assert!(result.is_err());
    }

    #[test]
    fn required_names_the_field() {
        let result = NonEmptyString::required("username", "");
        assert!(
            matches!(result, Err(AppError::Validation(message)) if message == "username is required")
        );
    }

    #[test]
    fn upstream_errors_report_their_origin() {
        let error = AppError::Upstream {
            status: 502,
            body: "bad gateway".to_owned(),
        };
        assert!(error.is_upstream_origin());
        assert!(!AppError::Validation("x".to_owned()).is_upstream_origin());
    }
}
