use std::fmt::{Debug, Formatter};

use crate::{AppError, AppResult};

const BEARER_PREFIX: &str = "Bearer ";

/// Opaque access token presented by the caller.
///
/// The facade never inspects the token; it is forwarded verbatim to the
/// identity provider on every administrative call.
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken(String);

impl BearerToken {
    /// Wraps a raw token value.
    pub fn new(value: impl Into<String>) -> AppResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(AppError::Unauthorized("missing token".to_owned()));
        }

        Ok(Self(value))
    }

    /// Parses an `Authorization` header value of the form `Bearer <token>`.
    pub fn from_authorization_header(header: &str) -> AppResult<Self> {
        let token = header
            .strip_prefix(BEARER_PREFIX)
            .ok_or_else(|| AppError::Unauthorized("missing token".to_owned()))?;

        Self::new(token)
    }

    /// Returns the raw token.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the `Authorization` header value for upstream requests.
    #[must_use]
    pub fn authorization_value(&self) -> String {
        format!("{BEARER_PREFIX}{}", self.0)
    }
}

impl Debug for BearerToken {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("BearerToken(<redacted>)")
    }
}
