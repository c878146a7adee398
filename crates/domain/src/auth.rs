use realmgate_core::{AppResult, NonEmptyString};
use serde::{Deserialize, Serialize};

/// Resource-owner credentials presented at login. Never stored.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: NonEmptyString,
    password: NonEmptyString,
}

impl Credentials {
    /// Creates credentials, rejecting blank usernames or passwords.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> AppResult<Self> {
        Ok(Self {
            username: NonEmptyString::required("username", username)?,
            password: NonEmptyString::required("password", password)?,
        })
    }

    /// Returns the login name.
    #[must_use]
    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    /// Returns the plaintext password.
    #[must_use]
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("Credentials")
            .field("username", &self.username.as_str())
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Tokens issued by the identity provider after a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Token scheme, usually `Bearer`.
    pub token_type: String,
    /// Access token to forward on administrative calls.
    pub access_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    /// Refresh token.
    pub refresh_token: String,
    /// Refresh token lifetime in seconds.
    pub refresh_expires_in: i64,
}

#[cfg(test)]
mod tests {
    use super::Credentials;

    #[test]
    fn blank_password_is_rejected() {
        assert!(Credentials::new("alice@example.com", "  ").is_err());
    }

    #[test]
    fn debug_hides_password() {
        let credentials = Credentials::new("alice@example.com", "hunter22");
        let rendered = format!("{credentials:?}");
        assert!(rendered.contains("alice@example.com"));
        assert!(!rendered.contains("hunter22"));
    }
}
