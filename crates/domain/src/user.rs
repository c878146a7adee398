//! User domain types.
//!
//! The read model [`User`] has no password field, so a password can never
//! leak into an outbound representation once it has been handed upstream.

use realmgate_core::{AppResult, NonEmptyString};
use serde::{Deserialize, Serialize};

/// User as exposed by the facade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Identifier assigned by the identity provider.
    pub id: String,
    /// Login name, unique within the realm.
    pub username: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Whether the account may log in. Disabling is the only form of deletion.
    pub enabled: bool,
}

/// Write model for user creation. Carries the initial password.
#[derive(Clone, PartialEq, Eq)]
pub struct NewUser {
    /// Login name, unique within the realm.
    pub username: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Initial enabled flag.
    pub enabled: bool,
    /// Initial password, set as a non-temporary credential.
    pub password: String,
}

impl NewUser {
    /// Checks the fields the identity provider requires before any call is made.
    pub fn validate(&self) -> AppResult<()> {
        NonEmptyString::required("username", self.username.as_str())?;
        NonEmptyString::required("password", self.password.as_str())?;
        Ok(())
    }

    /// Drops the password and attaches the identifier assigned upstream.
    #[must_use]
    pub fn into_user(self, id: impl Into<String>) -> User {
        User {
            id: id.into(),
            username: self.username,
            first_name: self.first_name,
            last_name: self.last_name,
            enabled: self.enabled,
        }
    }
}

impl std::fmt::Debug for NewUser {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("NewUser")
            .field("username", &self.username)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("enabled", &self.enabled)
            .finish_non_exhaustive()
    }
}

/// Full-replace update of a user's profile fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserUpdate {
    /// Login name.
    pub username: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Enabled flag.
    pub enabled: bool,
}

impl UserUpdate {
    /// Checks required fields.
    pub fn validate(&self) -> AppResult<()> {
        NonEmptyString::required("username", self.username.as_str())?;
        Ok(())
    }
}
