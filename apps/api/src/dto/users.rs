use realmgate_domain::{NewUser, User, UserUpdate};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Incoming payload for user creation.
#[derive(Default, Deserialize, TS)]
#[serde(default)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/create-user-request.ts"
)]
pub struct CreateUserRequest {
    pub username: String,
    #[serde(alias = "firstName")]
    pub first_name: String,
    #[serde(alias = "lastName")]
    pub last_name: String,
    pub enabled: Option<bool>,
    pub password: String,
}

impl From<CreateUserRequest> for NewUser {
    fn from(value: CreateUserRequest) -> Self {
        Self {
            username: value.username,
            first_name: value.first_name,
            last_name: value.last_name,
            enabled: value.enabled.unwrap_or(true),
            password: value.password,
        }
    }
}

/// Incoming payload for a full user replacement.
#[derive(Debug, Default, Deserialize, TS)]
#[serde(default)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/update-user-request.ts"
)]
pub struct UpdateUserRequest {
    pub username: String,
    #[serde(alias = "firstName")]
    pub first_name: String,
    #[serde(alias = "lastName")]
    pub last_name: String,
    pub enabled: Option<bool>,
}

impl From<UpdateUserRequest> for UserUpdate {
    fn from(value: UpdateUserRequest) -> Self {
        Self {
            username: value.username,
            first_name: value.first_name,
            last_name: value.last_name,
            enabled: value.enabled.unwrap_or(true),
        }
    }
}

/// Incoming payload for a password change.
#[derive(Default, Deserialize, TS)]
#[serde(default)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/update-password-request.ts"
)]
pub struct UpdatePasswordRequest {
    pub password: String,
}

/// Query parameters for user listing.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ListUsersQuery {
    pub enabled: Option<String>,
}

impl ListUsersQuery {
    /// Parses the enabled filter. Anything other than `true` or `false` means no filter.
    pub fn enabled_filter(&self) -> Option<bool> {
        match self.enabled.as_deref().map(str::trim) {
            Some(value) if value.eq_ignore_ascii_case("true") => Some(true),
            Some(value) if value.eq_ignore_ascii_case("false") => Some(false),
            _ => None,
        }
    }
}

/// API representation of a user. Never carries a password.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/user-response.ts"
)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub enabled: bool,
}

impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        Self {
            id: value.id,
            username: value.username,
            first_name: value.first_name,
            last_name: value.last_name,
            enabled: value.enabled,
        }
    }
}
