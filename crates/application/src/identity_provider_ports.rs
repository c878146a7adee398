//! Outbound port to the identity provider's administrative API.
//!
//! Wire representations mirror the identity provider's JSON (camelCase) and
//! stay at this boundary. Services convert them to domain types.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use realmgate_core::{AppResult, BearerToken};
use realmgate_domain::{NewUser, Role, RoleInput, TokenResponse, User, UserUpdate};

/// User record as exchanged with the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRepresentation {
    /// Identifier, absent on creation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Login name.
    pub username: String,
    /// Given name.
    #[serde(default)]
    pub first_name: String,
    /// Family name.
    #[serde(default)]
    pub last_name: String,
    /// Enabled flag.
    #[serde(default)]
    pub enabled: bool,
    /// Email address. The facade mirrors the username here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl UserRepresentation {
    /// Builds the creation record. The password travels separately.
    #[must_use]
    pub fn for_new_user(user: &NewUser) -> Self {
        Self {
            id: None,
            username: user.username.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            enabled: user.enabled,
            email: Some(user.username.clone()),
        }
    }

    /// Builds the full-replace record for an existing user.
    #[must_use]
    pub fn for_update(user_id: &str, update: &UserUpdate) -> Self {
        Self {
            id: Some(user_id.to_owned()),
            username: update.username.clone(),
            first_name: update.first_name.clone(),
            last_name: update.last_name.clone(),
            enabled: update.enabled,
            email: Some(update.username.clone()),
        }
    }
}

impl From<UserRepresentation> for User {
    fn from(value: UserRepresentation) -> Self {
        Self {
            id: value.id.unwrap_or_default(),
            username: value.username,
            first_name: value.first_name,
            last_name: value.last_name,
            enabled: value.enabled,
        }
    }
}

/// Realm role as exchanged with the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleRepresentation {
    /// Identifier, absent on creation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Unique role name.
    pub name: String,
    /// Optional description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Composite flag.
    #[serde(default)]
    pub composite: bool,
}

impl From<RoleInput> for RoleRepresentation {
    fn from(value: RoleInput) -> Self {
        Self {
            id: None,
            name: value.name,
            description: Some(value.description),
            composite: value.composite,
        }
    }
}

impl From<Role> for RoleRepresentation {
    fn from(value: Role) -> Self {
        Self {
            id: Some(value.id).filter(|id| !id.is_empty()),
            name: value.name,
            description: Some(value.description),
            composite: value.composite,
        }
    }
}

impl From<RoleRepresentation> for Role {
    fn from(value: RoleRepresentation) -> Self {
        Self {
            id: value.id.unwrap_or_default(),
            name: value.name,
            description: value.description.unwrap_or_default(),
            composite: value.composite,
        }
    }
}

/// Token endpoint response for the password grant.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TokenGrant {
    /// Token scheme.
    pub token_type: String,
    /// Access token.
    pub access_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    /// Refresh token, empty when the grant omits it.
    #[serde(default)]
    pub refresh_token: String,
    /// Refresh token lifetime in seconds.
    #[serde(default)]
    pub refresh_expires_in: i64,
}

impl From<TokenGrant> for TokenResponse {
    fn from(value: TokenGrant) -> Self {
        Self {
            token_type: value.token_type,
            access_token: value.access_token,
            expires_in: value.expires_in,
            refresh_token: value.refresh_token,
            refresh_expires_in: value.refresh_expires_in,
        }
    }
}

/// Port for every call the facade makes to the identity provider.
///
/// Implementations classify upstream failures into `AppError` variants once;
/// callers never re-inspect status codes.
#[async_trait]
pub trait IdentityProviderClient: Send + Sync {
    /// Exchanges resource-owner credentials for tokens.
    async fn password_login(&self, username: &str, password: &str) -> AppResult<TokenGrant>;

    /// Creates a user, then sets its initial non-temporary password.
    ///
    /// Returns the identifier assigned upstream. A failed password step fails
    /// the whole call and leaves the created user in place.
    async fn create_user(
        &self,
        bearer: &BearerToken,
        record: &UserRepresentation,
        password: &str,
    ) -> AppResult<String>;

    /// Lists users, optionally filtered by enabled flag.
    async fn list_users(
        &self,
        bearer: &BearerToken,
        enabled: Option<bool>,
    ) -> AppResult<Vec<UserRepresentation>>;

    /// Fetches one user by identifier.
    async fn get_user(&self, bearer: &BearerToken, user_id: &str)
    -> AppResult<UserRepresentation>;

    /// Replaces a user record.
    async fn update_user(
        &self,
        bearer: &BearerToken,
        user_id: &str,
        record: &UserRepresentation,
    ) -> AppResult<()>;

    /// Resets a user's password as a non-temporary credential.
    async fn update_password(
        &self,
        bearer: &BearerToken,
        user_id: &str,
        password: &str,
    ) -> AppResult<()>;

    /// Writes the given record back with `enabled = false`.
    ///
    /// Users are never deleted upstream.
    async fn disable_user(
        &self,
        bearer: &BearerToken,
        user_id: &str,
        mut record: UserRepresentation,
    ) -> AppResult<()> {
        record.enabled = false;
        self.update_user(bearer, user_id, &record).await
    }

    /// Lists realm roles.
    async fn list_roles(&self, bearer: &BearerToken) -> AppResult<Vec<RoleRepresentation>>;

    /// Fetches one realm role by name.
    async fn get_role(&self, bearer: &BearerToken, role_name: &str)
    -> AppResult<RoleRepresentation>;

    /// Creates a realm role.
    async fn create_role(&self, bearer: &BearerToken, record: &RoleRepresentation)
    -> AppResult<()>;

    /// Replaces a realm role.
    async fn update_role(
        &self,
        bearer: &BearerToken,
        role_name: &str,
        record: &RoleRepresentation,
    ) -> AppResult<()>;

    /// Deletes a realm role.
    async fn delete_role(&self, bearer: &BearerToken, role_name: &str) -> AppResult<()>;

    /// Adds realm role mappings to a user.
    async fn add_user_role_mappings(
        &self,
        bearer: &BearerToken,
        user_id: &str,
        roles: &[RoleRepresentation],
    ) -> AppResult<()>;

    /// Removes realm role mappings from a user.
    async fn remove_user_role_mappings(
        &self,
        bearer: &BearerToken,
        user_id: &str,
        roles: &[RoleRepresentation],
    ) -> AppResult<()>;

    /// Lists realm roles mapped to a user.
    async fn list_user_roles(
        &self,
        bearer: &BearerToken,
        user_id: &str,
    ) -> AppResult<Vec<RoleRepresentation>>;

    /// Resolves the role by name, then maps it to the user.
    ///
    /// A failed lookup is returned as is and no mapping call is made.
    async fn assign_role_to_user(
        &self,
        bearer: &BearerToken,
        user_id: &str,
        role_name: &str,
    ) -> AppResult<()> {
        let role = self.get_role(bearer, role_name).await?;
        self.add_user_role_mappings(bearer, user_id, std::slice::from_ref(&role))
            .await
    }

    /// Resolves the role by name, then unmaps it from the user.
    async fn remove_role_from_user(
        &self,
        bearer: &BearerToken,
        user_id: &str,
        role_name: &str,
    ) -> AppResult<()> {
        let role = self.get_role(bearer, role_name).await?;
        self.remove_user_role_mappings(bearer, user_id, std::slice::from_ref(&role))
            .await
    }
}
