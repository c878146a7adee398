//! User administration service.
//!
//! Users are never deleted. `disable_user` reads the current record and
//! writes it back with the enabled flag cleared.

use std::sync::Arc;

use async_trait::async_trait;

use realmgate_core::{AppResult, BearerToken, NonEmptyString};
use realmgate_domain::{NewUser, User, UserUpdate};

use crate::{IdentityProviderClient, UserRepresentation};

/// Inbound capability for user administration.
#[async_trait]
pub trait UsersPort: Send + Sync {
    /// Creates a user with an initial password and returns it without the password.
    async fn create_user(&self, bearer: &BearerToken, user: NewUser) -> AppResult<User>;

    /// Lists users, optionally filtered by enabled flag.
    async fn list_users(&self, bearer: &BearerToken, enabled: Option<bool>)
    -> AppResult<Vec<User>>;

    /// Fetches one user.
    async fn get_user(&self, bearer: &BearerToken, user_id: &str) -> AppResult<User>;

    /// Replaces a user's profile fields.
    async fn update_user(
        &self,
        bearer: &BearerToken,
        user_id: &str,
        update: UserUpdate,
    ) -> AppResult<()>;

    /// Sets a new non-temporary password.
    async fn update_password(
        &self,
        bearer: &BearerToken,
        user_id: &str,
        password: &str,
    ) -> AppResult<()>;

    /// Logically deletes a user by disabling it.
    async fn disable_user(&self, bearer: &BearerToken, user_id: &str) -> AppResult<()>;
}

/// Application service for user lifecycle operations.
#[derive(Clone)]
pub struct UserService {
    identity_provider: Arc<dyn IdentityProviderClient>,
}

impl UserService {
    /// Creates a new user service.
    #[must_use]
    pub fn new(identity_provider: Arc<dyn IdentityProviderClient>) -> Self {
        Self { identity_provider }
    }
}

#[async_trait]
impl UsersPort for UserService {
    async fn create_user(&self, bearer: &BearerToken, user: NewUser) -> AppResult<User> {
        user.validate()?;

        let record = UserRepresentation::for_new_user(&user);
        let user_id = self
            .identity_provider
            .create_user(bearer, &record, user.password.as_str())
            .await?;

        Ok(user.into_user(user_id))
    }

    async fn list_users(
        &self,
        bearer: &BearerToken,
        enabled: Option<bool>,
    ) -> AppResult<Vec<User>> {
        let users = self.identity_provider.list_users(bearer, enabled).await?;
        Ok(users.into_iter().map(User::from).collect())
    }

    async fn get_user(&self, bearer: &BearerToken, user_id: &str) -> AppResult<User> {
        let user_id = NonEmptyString::required("user id", user_id)?;
        self.identity_provider
            .get_user(bearer, user_id.as_str())
            .await
            .map(User::from)
    }

    async fn update_user(
        &self,
        bearer: &BearerToken,
        user_id: &str,
        update: UserUpdate,
    ) -> AppResult<()> {
        let user_id = NonEmptyString::required("user id", user_id)?;
        update.validate()?;

        let record = UserRepresentation::for_update(user_id.as_str(), &update);
        self.identity_provider
            .update_user(bearer, user_id.as_str(), &record)
            .await
    }

    async fn update_password(
        &self,
        bearer: &BearerToken,
        user_id: &str,
        password: &str,
    ) -> AppResult<()> {
        let user_id = NonEmptyString::required("user id", user_id)?;
        let password = NonEmptyString::required("password", password)?;

        self.identity_provider
            .update_password(bearer, user_id.as_str(), password.as_str())
            .await
    }

    async fn disable_user(&self, bearer: &BearerToken, user_id: &str) -> AppResult<()> {
        let user_id = NonEmptyString::required("user id", user_id)?;

        let current = self
            .identity_provider
            .get_user(bearer, user_id.as_str())
            .await?;
        self.identity_provider
            .disable_user(bearer, user_id.as_str(), current)
            .await
    }
}

#[cfg(test)]
mod tests;
