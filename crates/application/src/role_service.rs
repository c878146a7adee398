//! Realm role administration and user-role mappings.

use std::sync::Arc;

use async_trait::async_trait;

use realmgate_core::{AppResult, BearerToken, NonEmptyString};
use realmgate_domain::{Role, RoleInput, RolePatch};

use crate::{IdentityProviderClient, RoleRepresentation};

mod mappings;

/// Inbound capability for role administration.
#[async_trait]
pub trait RolesPort: Send + Sync {
    /// Lists realm roles.
    async fn list_roles(&self, bearer: &BearerToken) -> AppResult<Vec<Role>>;

    /// Fetches one role by name.
    async fn get_role(&self, bearer: &BearerToken, role_name: &str) -> AppResult<Role>;

    /// Creates a role.
    async fn create_role(&self, bearer: &BearerToken, input: RoleInput) -> AppResult<()>;

    /// Replaces a role.
    async fn update_role(
        &self,
        bearer: &BearerToken,
        role_name: &str,
        input: RoleInput,
    ) -> AppResult<()>;

    /// Merges a partial update onto the current role.
    async fn patch_role(
        &self,
        bearer: &BearerToken,
        role_name: &str,
        patch: RolePatch,
    ) -> AppResult<()>;

    /// Deletes a role.
    async fn delete_role(&self, bearer: &BearerToken, role_name: &str) -> AppResult<()>;

    /// Maps a role to a user.
    async fn assign_role_to_user(
        &self,
        bearer: &BearerToken,
        user_id: &str,
        role_name: &str,
    ) -> AppResult<()>;

    /// Unmaps a role from a user.
    async fn remove_role_from_user(
        &self,
        bearer: &BearerToken,
        user_id: &str,
        role_name: &str,
    ) -> AppResult<()>;

    /// Lists roles mapped to a user.
    async fn list_user_roles(&self, bearer: &BearerToken, user_id: &str) -> AppResult<Vec<Role>>;
}

/// Application service for role administration.
#[derive(Clone)]
pub struct RoleService {
    identity_provider: Arc<dyn IdentityProviderClient>,
}

impl RoleService {
    /// Creates a new role service.
    #[must_use]
    pub fn new(identity_provider: Arc<dyn IdentityProviderClient>) -> Self {
        Self { identity_provider }
    }

    async fn read_modify_write(
        &self,
        bearer: &BearerToken,
        role_name: &str,
        patch: &RolePatch,
    ) -> AppResult<()> {
        let current = self.identity_provider.get_role(bearer, role_name).await?;
        let merged = patch.apply(Role::from(current));

        self.identity_provider
            .update_role(bearer, role_name, &RoleRepresentation::from(merged))
            .await
    }
}

#[async_trait]
impl RolesPort for RoleService {
    async fn list_roles(&self, bearer: &BearerToken) -> AppResult<Vec<Role>> {
        let roles = self.identity_provider.list_roles(bearer).await?;
        Ok(roles.into_iter().map(Role::from).collect())
    }

    async fn get_role(&self, bearer: &BearerToken, role_name: &str) -> AppResult<Role> {
        let role_name = NonEmptyString::required("role name", role_name)?;
        self.identity_provider
            .get_role(bearer, role_name.as_str())
            .await
            .map(Role::from)
    }

    async fn create_role(&self, bearer: &BearerToken, input: RoleInput) -> AppResult<()> {
        input.validate()?;
        self.identity_provider
            .create_role(bearer, &RoleRepresentation::from(input))
            .await
    }

    async fn update_role(
        &self,
        bearer: &BearerToken,
        role_name: &str,
        input: RoleInput,
    ) -> AppResult<()> {
        let role_name = NonEmptyString::required("role name", role_name)?;
        input.validate()?;

        self.identity_provider
            .update_role(bearer, role_name.as_str(), &RoleRepresentation::from(input))
            .await
    }

    async fn patch_role(
        &self,
        bearer: &BearerToken,
        role_name: &str,
        patch: RolePatch,
    ) -> AppResult<()> {
        let role_name = NonEmptyString::required("role name", role_name)?;
        self.read_modify_write(bearer, role_name.as_str(), &patch)
            .await
    }

    async fn delete_role(&self, bearer: &BearerToken, role_name: &str) -> AppResult<()> {
        let role_name = NonEmptyString::required("role name", role_name)?;
        self.identity_provider
            .delete_role(bearer, role_name.as_str())
            .await
    }

    async fn assign_role_to_user(
        &self,
        bearer: &BearerToken,
        user_id: &str,
        role_name: &str,
    ) -> AppResult<()> {
        self.assign(bearer, user_id, role_name).await
    }

    async fn remove_role_from_user(
        &self,
        bearer: &BearerToken,
        user_id: &str,
        role_name: &str,
    ) -> AppResult<()> {
        self.unassign(bearer, user_id, role_name).await
    }

    async fn list_user_roles(&self, bearer: &BearerToken, user_id: &str) -> AppResult<Vec<Role>> {
        self.mapped_roles(bearer, user_id).await
    }
}
