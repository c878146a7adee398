use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use realmgate_core::{AppError, AppResult, BearerToken};

use crate::{IdentityProviderClient, RoleRepresentation, TokenGrant, UserRepresentation};

/// In-memory identity provider that records every call by name.
#[derive(Default)]
pub(crate) struct FakeIdentityProvider {
    pub(crate) users: Mutex<Vec<UserRepresentation>>,
    pub(crate) passwords: Mutex<HashMap<String, String>>,
    pub(crate) roles: Mutex<Vec<RoleRepresentation>>,
    pub(crate) mappings: Mutex<HashMap<String, Vec<RoleRepresentation>>>,
    pub(crate) calls: Mutex<Vec<String>>,
    pub(crate) updated_users: Mutex<Vec<UserRepresentation>>,
    pub(crate) updated_roles: Mutex<Vec<RoleRepresentation>>,
    pub(crate) fail_reads_with: Mutex<Option<u16>>,
}

impl FakeIdentityProvider {
    pub(crate) async fn calls(&self) -> Vec<String> {
        self.calls.lock().await.clone()
    }

    pub(crate) async fn seed_role(&self, name: &str, description: &str, composite: bool) {
        let mut roles = self.roles.lock().await;
        let id = format!("role-{}", roles.len() + 1);
        roles.push(RoleRepresentation {
            id: Some(id),
            name: name.to_owned(),
            description: Some(description.to_owned()),
            composite,
        });
    }

    async fn record(&self, call: &str) -> AppResult<()> {
        self.calls.lock().await.push(call.to_owned());
        Ok(())
    }

    async fn read_failure(&self) -> AppResult<()> {
        match *self.fail_reads_with.lock().await {
            Some(status) => Err(AppError::Upstream {
                status,
                body: "denied".to_owned(),
            }),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl IdentityProviderClient for FakeIdentityProvider {
    async fn password_login(&self, username: &str, password: &str) -> AppResult<TokenGrant> {
        self.record("password_login").await?;
        let users = self.users.lock().await;
        let passwords = self.passwords.lock().await;
        let valid = users.iter().any(|user| {
            user.username == username
                && user.enabled
                && user
                    .id
                    .as_ref()
                    .and_then(|id| passwords.get(id))
                    .is_some_and(|stored| stored == password)
        });
        if !valid {
            return Err(AppError::Unauthorized(
                r#"{"error":"invalid_grant"}"#.to_owned(),
            ));
        }

        Ok(TokenGrant {
            token_type: "Bearer".to_owned(),
            access_token: format!("token-for-{username}"),
            expires_in: 300,
            refresh_token: "refresh".to_owned(),
            refresh_expires_in: 1800,
        })
    }

    async fn create_user(
        &self,
        _bearer: &BearerToken,
        record: &UserRepresentation,
        password: &str,
    ) -> AppResult<String> {
        self.record("create_user").await?;
        let mut users = self.users.lock().await;
        if users.iter().any(|user| user.username == record.username) {
            return Err(AppError::Conflict("username already exists".to_owned()));
        }

        let id = format!("user-{}", users.len() + 1);
        let mut stored = record.clone();
        stored.id = Some(id.clone());
        users.push(stored);
        self.passwords
            .lock()
            .await
            .insert(id.clone(), password.to_owned());
        Ok(id)
    }

    async fn list_users(
        &self,
        _bearer: &BearerToken,
        enabled: Option<bool>,
    ) -> AppResult<Vec<UserRepresentation>> {
        self.record("list_users").await?;
        self.read_failure().await?;
        Ok(self
            .users
            .lock()
            .await
            .iter()
            .filter(|user| enabled.is_none_or(|enabled| user.enabled == enabled))
            .cloned()
            .collect())
    }

    async fn get_user(
        &self,
        _bearer: &BearerToken,
        user_id: &str,
    ) -> AppResult<UserRepresentation> {
        self.record("get_user").await?;
        self.read_failure().await?;
        self.users
            .lock()
            .await
            .iter()
            .find(|user| user.id.as_deref() == Some(user_id))
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("user '{user_id}' not found")))
    }

    async fn update_user(
        &self,
        _bearer: &BearerToken,
        user_id: &str,
        record: &UserRepresentation,
    ) -> AppResult<()> {
        self.record("update_user").await?;
        let mut users = self.users.lock().await;
        let Some(existing) = users
            .iter_mut()
            .find(|user| user.id.as_deref() == Some(user_id))
        else {
            return Err(AppError::NotFound(format!("user '{user_id}' not found")));
        };

        *existing = UserRepresentation {
            id: Some(user_id.to_owned()),
            ..record.clone()
        };
        self.updated_users.lock().await.push(record.clone());
        Ok(())
    }

    async fn update_password(
        &self,
        _bearer: &BearerToken,
        user_id: &str,
        password: &str,
    ) -> AppResult<()> {
        self.record("update_password").await?;
        if !self
            .users
            .lock()
            .await
            .iter()
            .any(|user| user.id.as_deref() == Some(user_id))
        {
            return Err(AppError::NotFound(format!("user '{user_id}' not found")));
        }

        self.passwords
            .lock()
            .await
            .insert(user_id.to_owned(), password.to_owned());
        Ok(())
    }

    async fn list_roles(&self, _bearer: &BearerToken) -> AppResult<Vec<RoleRepresentation>> {
        self.record("list_roles").await?;
        self.read_failure().await?;
        Ok(self.roles.lock().await.clone())
    }

    async fn get_role(
        &self,
        _bearer: &BearerToken,
        role_name: &str,
    ) -> AppResult<RoleRepresentation> {
        self.record("get_role").await?;
        self.read_failure().await?;
        self.roles
            .lock()
            .await
            .iter()
            .find(|role| role.name == role_name)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("role '{role_name}' not found")))
    }

    async fn create_role(
        &self,
        _bearer: &BearerToken,
        record: &RoleRepresentation,
    ) -> AppResult<()> {
        self.record("create_role").await?;
        let mut roles = self.roles.lock().await;
        if roles.iter().any(|role| role.name == record.name) {
            return Err(AppError::Conflict("role already exists".to_owned()));
        }

        let mut stored = record.clone();
        stored.id = Some(format!("role-{}", roles.len() + 1));
        roles.push(stored);
        Ok(())
    }

    async fn update_role(
        &self,
        _bearer: &BearerToken,
        role_name: &str,
        record: &RoleRepresentation,
    ) -> AppResult<()> {
        self.record("update_role").await?;
        let mut roles = self.roles.lock().await;
        let Some(existing) = roles.iter_mut().find(|role| role.name == role_name) else {
            return Err(AppError::NotFound(format!("role '{role_name}' not found")));
        };

        let id = existing.id.clone();
        *existing = RoleRepresentation {
            id,
            ..record.clone()
        };
        self.updated_roles.lock().await.push(record.clone());
        Ok(())
    }

    async fn delete_role(&self, _bearer: &BearerToken, role_name: &str) -> AppResult<()> {
        self.record("delete_role").await?;
        let mut roles = self.roles.lock().await;
        let before = roles.len();
        roles.retain(|role| role.name != role_name);
        if roles.len() == before {
            return Err(AppError::NotFound(format!("role '{role_name}' not found")));
        }

        Ok(())
    }

    async fn add_user_role_mappings(
        &self,
        _bearer: &BearerToken,
        user_id: &str,
        roles: &[RoleRepresentation],
    ) -> AppResult<()> {
        self.record("add_user_role_mappings").await?;
        let mut mappings = self.mappings.lock().await;
        let mapped = mappings.entry(user_id.to_owned()).or_default();
        for role in roles {
            if !mapped.iter().any(|existing| existing.name == role.name) {
                mapped.push(role.clone());
            }
        }
        Ok(())
    }

    async fn remove_user_role_mappings(
        &self,
        _bearer: &BearerToken,
        user_id: &str,
        roles: &[RoleRepresentation],
    ) -> AppResult<()> {
        self.record("remove_user_role_mappings").await?;
        if let Some(mapped) = self.mappings.lock().await.get_mut(user_id) {
            mapped.retain(|existing| !roles.iter().any(|role| role.name == existing.name));
        }
        Ok(())
    }

    async fn list_user_roles(
        &self,
        _bearer: &BearerToken,
        user_id: &str,
    ) -> AppResult<Vec<RoleRepresentation>> {
        self.record("list_user_roles").await?;
        self.read_failure().await?;
        Ok(self
            .mappings
            .lock()
            .await
            .get(user_id)
            .cloned()
            .unwrap_or_default())
    }
}

pub(crate) fn bearer() -> BearerToken {
    BearerToken::new("admin-token").unwrap_or_else(|_| panic!("test bearer token"))
}
