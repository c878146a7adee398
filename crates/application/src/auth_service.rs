//! Password login against the identity provider.

use std::sync::Arc;

use async_trait::async_trait;

use realmgate_core::AppResult;
use realmgate_domain::{Credentials, TokenResponse};

use crate::IdentityProviderClient;

/// Inbound capability for interactive login.
#[async_trait]
pub trait AuthPort: Send + Sync {
    /// Exchanges credentials for identity provider tokens.
    async fn login(&self, credentials: Credentials) -> AppResult<TokenResponse>;
}

/// Login pass-through to the identity provider's password grant.
#[derive(Clone)]
pub struct AuthService {
    identity_provider: Arc<dyn IdentityProviderClient>,
}

impl AuthService {
    /// Creates a new auth service.
    #[must_use]
    pub fn new(identity_provider: Arc<dyn IdentityProviderClient>) -> Self {
        Self { identity_provider }
    }
}

#[async_trait]
impl AuthPort for AuthService {
    async fn login(&self, credentials: Credentials) -> AppResult<TokenResponse> {
        self.identity_provider
            .password_login(credentials.username(), credentials.password())
            .await
            .map(TokenResponse::from)
    }
}
