use std::sync::Arc;

use realmgate_application::{AuthService, IdentityProviderClient, RoleService, UserService};
use realmgate_core::AppError;
use realmgate_infrastructure::HttpIdentityProviderClient;

use crate::api_config::ApiConfig;
use crate::state::AppState;

/// Wires the identity provider adapter into every service family.
pub fn build_app_state(config: &ApiConfig) -> Result<AppState, AppError> {
    let identity_provider: Arc<dyn IdentityProviderClient> = Arc::new(
        HttpIdentityProviderClient::new(config.identity_provider.clone())?,
    );

    Ok(AppState {
        auth: Arc::new(AuthService::new(identity_provider.clone())),
        users: Arc::new(UserService::new(identity_provider.clone())),
        roles: Arc::new(RoleService::new(identity_provider)),
    })
}
