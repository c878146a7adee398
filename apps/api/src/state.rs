use std::sync::Arc;

use realmgate_application::{AuthPort, RolesPort, UsersPort};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<dyn AuthPort>,
    pub users: Arc<dyn UsersPort>,
    pub roles: Arc<dyn RolesPort>,
}
