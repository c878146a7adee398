//! Application services and ports.

#![forbid(unsafe_code)]

mod auth_service;
mod identity_provider_ports;
mod role_service;
mod user_service;

#[cfg(test)]
mod fake_identity_provider;

pub use auth_service::{AuthPort, AuthService};
pub use identity_provider_ports::{
    IdentityProviderClient, RoleRepresentation, TokenGrant, UserRepresentation,
};
pub use role_service::{RoleService, RolesPort};
pub use user_service::{UserService, UsersPort};
