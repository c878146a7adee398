//! Infrastructure adapters for application ports.

#![forbid(unsafe_code)]

mod http_identity_provider_client;
mod identity_provider_config;

pub use http_identity_provider_client::HttpIdentityProviderClient;
pub use identity_provider_config::IdentityProviderConfig;
