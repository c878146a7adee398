use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

use realmgate_core::AppError;
use realmgate_infrastructure::IdentityProviderConfig;
use tracing_subscriber::EnvFilter;

const DEFAULT_IDP_TIMEOUT_MS: u64 = 15_000;

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub api_host: String,
    pub api_port: u16,
    pub identity_provider: IdentityProviderConfig,
    pub cors_allowed_origin: Option<String>,
}

impl ApiConfig {
    pub fn load() -> Result<Self, AppError> {
        let api_host = env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_owned());
        let api_port = env::var("API_PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(8181);

        let base_url = optional_non_empty_env("IDP_BASE_URL").unwrap_or_else(|| {
            compose_base_url(
                env::var("IDP_PROTOCOL").unwrap_or_else(|_| "http".to_owned()).as_str(),
                env::var("IDP_HOST").unwrap_or_else(|_| "localhost".to_owned()).as_str(),
                env::var("IDP_PORT").unwrap_or_else(|_| "8080".to_owned()).as_str(),
            )
        });
        let request_timeout_ms = env::var("IDP_HTTP_TIMEOUT_MS")
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
            .unwrap_or(DEFAULT_IDP_TIMEOUT_MS);

        let identity_provider = IdentityProviderConfig::new(
            base_url.as_str(),
            required_non_empty_env("IDP_REALM")?,
            required_non_empty_env("IDP_CLIENT_ID")?,
            required_non_empty_env("IDP_CLIENT_SECRET")?,
        )?
        .with_request_timeout(Duration::from_millis(request_timeout_ms));

        Ok(Self {
            api_host,
            api_port,
            identity_provider,
            cors_allowed_origin: optional_non_empty_env("CORS_ALLOWED_ORIGIN"),
        })
    }

    pub fn socket_address(&self) -> Result<SocketAddr, AppError> {
        let host = IpAddr::from_str(&self.api_host).map_err(|error| {
            AppError::Internal(format!("invalid API_HOST '{}': {error}", self.api_host))
        })?;
        Ok(SocketAddr::from((host, self.api_port)))
    }
}

pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}

fn compose_base_url(protocol: &str, host: &str, port: &str) -> String {
    format!("{protocol}://{host}:{port}")
}

fn optional_non_empty_env(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn required_non_empty_env(name: &str) -> Result<String, AppError> {
    optional_non_empty_env(name)
        .ok_or_else(|| AppError::Internal(format!("{name} must be set and non-empty")))
}
