use std::fmt::{Debug, Formatter};
use std::time::Duration;

use realmgate_core::{AppError, AppResult, NonEmptyString};
use url::Url;

const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Immutable connection settings for the identity provider.
#[derive(Clone)]
pub struct IdentityProviderConfig {
    base_url: Url,
    realm: NonEmptyString,
    client_id: NonEmptyString,
    client_secret: NonEmptyString,
    request_timeout: Duration,
}

impl IdentityProviderConfig {
    /// Creates a configuration with the default request timeout.
    pub fn new(
        base_url: &str,
        realm: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> AppResult<Self> {
        let base_url = Url::parse(base_url).map_err(|error| {
            AppError::Internal(format!("invalid identity provider base url '{base_url}': {error}"))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(AppError::Internal(format!(
                "identity provider base url '{base_url}' cannot carry a path"
            )));
        }

        Ok(Self {
            base_url,
            realm: required_setting("IDP_REALM", realm)?,
            client_id: required_setting("IDP_CLIENT_ID", client_id)?,
            client_secret: required_setting("IDP_CLIENT_SECRET", client_secret)?,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        })
    }

    /// Overrides the per-request timeout.
    #[must_use]
    pub fn with_request_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = request_timeout;
        self
    }

    /// Returns the identity provider base URL.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns the realm name.
    #[must_use]
    pub fn realm(&self) -> &str {
        self.realm.as_str()
    }

    /// Returns the confidential client identifier.
    #[must_use]
    pub fn client_id(&self) -> &str {
        self.client_id.as_str()
    }

    /// Returns the confidential client secret.
    #[must_use]
    pub fn client_secret(&self) -> &str {
        self.client_secret.as_str()
    }

    /// Returns the per-request timeout.
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }
}

impl Debug for IdentityProviderConfig {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("IdentityProviderConfig")
            .field("base_url", &self.base_url.as_str())
            .field("realm", &self.realm.as_str())
            .field("client_id", &self.client_id.as_str())
            .field("client_secret", &"<redacted>")
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

fn required_setting(name: &str, value: impl Into<String>) -> AppResult<NonEmptyString> {
    NonEmptyString::new(value).map_err(|_| AppError::Internal(format!("{name} must be set")))
}
