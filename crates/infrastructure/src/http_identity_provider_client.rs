use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, LOCATION};
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use tracing::{debug, warn};
use url::Url;
use url::form_urlencoded;

use realmgate_application::{
    IdentityProviderClient, RoleRepresentation, TokenGrant, UserRepresentation,
};
use realmgate_core::{AppError, AppResult, BearerToken};

use crate::IdentityProviderConfig;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// reqwest-based adapter for the identity provider's token and admin endpoints.
#[derive(Clone)]
pub struct HttpIdentityProviderClient {
    http_client: reqwest::Client,
    config: IdentityProviderConfig,
}

impl HttpIdentityProviderClient {
    /// Creates a client with its own connection pool and the configured timeout.
    pub fn new(config: IdentityProviderConfig) -> AppResult<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|error| {
                AppError::Internal(format!("failed to build identity provider client: {error}"))
            })?;

        Ok(Self::with_http_client(http_client, config))
    }

    /// Creates a client around an existing connection pool.
    #[must_use]
    pub fn with_http_client(http_client: reqwest::Client, config: IdentityProviderConfig) -> Self {
        Self {
            http_client,
            config,
        }
    }

    fn url(&self, segments: &[&str]) -> AppResult<Url> {
        let mut url = self.config.base_url().clone();
        url.path_segments_mut()
            .map_err(|()| {
                AppError::Internal("identity provider base url cannot carry a path".to_owned())
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn token_url(&self) -> AppResult<Url> {
        self.url(&[
            "realms",
            self.config.realm(),
            "protocol",
            "openid-connect",
            "token",
        ])
    }

    fn users_url(&self, tail: &[&str]) -> AppResult<Url> {
        self.admin_url("users", tail)
    }

    fn roles_url(&self, tail: &[&str]) -> AppResult<Url> {
        self.admin_url("roles", tail)
    }

    fn admin_url(&self, collection: &str, tail: &[&str]) -> AppResult<Url> {
        let mut segments = vec!["admin", "realms", self.config.realm(), collection];
        segments.extend_from_slice(tail);
        self.url(&segments)
    }

    fn admin_request(&self, method: Method, url: Url, bearer: &BearerToken) -> RequestBuilder {
        debug!(method = %method, path = url.path(), "identity provider request");
        self.http_client
            .request(method, url)
            .header(AUTHORIZATION, bearer.authorization_value())
    }

    async fn set_password(
        &self,
        bearer: &BearerToken,
        user_id: &str,
        password: &str,
    ) -> AppResult<()> {
        let url = self.users_url(&[user_id, "reset-password"])?;
        let response = send(self.admin_request(Method::PUT, url, bearer).json(
            &serde_json::json!({
                "type": "password",
                "value": password,
                "temporary": false,
            }),
        ))
        .await?;

        classify(response, "user", None).await.map(drop)
    }
}

#[async_trait]
impl IdentityProviderClient for HttpIdentityProviderClient {
    async fn password_login(&self, username: &str, password: &str) -> AppResult<TokenGrant> {
        let body = form_urlencoded::Serializer::new(String::new())
            .append_pair("client_id", self.config.client_id())
            .append_pair("client_secret", self.config.client_secret())
            .append_pair("grant_type", "password")
            .append_pair("username", username)
            .append_pair("password", password)
            .finish();

        let response = send(
            self.http_client
                .post(self.token_url()?)
                .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
                .body(body),
        )
        .await?;

        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            let body = response_text(response).await;
            debug!(status = status.as_u16(), "password grant rejected");
            return Err(AppError::Unauthorized(format!(
                "invalid user credentials: {body}"
            )));
        }

        decode(response).await
    }

    async fn create_user(
        &self,
        bearer: &BearerToken,
        record: &UserRepresentation,
        password: &str,
    ) -> AppResult<String> {
        let url = self.users_url(&[])?;
        let response = send(self.admin_request(Method::POST, url, bearer).json(record)).await?;
        let response = classify(response, "user", Some("username already exists")).await?;
        let user_id = created_id(&response)?;

        if let Err(error) = self.set_password(bearer, user_id.as_str(), password).await {
            warn!(
                user_id = %user_id,
                error = %error,
                "user created but initial password could not be set"
            );
            return Err(error);
        }

        Ok(user_id)
    }

    async fn list_users(
        &self,
        bearer: &BearerToken,
        enabled: Option<bool>,
    ) -> AppResult<Vec<UserRepresentation>> {
        let mut url = self.users_url(&[])?;
        if let Some(enabled) = enabled {
            url.query_pairs_mut()
                .append_pair("enabled", if enabled { "true" } else { "false" });
        }

        let response = send(self.admin_request(Method::GET, url, bearer)).await?;
        decode(classify(response, "user", None).await?).await
    }

    async fn get_user(
        &self,
        bearer: &BearerToken,
        user_id: &str,
    ) -> AppResult<UserRepresentation> {
        let url = self.users_url(&[user_id])?;
        let response = send(self.admin_request(Method::GET, url, bearer)).await?;
        decode(classify(response, "user", None).await?).await
    }

    async fn update_user(
        &self,
        bearer: &BearerToken,
        user_id: &str,
        record: &UserRepresentation,
    ) -> AppResult<()> {
        let url = self.users_url(&[user_id])?;
        let response = send(self.admin_request(Method::PUT, url, bearer).json(record)).await?;
        classify(response, "user", None).await.map(drop)
    }

    async fn update_password(
        &self,
        bearer: &BearerToken,
        user_id: &str,
        password: &str,
    ) -> AppResult<()> {
        self.set_password(bearer, user_id, password).await
    }

    async fn list_roles(&self, bearer: &BearerToken) -> AppResult<Vec<RoleRepresentation>> {
        let url = self.roles_url(&[])?;
        let response = send(self.admin_request(Method::GET, url, bearer)).await?;
        decode(classify(response, "role", None).await?).await
    }

    async fn get_role(
        &self,
        bearer: &BearerToken,
        role_name: &str,
    ) -> AppResult<RoleRepresentation> {
        let url = self.roles_url(&[role_name])?;
        let response = send(self.admin_request(Method::GET, url, bearer)).await?;
        decode(classify(response, "role", None).await?).await
    }

    async fn create_role(
        &self,
        bearer: &BearerToken,
        record: &RoleRepresentation,
    ) -> AppResult<()> {
        let url = self.roles_url(&[])?;
        let response = send(self.admin_request(Method::POST, url, bearer).json(record)).await?;
        classify(response, "role", Some("role already exists"))
            .await
            .map(drop)
    }

    async fn update_role(
        &self,
        bearer: &BearerToken,
        role_name: &str,
        record: &RoleRepresentation,
    ) -> AppResult<()> {
        let url = self.roles_url(&[role_name])?;
        let response = send(self.admin_request(Method::PUT, url, bearer).json(record)).await?;
        classify(response, "role", None).await.map(drop)
    }

    async fn delete_role(&self, bearer: &BearerToken, role_name: &str) -> AppResult<()> {
        let url = self.roles_url(&[role_name])?;
        let response = send(self.admin_request(Method::DELETE, url, bearer)).await?;
        classify(response, "role", None).await.map(drop)
    }

    async fn add_user_role_mappings(
        &self,
        bearer: &BearerToken,
        user_id: &str,
        roles: &[RoleRepresentation],
    ) -> AppResult<()> {
        let url = self.users_url(&[user_id, "role-mappings", "realm"])?;
        let response = send(self.admin_request(Method::POST, url, bearer).json(roles)).await?;
        classify(response, "user", None).await.map(drop)
    }

    async fn remove_user_role_mappings(
        &self,
        bearer: &BearerToken,
        user_id: &str,
        roles: &[RoleRepresentation],
    ) -> AppResult<()> {
        let url = self.users_url(&[user_id, "role-mappings", "realm"])?;
        let response = send(self.admin_request(Method::DELETE, url, bearer).json(roles)).await?;
        classify(response, "user", None).await.map(drop)
    }

    async fn list_user_roles(
        &self,
        bearer: &BearerToken,
        user_id: &str,
    ) -> AppResult<Vec<RoleRepresentation>> {
        let url = self.users_url(&[user_id, "role-mappings", "realm"])?;
        let response = send(self.admin_request(Method::GET, url, bearer)).await?;
        decode(classify(response, "user", None).await?).await
    }
}

async fn send(request: RequestBuilder) -> AppResult<Response> {
    request.send().await.map_err(|error| {
        AppError::Transport(format!("identity provider request failed: {error}"))
    })
}

/// Maps a non-success status to its error kind. `conflict` is set only for creations.
async fn classify(
    response: Response,
    resource: &str,
    conflict: Option<&str>,
) -> AppResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    match (status, conflict) {
        (StatusCode::NOT_FOUND, _) => Err(AppError::NotFound(format!("{resource} not found"))),
        (StatusCode::CONFLICT, Some(message)) => Err(AppError::Conflict(message.to_owned())),
        _ => Err(AppError::Upstream {
            status: status.as_u16(),
            body: response_text(response).await,
        }),
    }
}

async fn decode<T>(response: Response) -> AppResult<T>
where
    T: serde::de::DeserializeOwned,
{
    response.json::<T>().await.map_err(|error| {
        AppError::Transport(format!("identity provider returned an unreadable body: {error}"))
    })
}

async fn response_text(response: Response) -> String {
    response
        .text()
        .await
        .unwrap_or_else(|_| "<response body unavailable>".to_owned())
}

fn created_id(response: &Response) -> AppResult<String> {
    response
        .headers()
        .get(LOCATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|location| location.trim_end_matches('/').rsplit('/').next())
        .filter(|segment| !segment.is_empty())
        .map(str::to_owned)
        .ok_or_else(|| AppError::Upstream {
            status: response.status().as_u16(),
            body: "created user response carried no Location header".to_owned(),
        })
}
