use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use realmgate_domain::Credentials;
use tracing::info;

use crate::dto::{LoginRequest, LoginResponse};
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

pub async fn login_handler(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<LoginResponse>)> {
    let Json(payload) = payload?;
    let credentials = Credentials::new(payload.username, payload.password)?;
    let username = credentials.username().to_owned();

    let tokens = state
        .auth
        .login(credentials)
        .await
        .map_err(ApiError::from_identity_provider)?;

    info!(username = %username, "login succeeded");
    Ok((StatusCode::CREATED, Json(LoginResponse::from(tokens))))
}
