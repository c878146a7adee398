use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Extension, Path, State};
use axum::http::StatusCode;
use realmgate_core::BearerToken;
use realmgate_domain::{RoleInput, RolePatch};

use crate::dto::{MessageResponse, PatchRoleRequest, RoleRequest, RoleResponse};
use crate::error::{ApiResult, forbid_upstream_rejection};
use crate::state::AppState;

pub async fn list_roles_handler(
    State(state): State<AppState>,
    Extension(bearer): Extension<BearerToken>,
) -> ApiResult<Json<Vec<RoleResponse>>> {
    let roles = state
        .roles
        .list_roles(&bearer)
        .await
        .map_err(forbid_upstream_rejection)?
        .into_iter()
        .map(RoleResponse::from)
        .collect();

    Ok(Json(roles))
}

pub async fn get_role_handler(
    State(state): State<AppState>,
    Extension(bearer): Extension<BearerToken>,
    Path(role_name): Path<String>,
) -> ApiResult<Json<RoleResponse>> {
    let role = state
        .roles
        .get_role(&bearer, role_name.as_str())
        .await
        .map_err(forbid_upstream_rejection)?;

    Ok(Json(RoleResponse::from(role)))
}

pub async fn create_role_handler(
    State(state): State<AppState>,
    Extension(bearer): Extension<BearerToken>,
    payload: Result<Json<RoleRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    let Json(payload) = payload?;
    state
        .roles
        .create_role(&bearer, RoleInput::from(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(MessageResponse::new("role created"))))
}

pub async fn update_role_handler(
    State(state): State<AppState>,
    Extension(bearer): Extension<BearerToken>,
    Path(role_name): Path<String>,
    payload: Result<Json<RoleRequest>, JsonRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let Json(payload) = payload?;
    state
        .roles
        .update_role(&bearer, role_name.as_str(), RoleInput::from(payload))
        .await?;

    Ok(Json(MessageResponse::new("role updated")))
}

pub async fn patch_role_handler(
    State(state): State<AppState>,
    Extension(bearer): Extension<BearerToken>,
    Path(role_name): Path<String>,
    payload: Result<Json<PatchRoleRequest>, JsonRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let Json(payload) = payload?;
    state
        .roles
        .patch_role(&bearer, role_name.as_str(), RolePatch::from(payload))
        .await?;

    Ok(Json(MessageResponse::new("role updated")))
}

pub async fn delete_role_handler(
    State(state): State<AppState>,
    Extension(bearer): Extension<BearerToken>,
    Path(role_name): Path<String>,
) -> ApiResult<StatusCode> {
    state.roles.delete_role(&bearer, role_name.as_str()).await?;

    Ok(StatusCode::NO_CONTENT)
}
