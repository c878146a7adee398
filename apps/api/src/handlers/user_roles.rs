use axum::Json;
use axum::extract::{Extension, Path, State};
use realmgate_core::BearerToken;
use tracing::info;

use crate::dto::{MessageResponse, RoleResponse};
use crate::error::{ApiResult, forbid_upstream_rejection};
use crate::state::AppState;

pub async fn assign_role_handler(
    State(state): State<AppState>,
    Extension(bearer): Extension<BearerToken>,
    Path((user_id, role_name)): Path<(String, String)>,
) -> ApiResult<Json<MessageResponse>> {
    assign(&state, &bearer, user_id.as_str(), role_name.as_str()).await
}

/// Same as [`assign_role_handler`] with the path parameters in role-first order.
pub async fn assign_user_to_role_handler(
    State(state): State<AppState>,
    Extension(bearer): Extension<BearerToken>,
    Path((role_name, user_id)): Path<(String, String)>,
) -> ApiResult<Json<MessageResponse>> {
    assign(&state, &bearer, user_id.as_str(), role_name.as_str()).await
}

pub async fn remove_role_handler(
    State(state): State<AppState>,
    Extension(bearer): Extension<BearerToken>,
    Path((user_id, role_name)): Path<(String, String)>,
) -> ApiResult<Json<MessageResponse>> {
    remove(&state, &bearer, user_id.as_str(), role_name.as_str()).await
}

/// Same as [`remove_role_handler`] with the path parameters in role-first order.
pub async fn remove_user_from_role_handler(
    State(state): State<AppState>,
    Extension(bearer): Extension<BearerToken>,
    Path((role_name, user_id)): Path<(String, String)>,
) -> ApiResult<Json<MessageResponse>> {
    remove(&state, &bearer, user_id.as_str(), role_name.as_str()).await
}

pub async fn list_user_roles_handler(
    State(state): State<AppState>,
    Extension(bearer): Extension<BearerToken>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<Vec<RoleResponse>>> {
    let roles = state
        .roles
        .list_user_roles(&bearer, user_id.as_str())
        .await
        .map_err(forbid_upstream_rejection)?
        .into_iter()
        .map(RoleResponse::from)
        .collect();

    Ok(Json(roles))
}

async fn assign(
    state: &AppState,
    bearer: &BearerToken,
    user_id: &str,
    role_name: &str,
) -> ApiResult<Json<MessageResponse>> {
    state
        .roles
        .assign_role_to_user(bearer, user_id, role_name)
        .await?;

    info!(user_id, role = role_name, "role assigned to user");
    Ok(Json(MessageResponse::new("role assigned to user")))
}

async fn remove(
    state: &AppState,
    bearer: &BearerToken,
    user_id: &str,
    role_name: &str,
) -> ApiResult<Json<MessageResponse>> {
    state
        .roles
        .remove_role_from_user(bearer, user_id, role_name)
        .await?;

    info!(user_id, role = role_name, "role removed from user");
    Ok(Json(MessageResponse::new("role removed from user")))
}
