use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Extension, Path, Query, State};
use axum::http::StatusCode;
use realmgate_core::BearerToken;
use realmgate_domain::{NewUser, UserUpdate};
use tracing::info;

use crate::dto::{
    CreateUserRequest, ListUsersQuery, MessageResponse, UpdatePasswordRequest, UpdateUserRequest,
    UserResponse,
};
use crate::error::{ApiResult, forbid_upstream_rejection};
use crate::state::AppState;

pub async fn create_user_handler(
    State(state): State<AppState>,
    Extension(bearer): Extension<BearerToken>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<UserResponse>)> {
    let Json(payload) = payload?;
    let user = state
        .users
        .create_user(&bearer, NewUser::from(payload))
        .await?;

    info!(user_id = %user.id, username = %user.username, "user created");
    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

pub async fn list_users_handler(
    State(state): State<AppState>,
    Extension(bearer): Extension<BearerToken>,
    Query(query): Query<ListUsersQuery>,
) -> ApiResult<Json<Vec<UserResponse>>> {
    let users = state
        .users
        .list_users(&bearer, query.enabled_filter())
        .await
        .map_err(forbid_upstream_rejection)?
        .into_iter()
        .map(UserResponse::from)
        .collect();

    Ok(Json(users))
}

pub async fn get_user_handler(
    State(state): State<AppState>,
    Extension(bearer): Extension<BearerToken>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<UserResponse>> {
    let user = state
        .users
        .get_user(&bearer, user_id.as_str())
        .await
        .map_err(forbid_upstream_rejection)?;

    Ok(Json(UserResponse::from(user)))
}

pub async fn update_user_handler(
    State(state): State<AppState>,
    Extension(bearer): Extension<BearerToken>,
    Path(user_id): Path<String>,
    payload: Result<Json<UpdateUserRequest>, JsonRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let Json(payload) = payload?;
    state
        .users
        .update_user(&bearer, user_id.as_str(), UserUpdate::from(payload))
        .await?;

    Ok(Json(MessageResponse::new("user updated")))
}

pub async fn update_password_handler(
    State(state): State<AppState>,
    Extension(bearer): Extension<BearerToken>,
    Path(user_id): Path<String>,
    payload: Result<Json<UpdatePasswordRequest>, JsonRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let Json(payload) = payload?;
    state
        .users
        .update_password(&bearer, user_id.as_str(), payload.password.as_str())
        .await?;

    Ok(Json(MessageResponse::new("password updated")))
}

/// Logical delete: the user is disabled, never removed.
pub async fn disable_user_handler(
    State(state): State<AppState>,
    Extension(bearer): Extension<BearerToken>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    state.users.disable_user(&bearer, user_id.as_str()).await?;

    info!(user_id = %user_id, "user disabled");
    Ok(Json(MessageResponse::new("user disabled")))
}
