use axum::Router;
use axum::middleware::from_fn;
use axum::routing::{get, patch, post};
use realmgate_core::AppError;
use tower_http::trace::TraceLayer;

use crate::state::AppState;
use crate::{handlers, middleware};

mod cors;

pub fn build_router(
    app_state: AppState,
    cors_allowed_origin: Option<&str>,
) -> Result<Router, AppError> {
    let protected_routes = Router::new()
        .route(
            "/users",
            get(handlers::users::list_users_handler).post(handlers::users::create_user_handler),
        )
        .route(
            "/users/{user_id}",
            get(handlers::users::get_user_handler)
                .put(handlers::users::update_user_handler)
                .delete(handlers::users::disable_user_handler),
        )
        .route(
            "/users/{user_id}/password",
            patch(handlers::users::update_password_handler),
        )
        .route(
            "/roles",
            get(handlers::roles::list_roles_handler).post(handlers::roles::create_role_handler),
        )
        .route(
            "/roles/{role_name}",
            get(handlers::roles::get_role_handler)
                .put(handlers::roles::update_role_handler)
                .patch(handlers::roles::patch_role_handler)
                .delete(handlers::roles::delete_role_handler),
        )
        .route(
            "/roles/{role_name}/users/{user_id}",
            post(handlers::user_roles::assign_user_to_role_handler)
                .delete(handlers::user_roles::remove_user_from_role_handler),
        )
        .route(
            "/user-roles/{user_id}",
            get(handlers::user_roles::list_user_roles_handler),
        )
        .route(
            "/user-roles/{user_id}/{role_name}",
            post(handlers::user_roles::assign_role_handler)
                .delete(handlers::user_roles::remove_role_handler),
        )
        .route_layer(from_fn(middleware::require_bearer));

    let router = Router::new()
        .route("/health", get(handlers::health::health_handler))
        .route("/login", post(handlers::auth::login_handler))
        .merge(protected_routes)
        .layer(TraceLayer::new_for_http());

    let router = match cors_allowed_origin {
        Some(origin) => router.layer(cors::build_cors_layer(origin)?),
        None => router,
    };

    Ok(router.with_state(app_state))
}
