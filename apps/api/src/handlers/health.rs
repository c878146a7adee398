use axum::Json;

use crate::dto::HealthResponse;

/// Liveness check. Never calls the identity provider.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
