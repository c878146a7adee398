use axum::extract::Request;
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;
use realmgate_core::{AppError, BearerToken};

use crate::error::ApiResult;

/// Rejects requests without `Authorization: Bearer <token>` and exposes the
/// token to handlers as a request extension.
pub async fn require_bearer(mut request: Request, next: Next) -> ApiResult<Response> {
    let token = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("missing bearer token".to_owned()))
        .and_then(BearerToken::from_authorization_header)?;

    request.extensions_mut().insert(token);
    Ok(next.run(request).await)
}
