use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use realmgate_core::AppError;
use tracing::warn;

mod types;

pub use types::{ErrorResponse, ErrorSource, ErrorStackEntry};

/// HTTP API error wrapper around core application errors.
#[derive(Debug)]
pub struct ApiError {
    error: AppError,
    source: ErrorSource,
}

impl ApiError {
    /// Attributes the error to the identity provider regardless of its kind.
    pub fn from_identity_provider(error: AppError) -> Self {
        Self {
            error,
            source: ErrorSource::IdentityProvider,
        }
    }

    fn status(&self) -> StatusCode {
        match self.error {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Upstream { .. } | AppError::Transport(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn stack(&self) -> Vec<ErrorStackEntry> {
        match &self.error {
            AppError::Upstream { status, body } => vec![ErrorStackEntry {
                source: ErrorSource::IdentityProvider.as_str().to_owned(),
                description: format!("status {status}: {body}"),
            }],
            _ => Vec::new(),
        }
    }
}

impl From<AppError> for ApiError {
    fn from(value: AppError) -> Self {
        let source = if value.is_upstream_origin() {
            ErrorSource::IdentityProvider
        } else {
            ErrorSource::Api
        };

        Self {
            error: value,
            source,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(value: JsonRejection) -> Self {
        AppError::Validation(format!("invalid request body: {}", value.body_text())).into()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            warn!(status = status.as_u16(), error = %self.error, "request failed");
        }

        let payload = Json(ErrorResponse {
            error_code: status.as_u16().to_string(),
            error_description: self.error.to_string(),
            error_source: self.source.as_str().to_owned(),
            error_stack: self.stack(),
        });

        (status, payload).into_response()
    }
}

/// Standard API result type.
pub type ApiResult<T> = Result<T, ApiError>;

/// Reports identity provider refusals on read operations as forbidden.
pub fn forbid_upstream_rejection(error: AppError) -> AppError {
    match error {
        AppError::Upstream { status, body } => AppError::Forbidden(format!(
            "identity provider refused the request with status {status}: {body}"
        )),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use realmgate_core::AppError;
    use ts_rs::TS;

    use super::{ApiError, ErrorResponse, ErrorStackEntry, forbid_upstream_rejection};

    #[test]
    fn upstream_errors_map_to_internal_server_error() {
        let response = ApiError::from(AppError::Upstream {
            status: 502,
            body: "bad gateway".to_owned(),
        })
        .into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn read_rejections_become_forbidden() {
        let error = forbid_upstream_rejection(AppError::Upstream {
            status: 401,
            body: "expired".to_owned(),
        });
        assert!(matches!(error, AppError::Forbidden(message) if message.contains("401")));

        let transport = forbid_upstream_rejection(AppError::Transport("timeout".to_owned()));
        assert!(matches!(transport, AppError::Transport(_)));
    }

    #[test]
    fn error_bindings_export_to_shared_api_types_package() {
        let envelope = ErrorResponse::output_path();
        let entry = ErrorStackEntry::output_path();

        assert!(envelope.is_some_and(|path| {
            path.ends_with("packages/api-types/src/generated/error-response.ts")
        }));
        assert!(entry.is_some_and(|path| {
            path.ends_with("packages/api-types/src/generated/error-stack-entry.ts")
        }));
    }
}
