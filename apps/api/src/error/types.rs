use serde::Serialize;
use ts_rs::TS;

/// Uniform API error envelope.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/error-response.ts"
)]
pub struct ErrorResponse {
    pub error_code: String,
    pub error_description: String,
    pub error_source: String,
    pub error_stack: Vec<ErrorStackEntry>,
}

/// Diagnostic detail attached to an error. Never a stack trace.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/error-stack-entry.ts"
)]
pub struct ErrorStackEntry {
    pub source: String,
    pub description: String,
}

/// Component that produced the error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSource {
    Api,
    IdentityProvider,
}

impl ErrorSource {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Api => "api",
            Self::IdentityProvider => "identity_provider",
        }
    }
}
