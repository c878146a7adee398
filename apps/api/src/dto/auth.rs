use realmgate_domain::TokenResponse;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Incoming payload for password login.
#[derive(Default, Deserialize, TS)]
#[serde(default)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/login-request.ts"
)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Tokens returned after a successful login.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/login-response.ts"
)]
pub struct LoginResponse {
    pub token_type: String,
    pub access_token: String,
    pub expires_in: i64,
    pub refresh_token: String,
    pub refresh_expires_in: i64,
}

impl From<TokenResponse> for LoginResponse {
    fn from(value: TokenResponse) -> Self {
        Self {
            token_type: value.token_type,
            access_token: value.access_token,
            expires_in: value.expires_in,
            refresh_token: value.refresh_token,
            refresh_expires_in: value.refresh_expires_in,
        }
    }
}
