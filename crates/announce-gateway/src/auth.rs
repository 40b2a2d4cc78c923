use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::errors::ApiError;
use crate::state::AppState;

/// Header carrying the API key, as the managed gateway expects it.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Proof that the request presented the configured API key.
pub struct ApiKey;

impl FromRequestParts<AppState> for ApiKey {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let presented = parts
            .headers
            .get(API_KEY_HEADER)
            .and_then(|v| v.to_str().ok())
            .ok_or(ApiError::Forbidden)?;

        if !keys_match(presented.as_bytes(), state.api_key.as_bytes()) {
            tracing::warn!(path = %parts.uri.path(), "rejected request with invalid API key");
            return Err(ApiError::Forbidden);
        }

        Ok(ApiKey)
    }
}

/// Compare keys in time that depends only on their length.
fn keys_match(presented: &[u8], expected: &[u8]) -> bool {
    presented.len() == expected.len()
        && presented
            .iter()
            .zip(expected)
            .fold(0u8, |acc, (a, b)| acc | (a ^ b))
            == 0
}
