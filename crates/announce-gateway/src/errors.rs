use announce_api::ConfigError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Requests turned away before or around the handler, with the messages the
/// managed gateway uses for the same cases.
#[derive(Debug)]
pub enum ApiError {
    /// Unknown path or method.
    MissingAuthenticationToken,
    /// Missing or wrong `x-api-key`.
    Forbidden,
    /// Route throttle exhausted.
    TooManyRequests,
    /// POST body does not match the announcement model.
    InvalidBody,
    /// The handler could not be invoked or its response could not be built.
    Internal,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::MissingAuthenticationToken => {
                (StatusCode::FORBIDDEN, "Missing Authentication Token")
            }
            ApiError::Forbidden => (StatusCode::FORBIDDEN, "Forbidden"),
            ApiError::TooManyRequests => (StatusCode::TOO_MANY_REQUESTS, "Too Many Requests"),
            ApiError::InvalidBody => (StatusCode::BAD_REQUEST, "Invalid request body"),
            ApiError::Internal => (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error"),
        };

        let body = serde_json::json!({ "message": message });
        (status, axum::Json(body)).into_response()
    }
}

/// Errors that stop the gateway from starting or serving.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("gateway config error: {0}")]
    Config(#[from] ConfigError),

    #[error("{name} has invalid value {value:?}: {reason}")]
    InvalidSetting {
        name: &'static str,
        value: String,
        reason: &'static str,
    },

    #[error("gateway I/O error: {0}")]
    Io(#[from] std::io::Error),
}
