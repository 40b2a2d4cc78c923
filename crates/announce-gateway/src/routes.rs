use std::time::Duration;

use announce_api::function_handler;
use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, error, warn};

use crate::auth::ApiKey;
use crate::errors::ApiError;
use crate::state::AppState;
use crate::validate::validate_announcement;

/// The managed gateway gives up on an integration after 29 seconds.
const INTEGRATION_TIMEOUT: Duration = Duration::from_secs(29);

/// Build the gateway router: both `/announcement` routes in front of the
/// announcement handler, everything else answered as an unknown resource.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/announcement",
            // `get` would also answer HEAD; only GET and POST are deployed
            get(get_announcement)
                .post(post_announcement)
                .head(missing_authentication_token)
                .fallback(missing_authentication_token),
        )
        .fallback(missing_authentication_token)
        .layer(integration_timeout(INTEGRATION_TIMEOUT))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Requests that outlive `timeout` are answered with 504, as the managed
/// gateway reports an integration timeout.
fn integration_timeout(timeout: Duration) -> TimeoutLayer {
    TimeoutLayer::with_status_code(StatusCode::GATEWAY_TIMEOUT, timeout)
}

/// POST /announcement
///
/// API key, POST throttle, then the request model check, then the handler.
async fn post_announcement(
    State(state): State<AppState>,
    _api_key: ApiKey,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ApiError> {
    if !state.post_throttle.try_acquire() {
        warn!(route = "POST /announcement", "throttled");
        return Err(ApiError::TooManyRequests);
    }

    if let Err(violation) = validate_announcement(&body) {
        debug!(%violation, "request body rejected");
        return Err(ApiError::InvalidBody);
    }

    invoke(&state, method, uri, headers, body).await
}

/// GET /announcement
async fn get_announcement(
    State(state): State<AppState>,
    _api_key: ApiKey,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ApiError> {
    if !state.get_throttle.try_acquire() {
        warn!(route = "GET /announcement", "throttled");
        return Err(ApiError::TooManyRequests);
    }

    invoke(&state, method, uri, headers, body).await
}

async fn missing_authentication_token() -> ApiError {
    ApiError::MissingAuthenticationToken
}

/// Hand the request to the announcement handler and relay its response
/// unchanged.
async fn invoke(
    state: &AppState,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ApiError> {
    let body = if body.is_empty() {
        lambda_http::Body::Empty
    } else {
        match String::from_utf8(body.to_vec()) {
            Ok(text) => lambda_http::Body::Text(text),
            Err(e) => lambda_http::Body::Binary(e.into_bytes()),
        }
    };

    let mut builder = lambda_http::http::Request::builder().method(method).uri(uri);
    if let Some(request_headers) = builder.headers_mut() {
        *request_headers = headers;
    }
    let request = builder.body(body).map_err(|e| {
        error!("failed to build handler request: {e}");
        ApiError::Internal
    })?;

    let response = function_handler(state.store.as_ref(), &state.handler, request)
        .await
        .map_err(|e| {
            error!("announcement handler failed: {e}");
            ApiError::Internal
        })?;

    let (parts, body) = response.into_parts();
    Ok(Response::from_parts(parts, Body::from(body.to_vec())))
}
