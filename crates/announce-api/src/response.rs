use lambda_http::http::header::{
    ACCESS_CONTROL_ALLOW_CREDENTIALS, ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
    ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE,
};
use lambda_http::http::response::Builder;
use lambda_http::http::StatusCode;
use lambda_http::{Body, Error, Response};
use serde::Serialize;

use crate::config::ErrorMode;
use crate::errors::AnnounceError;

/// Request headers browsers may send on cross-origin calls.
pub const ALLOWED_HEADERS: &str =
    "Content-Type,X-Amz-Date,Authorization,X-Api-Key,X-Amz-Security-Token,X-Amz-User-Agent";

pub const ALLOWED_METHODS: &str = "GET,POST";

/// Response builder carrying the content type and CORS headers every
/// response shares.
fn builder(status: StatusCode) -> Builder {
    Response::builder()
        .status(status)
        .header(CONTENT_TYPE, "application/json")
        .header(ACCESS_CONTROL_ALLOW_ORIGIN, "*")
        .header(ACCESS_CONTROL_ALLOW_CREDENTIALS, "false")
        .header(ACCESS_CONTROL_ALLOW_HEADERS, ALLOWED_HEADERS)
        .header(ACCESS_CONTROL_ALLOW_METHODS, ALLOWED_METHODS)
}

/// Serialize `value` as the JSON body of a response.
pub fn json<T: Serialize>(status: StatusCode, value: &T) -> Result<Response<Body>, Error> {
    let body = serde_json::to_string(value)?;
    Ok(builder(status).body(Body::Text(body))?)
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

/// Render a handler failure according to the configured error mode.
pub fn error(err: &AnnounceError, mode: ErrorMode) -> Result<Response<Body>, Error> {
    match mode {
        ErrorMode::Status => json(
            err.status_code(),
            &ErrorBody {
                message: err.to_string(),
            },
        ),
        ErrorMode::Legacy => Ok(builder(StatusCode::OK).body(Body::Text(err.to_string()))?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body_text(response: &Response<Body>) -> String {
        String::from_utf8(response.body().to_vec()).unwrap()
    }

    #[test]
    fn json_response_carries_cors_headers() {
        let response = json(StatusCode::OK, &serde_json::json!({ "Items": [] })).unwrap();
        let headers = response.headers();

        assert_eq!(headers[CONTENT_TYPE], "application/json");
        assert_eq!(headers[ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert_eq!(headers[ACCESS_CONTROL_ALLOW_CREDENTIALS], "false");
        assert_eq!(headers[ACCESS_CONTROL_ALLOW_HEADERS], ALLOWED_HEADERS);
        assert_eq!(headers[ACCESS_CONTROL_ALLOW_METHODS], ALLOWED_METHODS);
        assert_eq!(body_text(&response), r#"{"Items":[]}"#);
    }

    #[test]
    fn status_mode_uses_error_status_and_message_body() {
        let err = AnnounceError::StorageFailure("table unavailable".into());
        let response = error(&err, ErrorMode::Status).unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(
            body_text(&response),
            r#"{"message":"StorageFailure: table unavailable"}"#
        );
    }

    #[test]
    fn legacy_mode_always_returns_ok_with_bare_text() {
        let err = AnnounceError::InvalidInput("request body is required".into());
        let response = error(&err, ErrorMode::Legacy).unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(&response), "InvalidInput: request body is required");
        assert_eq!(response.headers()[CONTENT_TYPE], "application/json");
    }
}
