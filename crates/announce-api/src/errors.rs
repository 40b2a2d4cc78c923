use announce_core::CoreError;
use lambda_http::http::StatusCode;
use thiserror::Error;

/// Failures the handler reports to callers.
///
/// `Display` renders `"<Kind>: <message>"`, the body text of the legacy
/// error mode and the `message` field of the JSON error body.
#[derive(Debug, Error)]
pub enum AnnounceError {
    /// Missing or malformed body, or missing required field.
    #[error("InvalidInput: {0}")]
    InvalidInput(String),

    /// Any verb other than GET or POST.
    #[error("UnsupportedMethod: Unrecognized method \"{0}\"")]
    UnsupportedMethod(String),

    /// The table rejected the operation.
    #[error("StorageFailure: {0}")]
    StorageFailure(String),
}

impl AnnounceError {
    /// Short tag identifying the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            AnnounceError::InvalidInput(_) => "InvalidInput",
            AnnounceError::UnsupportedMethod(_) => "UnsupportedMethod",
            AnnounceError::StorageFailure(_) => "StorageFailure",
        }
    }

    /// HTTP status used when errors are reported by status code.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AnnounceError::InvalidInput(_) | AnnounceError::UnsupportedMethod(_) => {
                StatusCode::BAD_REQUEST
            }
            AnnounceError::StorageFailure(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl From<CoreError> for AnnounceError {
    fn from(err: CoreError) -> Self {
        tracing::error!("Core error: {err}");
        AnnounceError::StorageFailure(err.to_string())
    }
}

impl From<serde_json::Error> for AnnounceError {
    fn from(err: serde_json::Error) -> Self {
        AnnounceError::InvalidInput(err.to_string())
    }
}
