use announce_core::{Announcement, AnnouncementStore};
use lambda_http::http::{Method, StatusCode};
use lambda_http::{Body, Error, Request, Response};
use serde::Serialize;
use tracing::{info, warn};

use crate::config::HandlerConfig;
use crate::errors::AnnounceError;
use crate::response;

/// The operations the handler performs, selected by HTTP method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Store one announcement.
    Post,
    /// Return every announcement.
    Get,
}

impl TryFrom<&Method> for Action {
    type Error = AnnounceError;

    fn try_from(method: &Method) -> Result<Self, Self::Error> {
        if method == Method::POST {
            Ok(Action::Post)
        } else if method == Method::GET {
            Ok(Action::Get)
        } else {
            Err(AnnounceError::UnsupportedMethod(method.to_string()))
        }
    }
}

/// Successful handler output.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Reply {
    /// Echo of the announcement just written.
    Stored {
        #[serde(rename = "Item")]
        item: Announcement,
    },
    /// All announcements, ordered by title.
    Listed {
        #[serde(rename = "Items")]
        items: Vec<Announcement>,
    },
}

/// Parse a POST body into one announcement.
fn parse_announcement(body: &[u8]) -> Result<Announcement, AnnounceError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(AnnounceError::InvalidInput(
            "request body is required".to_string(),
        ));
    }

    Ok(serde_json::from_slice(body)?)
}

/// Run one action against the store.
///
/// POST overwrites any announcement with the same title. GET issues a single
/// scan; a truncated scan still returns the records it got.
pub async fn dispatch(
    store: &dyn AnnouncementStore,
    action: Action,
    body: &[u8],
) -> Result<Reply, AnnounceError> {
    match action {
        Action::Post => {
            let announcement = parse_announcement(body)?;
            store.put(&announcement).await?;
            info!(title = %announcement.title, "announcement stored");
            Ok(Reply::Stored { item: announcement })
        }
        Action::Get => {
            let page = store.scan().await?;
            let mut items = page.items;
            items.sort_by(|a, b| a.title.cmp(&b.title));
            info!(count = items.len(), truncated = page.truncated, "announcements listed");
            Ok(Reply::Listed { items })
        }
    }
}

/// Lambda entry point for `/announcement`.
///
/// Domain failures never escape as `Err`; they are rendered into the
/// response according to `config.error_mode`. An `Err` here means the
/// response itself could not be built.
pub async fn function_handler(
    store: &dyn AnnouncementStore,
    config: &HandlerConfig,
    event: Request,
) -> Result<Response<Body>, Error> {
    let body = event.body().as_ref();
    info!(
        method = %event.method(),
        path = %event.uri().path(),
        body = %String::from_utf8_lossy(body),
        "request event"
    );

    let result = match Action::try_from(event.method()) {
        Ok(action) => dispatch(store, action, body).await,
        Err(err) => Err(err),
    };

    match result {
        Ok(reply) => response::json(StatusCode::OK, &reply),
        Err(err) => {
            warn!(kind = err.kind(), error = %err, "request failed");
            response::error(&err, config.error_mode)
        }
    }
}
