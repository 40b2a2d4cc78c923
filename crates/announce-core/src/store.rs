use async_trait::async_trait;

use crate::error::CoreError;
use crate::model::Announcement;

/// One page of a table scan.
#[derive(Debug, Clone, Default)]
pub struct ScanPage {
    /// Records in the order the backend returned them.
    pub items: Vec<Announcement>,

    /// True when the backend stopped before the end of the table. The
    /// remaining records are not fetched.
    pub truncated: bool,
}

/// Storage backend for announcements, keyed by title.
#[async_trait]
pub trait AnnouncementStore: Send + Sync {
    /// Write one announcement, replacing any record with the same title.
    async fn put(&self, announcement: &Announcement) -> Result<(), CoreError>;

    /// Read every announcement in a single pass.
    async fn scan(&self) -> Result<ScanPage, CoreError>;
}
