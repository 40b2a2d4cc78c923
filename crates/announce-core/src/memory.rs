use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::CoreError;
use crate::model::{Announcement, Title};
use crate::store::{AnnouncementStore, ScanPage};

/// Process-local announcement table, ordered by title.
///
/// Backs the local gateway and the handler tests. Writes follow the same
/// last-write-wins semantics as the DynamoDB table.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RwLock<BTreeMap<Title, Announcement>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored announcements.
    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }
}

#[async_trait]
impl AnnouncementStore for MemoryStore {
    async fn put(&self, announcement: &Announcement) -> Result<(), CoreError> {
        self.items
            .write()
            .await
            .insert(announcement.title.clone(), announcement.clone());
        Ok(())
    }

    async fn scan(&self) -> Result<ScanPage, CoreError> {
        let items = self.items.read().await.values().cloned().collect();
        Ok(ScanPage {
            items,
            truncated: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn announcement(title: &str, description: &str) -> Announcement {
        let mut a = Announcement::new(Title::new(title).unwrap());
        a.description = Some(description.into());
        a
    }

    #[tokio::test]
    async fn starts_empty() {
        let store = MemoryStore::new();
        assert!(store.is_empty().await);
        assert!(store.scan().await.unwrap().items.is_empty());
    }

    #[tokio::test]
    async fn put_then_scan() {
        let store = MemoryStore::new();
        store.put(&announcement("Launch", "v1 release")).await.unwrap();

        let page = store.scan().await.unwrap();
        assert_eq!(page.items, vec![announcement("Launch", "v1 release")]);
        assert!(!page.truncated);
    }

    #[tokio::test]
    async fn same_title_overwrites() {
        let store = MemoryStore::new();
        store.put(&announcement("Launch", "first")).await.unwrap();
        store.put(&announcement("Launch", "second")).await.unwrap();

        assert_eq!(store.len().await, 1);
        let page = store.scan().await.unwrap();
        assert_eq!(page.items[0].description.as_deref(), Some("second"));
    }

    #[tokio::test]
    async fn overwrite_drops_fields_missing_from_new_record() {
        let store = MemoryStore::new();
        let mut first = announcement("Launch", "first");
        first.status = Some("draft".into());
        store.put(&first).await.unwrap();
        store
            .put(&Announcement::new(Title::new("Launch").unwrap()))
            .await
            .unwrap();

        let page = store.scan().await.unwrap();
        assert_eq!(page.items[0].status, None);
        assert_eq!(page.items[0].description, None);
    }

    #[tokio::test]
    async fn scan_is_ordered_by_title() {
        let store = MemoryStore::new();
        store.put(&announcement("b", "")).await.unwrap();
        store.put(&announcement("c", "")).await.unwrap();
        store.put(&announcement("a", "")).await.unwrap();

        let titles: Vec<String> = store
            .scan()
            .await
            .unwrap()
            .items
            .into_iter()
            .map(|a| a.title.into())
            .collect();
        assert_eq!(titles, vec!["a", "b", "c"]);
    }
}
