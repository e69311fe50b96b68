use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use tinylink_core::store::Result;
use tinylink_core::{ReadStore, Store};
use tracing::trace;

/// In-memory implementation of the [`Store`] trait using DashMap.
///
/// DashMap shards its locks, so unrelated keys never block each other and
/// `put_if_absent` holds a single shard lock across the check and the write.
///
/// The store counts the reads and writes it serves so callers can observe
/// store traffic.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    storage: DashMap<String, String>,
    reads: AtomicU64,
    writes: AtomicU64,
}

impl InMemoryStore {
    /// Creates a new in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new in-memory store with the specified capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: DashMap::with_capacity(capacity),
            ..Self::default()
        }
    }

    /// Number of entries currently stored.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Number of read operations served, including the read half of
    /// `put_if_absent`.
    pub fn reads(&self) -> u64 {
        self.reads.load(Ordering::Relaxed)
    }

    /// Number of values written.
    pub fn writes(&self) -> u64 {
        self.writes.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl ReadStore for InMemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        self.reads.fetch_add(1, Ordering::Relaxed);
        Ok(self.storage.get(key).map(|value| value.clone()))
    }
}

#[async_trait]
impl Store for InMemoryStore {
    async fn put(&self, key: &str, value: &str) -> Result<()> {
        trace!(key, "writing value");
        self.storage.insert(key.to_owned(), value.to_owned());
        self.writes.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }

    async fn put_if_absent(&self, key: &str, value: &str) -> Result<Option<String>> {
        self.reads.fetch_add(1, Ordering::Relaxed);
        match self.storage.entry(key.to_owned()) {
            Entry::Occupied(existing) => {
                trace!(key, "key already present");
                Ok(Some(existing.get().clone()))
            }
            Entry::Vacant(slot) => {
                trace!(key, "writing value to vacant key");
                slot.insert(value.to_owned());
                self.writes.fetch_add(1, Ordering::Relaxed);
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn put_and_get() {
        let store = InMemoryStore::new();

        store.put("ns:abc123", "https://example.com").await.unwrap();

        let value = store.get("ns:abc123").await.unwrap();
        assert_eq!(value.as_deref(), Some("https://example.com"));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn get_nonexistent() {
        let store = InMemoryStore::new();

        assert!(store.get("ns:nope").await.unwrap().is_none());
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn put_overwrites() {
        let store = InMemoryStore::new();

        store.put("ns:abc", "https://old.com").await.unwrap();
        store.put("ns:abc", "https://new.com").await.unwrap();

        let value = store.get("ns:abc").await.unwrap();
        assert_eq!(value.as_deref(), Some("https://new.com"));
        assert_eq!(store.writes(), 2);
    }

    #[tokio::test]
    async fn put_if_absent_writes_vacant_key() {
        let store = InMemoryStore::new();

        let previous = store
            .put_if_absent("ns:abc", "https://example.com")
            .await
            .unwrap();

        assert!(previous.is_none());
        assert_eq!(store.writes(), 1);
        let value = store.get("ns:abc").await.unwrap();
        assert_eq!(value.as_deref(), Some("https://example.com"));
    }

    #[tokio::test]
    async fn put_if_absent_keeps_existing_value() {
        let store = InMemoryStore::new();
        store.put("ns:abc", "https://first.com").await.unwrap();

        let previous = store
            .put_if_absent("ns:abc", "https://second.com")
            .await
            .unwrap();

        assert_eq!(previous.as_deref(), Some("https://first.com"));
        assert_eq!(store.writes(), 1);
        let value = store.get("ns:abc").await.unwrap();
        assert_eq!(value.as_deref(), Some("https://first.com"));
    }

    #[tokio::test]
    async fn counters_track_traffic() {
        let store = InMemoryStore::with_capacity(4);
        assert_eq!((store.reads(), store.writes()), (0, 0));

        store.get("ns:a").await.unwrap();
        store.put_if_absent("ns:a", "https://a.com").await.unwrap();
        store.put_if_absent("ns:a", "https://a.com").await.unwrap();

        assert_eq!(store.reads(), 3);
        assert_eq!(store.writes(), 1);
    }

    #[tokio::test]
    async fn concurrent_put_if_absent_has_one_winner() {
        let store = Arc::new(InMemoryStore::new());
        let mut handles = vec![];

        for i in 0..16u64 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                store
                    .put_if_absent("ns:contended", &format!("https://example{}.com", i))
                    .await
                    .unwrap()
            }));
        }

        let mut winners = 0;
        for handle in handles {
            if handle.await.unwrap().is_none() {
                winners += 1;
            }
        }

        assert_eq!(winners, 1);
        assert_eq!(store.writes(), 1);
        assert_eq!(store.len(), 1);
    }
}
