//! Cache partition abstraction and the default in-memory store.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::request::CacheKey;
use crate::snapshot::ResponseSnapshot;

/// A named key-value store mapping request identity to response snapshots.
///
/// Implementations perform no coordination of their own: two concurrent
/// `put`s for the same key are last-write-wins.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Looks up the snapshot cached for `key`, if any.
    async fn get(&self, key: &CacheKey) -> Option<ResponseSnapshot>;

    /// Stores `snapshot` under `key`, replacing any previous entry.
    async fn put(&self, key: CacheKey, snapshot: ResponseSnapshot);

    /// Returns the number of cached entries.
    async fn len(&self) -> usize;

    /// Returns `true` if the partition holds no entries.
    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

/// Default in-memory cache partition.
///
/// The name is a version tag (e.g. `"newsdeck-v1"`): bumping it and opening
/// a fresh partition is the invalidation mechanism. Old-named partitions
/// are simply abandoned; this store never deletes anything.
#[derive(Debug, Default)]
pub struct MemoryStore {
    name: String,
    entries: RwLock<HashMap<CacheKey, ResponseSnapshot>>,
}

impl MemoryStore {
    /// Creates a new, empty partition tagged with the given version name.
    ///
    /// Each call constructs an independent store; components share one
    /// partition by holding an `Arc` to it.
    #[must_use]
    pub fn open(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the partition's version tag.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

#[async_trait]
impl CacheStore for MemoryStore {
    async fn get(&self, key: &CacheKey) -> Option<ResponseSnapshot> {
        self.entries.read().await.get(key).cloned()
    }

    async fn put(&self, key: CacheKey, snapshot: ResponseSnapshot) {
        self.entries.write().await.insert(key, snapshot);
    }

    async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}
