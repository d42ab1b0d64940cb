//! In-memory hash cache with LRU eviction.
//!
//! Each LRU slot is one listing hash (a fingerprint and all of its fields),
//! so eviction never splits the rows of a fingerprint from its count.

use std::collections::HashMap;
use std::num::NonZeroUsize;
use std::sync::Arc;

use async_trait::async_trait;
use lru::LruCache;
use tokio::sync::RwLock;

use catalog_core::cache::{pattern_matches, Cache, Result};

type Fields = HashMap<String, Vec<u8>>;

/// In-memory cache implementation with LRU eviction.
///
/// Thread-safe cache using `Arc<RwLock<LruCache>>` for concurrent access.
/// Writes to a hash happen under a single lock acquisition.
#[derive(Debug, Clone)]
pub struct MemoryCache {
    store: Arc<RwLock<LruCache<String, Fields>>>,
}

impl MemoryCache {
    /// Creates a new in-memory cache holding at most `max_entries` hashes.
    ///
    /// A capacity of 0 is raised to 1.
    pub fn new(max_entries: usize) -> Self {
        let capacity = NonZeroUsize::new(max_entries).unwrap_or(NonZeroUsize::MIN);
        Self {
            store: Arc::new(RwLock::new(LruCache::new(capacity))),
        }
    }

    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }
}

#[async_trait]
impl Cache for MemoryCache {
    async fn get_field(&self, key: &str, field: &str) -> Result<Option<Vec<u8>>> {
        // Write lock: a hit promotes the hash in the LRU order.
        let mut store = self.store.write().await;
        Ok(store.get(key).and_then(|fields| fields.get(field).cloned()))
    }

    async fn set_fields(&self, key: &str, fields: &[(String, Vec<u8>)]) -> Result<()> {
        let mut store = self.store.write().await;
        match store.get_mut(key) {
            Some(existing) => {
                for (field, value) in fields {
                    existing.insert(field.clone(), value.clone());
                }
            }
            None => {
                let created: Fields = fields.iter().cloned().collect();
                store.put(key.to_string(), created);
            }
        }
        Ok(())
    }

    async fn delete_pattern(&self, pattern: &str) -> Result<u64> {
        let mut store = self.store.write().await;
        let keys: Vec<String> = store
            .iter()
            .filter(|(key, _)| pattern_matches(pattern, key))
            .map(|(key, _)| key.clone())
            .collect();

        for key in &keys {
            store.pop(key);
        }

        Ok(keys.len() as u64)
    }
}
