//! Redis cache implementation.
//!
//! Every listing fingerprint is one Redis hash. Row pages and the count are
//! fields of that hash, so they are read independently and written together
//! with a single `HSET`.
//!
//! Pattern deletion walks the keyspace with `SCAN ... TYPE hash` and deletes
//! each batch as it arrives. A flush interrupted half-way leaves some hashes
//! behind; running it again finishes the job.

use async_trait::async_trait;
use redis::AsyncCommands;

use catalog_core::cache::{Cache, Result};

use super::error::map_redis_error;

/// Keys requested from Redis per `SCAN` round trip.
const SCAN_BATCH: usize = 100;

/// Redis cache backend using connection manager for pooling.
pub struct RedisCache {
    conn: redis::aio::ConnectionManager,
}

impl RedisCache {
    /// Creates a new Redis cache connection.
    ///
    /// # Arguments
    ///
    /// * `url` - Redis connection URL (e.g., "redis://localhost:6379")
    ///
    /// # Errors
    ///
    /// Returns `CacheError::ConnectionFailed` if the connection cannot be established.
    pub async fn new(url: &str) -> Result<Self> {
        let client = redis::Client::open(url).map_err(map_redis_error)?;
        let conn = redis::aio::ConnectionManager::new(client)
            .await
            .map_err(map_redis_error)?;
        Ok(Self { conn })
    }
}

#[async_trait]
impl Cache for RedisCache {
    async fn get_field(&self, key: &str, field: &str) -> Result<Option<Vec<u8>>> {
        let mut conn = self.conn.clone();
        let result: Option<Vec<u8>> = conn.hget(key, field).await.map_err(map_redis_error)?;
        Ok(result)
    }

    async fn set_fields(&self, key: &str, fields: &[(String, Vec<u8>)]) -> Result<()> {
        if fields.is_empty() {
            return Ok(());
        }

        let mut conn = self.conn.clone();
        conn.hset_multiple::<_, _, _, ()>(key, fields)
            .await
            .map_err(map_redis_error)?;
        Ok(())
    }

    async fn delete_pattern(&self, pattern: &str) -> Result<u64> {
        let mut conn = self.conn.clone();
        let mut cursor: u64 = 0;
        let mut removed: u64 = 0;

        loop {
            let (next, keys): (u64, Vec<String>) = redis::cmd("SCAN")
                .arg(cursor)
                .arg("MATCH")
                .arg(pattern)
                .arg("COUNT")
                .arg(SCAN_BATCH)
                .arg("TYPE")
                .arg("hash")
                .query_async(&mut conn)
                .await
                .map_err(map_redis_error)?;

            if !keys.is_empty() {
                let deleted: u64 = conn.del(&keys).await.map_err(map_redis_error)?;
                removed += deleted;
            }

            if next == 0 {
                break;
            }
            cursor = next;
        }

        tracing::debug!(pattern = %pattern, removed, "Deleted cache hashes");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU64, Ordering};

    use super::*;

    /// Helper to get Redis URL from environment.
    fn redis_url() -> String {
        std::env::var("REDIS_URL").unwrap_or_else(|_| "redis://localhost:6379".to_string())
    }

    /// Skip test if Redis not available.
    async fn get_test_cache() -> Option<RedisCache> {
        RedisCache::new(&redis_url()).await.ok()
    }

    /// Generate a unique key prefix so tests never touch real listing hashes.
    fn test_prefix(suffix: &str) -> String {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        format!(
            "test:redis_cache:{}:{}:{}:",
            std::process::id(),
            COUNTER.fetch_add(1, Ordering::Relaxed),
            suffix
        )
    }

    #[tokio::test]
    async fn test_redis_set_and_get_fields() {
        let Some(cache) = get_test_cache().await else {
            eprintln!("Skipping test: Redis not available");
            return;
        };

        let key = format!("{}hash", test_prefix("set_get"));
        cache
            .set_fields(
                &key,
                &[
                    ("5:1:".to_string(), b"[]".to_vec()),
                    ("count".to_string(), b"0".to_vec()),
                ],
            )
            .await
            .unwrap();

        assert_eq!(
            cache.get_field(&key, "5:1:").await.unwrap(),
            Some(b"[]".to_vec())
        );
        assert_eq!(
            cache.get_field(&key, "count").await.unwrap(),
            Some(b"0".to_vec())
        );
        assert_eq!(cache.get_field(&key, "missing").await.unwrap(), None);

        cache.delete_pattern(&key).await.unwrap();
    }

    #[tokio::test]
    async fn test_redis_get_field_nonexistent_key() {
        let Some(cache) = get_test_cache().await else {
            eprintln!("Skipping test: Redis not available");
            return;
        };

        let key = format!("{}absent", test_prefix("nonexistent"));
        assert_eq!(cache.get_field(&key, "count").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_redis_set_fields_merges() {
        let Some(cache) = get_test_cache().await else {
            eprintln!("Skipping test: Redis not available");
            return;
        };

        let key = format!("{}hash", test_prefix("merge"));
        cache
            .set_fields(&key, &[("count".to_string(), b"2".to_vec())])
            .await
            .unwrap();
        cache
            .set_fields(&key, &[("5:1:".to_string(), b"[1,2]".to_vec())])
            .await
            .unwrap();

        assert_eq!(
            cache.get_field(&key, "count").await.unwrap(),
            Some(b"2".to_vec())
        );
        assert_eq!(
            cache.get_field(&key, "5:1:").await.unwrap(),
            Some(b"[1,2]".to_vec())
        );

        cache.delete_pattern(&key).await.unwrap();
    }

    #[tokio::test]
    async fn test_redis_delete_pattern_only_hashes_under_prefix() {
        let Some(cache) = get_test_cache().await else {
            eprintln!("Skipping test: Redis not available");
            return;
        };

        let prefix = test_prefix("flush");
        let other = test_prefix("keep");
        for i in 0..3 {
            cache
                .set_fields(
                    &format!("{prefix}{i}"),
                    &[("count".to_string(), b"1".to_vec())],
                )
                .await
                .unwrap();
        }
        let survivor = format!("{other}0");
        cache
            .set_fields(&survivor, &[("count".to_string(), b"1".to_vec())])
            .await
            .unwrap();

        let removed = cache.delete_pattern(&format!("{prefix}*")).await.unwrap();

        assert_eq!(removed, 3);
        assert_eq!(
            cache.get_field(&format!("{prefix}0"), "count").await.unwrap(),
            None
        );
        assert!(cache.get_field(&survivor, "count").await.unwrap().is_some());

        cache.delete_pattern(&survivor).await.unwrap();
    }
}
