//! Shared application state.
//!
//! The cache backend is chosen at compile time by the `memory` or `redis`
//! feature. SQLite is always the product store.

use std::sync::Arc;

use crate::config::Config;
use crate::service::ProductService;

/// Shared application state, cloned for each request handler.
#[derive(Clone)]
pub struct AppState {
    pub products: Arc<ProductService>,
}

impl AppState {
    pub fn from_service(products: ProductService) -> Self {
        Self {
            products: Arc::new(products),
        }
    }

    /// State backed by an in-memory SQLite database and an in-memory cache.
    #[cfg(test)]
    pub async fn in_memory() -> Self {
        use crate::cache::memory::MemoryCache;
        use crate::storage::SqliteRepository;

        let repository = SqliteRepository::new_in_memory()
            .await
            .expect("in-memory SQLite should open");
        Self::from_service(ProductService::new(
            Arc::new(repository),
            Arc::new(MemoryCache::new(1_000)),
        ))
    }
}

#[cfg(feature = "memory")]
mod sqlite_memory {
    use super::*;
    use crate::cache::MemoryCache;
    use crate::storage::SqliteRepository;

    impl AppState {
        /// Creates AppState with SQLite storage and an in-memory cache.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let repository = Arc::new(SqliteRepository::new(&config.sqlite_path).await?);
            let cache = Arc::new(MemoryCache::new(config.cache_max_entries));

            tracing::info!(
                sqlite = %config.sqlite_path,
                max_entries = config.cache_max_entries,
                "Using SQLite store with in-memory cache"
            );

            Ok(Self::from_service(ProductService::new(repository, cache)))
        }
    }
}

#[cfg(feature = "redis")]
mod sqlite_redis {
    use super::*;
    use crate::cache::RedisCache;
    use crate::storage::SqliteRepository;

    impl AppState {
        /// Creates AppState with SQLite storage and Redis cache.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let repository = Arc::new(SqliteRepository::new(&config.sqlite_path).await?);
            let cache = Arc::new(RedisCache::new(&config.redis_url).await?);

            tracing::info!(
                sqlite = %config.sqlite_path,
                redis = %config.redis_url,
                "Using SQLite store with Redis cache"
            );

            Ok(Self::from_service(ProductService::new(repository, cache)))
        }
    }
}
