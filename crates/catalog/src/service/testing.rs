//! Counting fakes for orchestration tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicI64, AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use tokio::sync::RwLock;

use catalog_core::cache::{pattern_matches, Cache, CacheError, Result as CacheResult};
use catalog_core::product::{NewProduct, Product, ProductType};
use catalog_core::storage::{
    CountQuery, ProductRepository, RepositoryError, Result as RepoResult, RowsQuery,
};

pub fn product(id: i64, name: &str, price: i64) -> Product {
    Product {
        id,
        name: name.to_string(),
        price,
        product_type: ProductType::new("buah"),
        created_at: Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap(),
    }
}

/// Repository returning canned rows and a canned count for every query.
#[derive(Default)]
pub struct MockProductRepository {
    rows: Vec<Product>,
    count: u64,
    list_delay: Option<Duration>,
    fail_list: bool,
    fail_count: bool,
    pub list_calls: AtomicUsize,
    pub count_calls: AtomicUsize,
    pub create_calls: AtomicUsize,
    next_id: AtomicI64,
}

impl MockProductRepository {
    pub fn with_rows(rows: Vec<Product>) -> Self {
        Self {
            count: rows.len() as u64,
            rows,
            next_id: AtomicI64::new(100),
            ..Default::default()
        }
    }

    pub fn count(mut self, count: u64) -> Self {
        self.count = count;
        self
    }

    pub fn slow_list(mut self, delay: Duration) -> Self {
        self.list_delay = Some(delay);
        self
    }

    pub fn failing_list(mut self) -> Self {
        self.fail_list = true;
        self
    }

    pub fn failing_count(mut self) -> Self {
        self.fail_count = true;
        self
    }

    pub fn store_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
            + self.count_calls.load(Ordering::SeqCst)
            + self.create_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProductRepository for MockProductRepository {
    async fn list_products(&self, _query: &RowsQuery) -> RepoResult<Vec<Product>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.list_delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail_list {
            return Err(RepositoryError::QueryFailed("list failed".to_string()));
        }
        Ok(self.rows.clone())
    }

    async fn count_products(&self, _query: &CountQuery) -> RepoResult<u64> {
        self.count_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_count {
            return Err(RepositoryError::QueryFailed("count failed".to_string()));
        }
        Ok(self.count)
    }

    async fn create_product(&self, _product: &NewProduct) -> RepoResult<i64> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.next_id.fetch_add(1, Ordering::SeqCst))
    }
}

/// Hash cache with call counters and switchable failures.
#[derive(Default)]
pub struct MockCache {
    hashes: RwLock<HashMap<String, HashMap<String, Vec<u8>>>>,
    pub get_calls: AtomicUsize,
    pub set_calls: AtomicUsize,
    pub delete_calls: AtomicUsize,
    pub fail_get: AtomicBool,
    pub fail_set: AtomicBool,
    pub fail_delete: AtomicBool,
    failing_field: Mutex<Option<String>>,
}

impl MockCache {
    /// Makes lookups of one field name fail while other fields keep working.
    pub fn fail_field(&self, field: &str) {
        *self.failing_field.lock().unwrap() = Some(field.to_string());
    }

    pub async fn field(&self, key: &str, field: &str) -> Option<Vec<u8>> {
        self.hashes
            .read()
            .await
            .get(key)
            .and_then(|fields| fields.get(field).cloned())
    }

    pub async fn field_names(&self, key: &str) -> Vec<String> {
        let mut names: Vec<String> = self
            .hashes
            .read()
            .await
            .get(key)
            .map(|fields| fields.keys().cloned().collect())
            .unwrap_or_default();
        names.sort();
        names
    }

    pub async fn is_empty(&self) -> bool {
        self.hashes.read().await.is_empty()
    }

    pub async fn insert(&self, key: &str, field: &str, value: &[u8]) {
        self.hashes
            .write()
            .await
            .entry(key.to_string())
            .or_default()
            .insert(field.to_string(), value.to_vec());
    }

    pub fn calls(&self) -> usize {
        self.get_calls.load(Ordering::SeqCst)
            + self.set_calls.load(Ordering::SeqCst)
            + self.delete_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Cache for MockCache {
    async fn get_field(&self, key: &str, field: &str) -> CacheResult<Option<Vec<u8>>> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        let field_fails = self.failing_field.lock().unwrap().as_deref() == Some(field);
        if field_fails || self.fail_get.load(Ordering::SeqCst) {
            return Err(CacheError::ConnectionFailed("connection refused".to_string()));
        }
        Ok(self.field(key, field).await)
    }

    async fn set_fields(&self, key: &str, fields: &[(String, Vec<u8>)]) -> CacheResult<()> {
        self.set_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_set.load(Ordering::SeqCst) {
            return Err(CacheError::OperationFailed("READONLY".to_string()));
        }
        let mut hashes = self.hashes.write().await;
        let hash = hashes.entry(key.to_string()).or_default();
        for (field, value) in fields {
            hash.insert(field.clone(), value.clone());
        }
        Ok(())
    }

    async fn delete_pattern(&self, pattern: &str) -> CacheResult<u64> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_delete.load(Ordering::SeqCst) {
            return Err(CacheError::OperationFailed("READONLY".to_string()));
        }
        let mut hashes = self.hashes.write().await;
        let before = hashes.len();
        hashes.retain(|key, _| !pattern_matches(pattern, key));
        Ok((before - hashes.len()) as u64)
    }
}
