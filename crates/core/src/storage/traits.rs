use async_trait::async_trait;

use crate::product::{NewProduct, Product};

use super::{CountQuery, Result, RowsQuery};

/// Repository for product reads and writes.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Gets one page of products.
    async fn list_products(&self, query: &RowsQuery) -> Result<Vec<Product>>;

    /// Counts every product matching the filter.
    async fn count_products(&self, query: &CountQuery) -> Result<u64>;

    /// Inserts a product, creating its type if needed, and returns the new ID.
    ///
    /// The type upsert and the product insert commit atomically.
    async fn create_product(&self, product: &NewProduct) -> Result<i64>;
}
