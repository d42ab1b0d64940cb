use catalog_core::cache::{
    deserialize_count, deserialize_products, listing_key, serialize_count, serialize_products,
    CacheError, COUNT_FIELD,
};
use catalog_core::listing::ListProductsQuery;
use catalog_core::product::{ListProductsResponse, Product};
use catalog_core::storage::{build_count_query, build_rows_query};

use super::{Path, ProductService, Result, ServiceError};

impl ProductService {
    /// Lists one page of products, serving from the cache where possible.
    ///
    /// The rows field and the count field are looked up before any store
    /// query. Whatever had to be fetched is written back to the cache in a
    /// single operation before the response is returned.
    pub async fn list_products(&self, query: &ListProductsQuery) -> Result<ListProductsResponse> {
        let request = query.normalize()?;
        let key = listing_key(&request.fingerprint());
        let ordering_key = request.ordering_key();

        let cached_rows = self.cached_rows(&key, &ordering_key).await?;
        let cached_count = self.cached_count(&key).await?;

        let mut fresh: Vec<(String, Vec<u8>)> = Vec::with_capacity(2);

        let total = match cached_count {
            Some(total) => total,
            None => {
                let total = self
                    .repository
                    .count_products(&build_count_query(&request))
                    .await
                    .map_err(ServiceError::store(Path::Count))?;
                fresh.push((COUNT_FIELD.to_string(), serialize_count(total)));
                total
            }
        };

        let products = match cached_rows {
            Some(_) if total == 0 => Vec::new(),
            Some(products) => products,
            // Nothing matches, so the row query can be skipped.
            None if total == 0 => {
                if !fresh.is_empty() {
                    fresh.push((ordering_key, encode_rows(&[])?));
                }
                Vec::new()
            }
            None => {
                let products = self
                    .repository
                    .list_products(&build_rows_query(&request))
                    .await
                    .map_err(ServiceError::store(Path::Rows))?;
                fresh.push((ordering_key, encode_rows(&products)?));
                products
            }
        };

        if !fresh.is_empty() {
            self.cache
                .set_fields(&key, &fresh)
                .await
                .map_err(ServiceError::cache(Path::Populate))?;
            tracing::debug!(key = %key, fields = fresh.len(), "Repopulated listing cache");
        }

        if total == 0 {
            return Ok(ListProductsResponse::empty());
        }

        Ok(ListProductsResponse::new(total, request.limit(), products))
    }

    async fn cached_rows(&self, key: &str, field: &str) -> Result<Option<Vec<Product>>> {
        let Some(bytes) = self
            .cache
            .get_field(key, field)
            .await
            .map_err(ServiceError::cache(Path::Rows))?
        else {
            tracing::trace!(key = %key, field = %field, "Cache miss for listing rows");
            return Ok(None);
        };

        match deserialize_products(&bytes) {
            Ok(products) => {
                tracing::trace!(key = %key, field = %field, "Cache hit for listing rows");
                Ok(Some(products))
            }
            Err(e) => {
                tracing::warn!(key = %key, field = %field, error = %e, "Failed to decode cached listing rows");
                Ok(None)
            }
        }
    }

    async fn cached_count(&self, key: &str) -> Result<Option<u64>> {
        let Some(bytes) = self
            .cache
            .get_field(key, COUNT_FIELD)
            .await
            .map_err(ServiceError::cache(Path::Count))?
        else {
            tracing::trace!(key = %key, "Cache miss for listing count");
            return Ok(None);
        };

        match deserialize_count(&bytes) {
            Ok(count) => {
                tracing::trace!(key = %key, count, "Cache hit for listing count");
                Ok(Some(count))
            }
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "Failed to decode cached listing count");
                Ok(None)
            }
        }
    }
}

fn encode_rows(products: &[Product]) -> Result<Vec<u8>> {
    serialize_products(products).map_err(|e| ServiceError::Cache {
        path: Path::Populate,
        source: CacheError::Serialization(e.to_string()),
    })
}
