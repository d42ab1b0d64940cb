use catalog_core::cache::listing_pattern;
use catalog_core::listing::ListProductsQuery;
use catalog_core::product::{CreateProductRequest, CreateProductResponse};
use catalog_core::storage::build_count_query;

use super::{Path, ProductService, Result, ServiceError};

impl ProductService {
    /// Validates and stores a new product, then drops every cached listing.
    ///
    /// A product whose name matches an existing product's (using the listing
    /// search predicate) is rejected. If the cache flush fails after the
    /// insert committed, the error carries the new product's id.
    pub async fn create_product(
        &self,
        request: &CreateProductRequest,
    ) -> Result<CreateProductResponse> {
        let product = request.validate()?;

        let existing = ListProductsQuery::new()
            .with_search(product.name())
            .normalize()?;
        let matches = self
            .repository
            .count_products(&build_count_query(&existing))
            .await
            .map_err(ServiceError::store(Path::ExistenceCheck))?;
        if matches > 0 {
            return Err(ServiceError::AlreadyExists {
                name: product.name().to_string(),
            });
        }

        let id = self
            .repository
            .create_product(&product)
            .await
            .map_err(ServiceError::store(Path::Insert))?;

        let removed = self
            .cache
            .delete_pattern(&listing_pattern())
            .await
            .map_err(|source| ServiceError::Invalidation { id, source })?;

        tracing::debug!(id, removed, "Product created, listing cache invalidated");

        Ok(CreateProductResponse { id })
    }
}
