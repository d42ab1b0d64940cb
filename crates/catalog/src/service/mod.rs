//! Listing and write orchestration.
//!
//! [`ProductService`] is the only component that writes to the product store
//! or to the listing cache namespace. Handlers call it; it calls the
//! [`Cache`] and [`ProductRepository`] capabilities.

use std::sync::Arc;

use catalog_core::cache::Cache;
use catalog_core::storage::ProductRepository;

mod create;
mod error;
mod listing;
#[cfg(test)]
mod testing;

pub use error::{Path, Result, ServiceError};

/// Cache-aside product service.
#[derive(Clone)]
pub struct ProductService {
    repository: Arc<dyn ProductRepository>,
    cache: Arc<dyn Cache>,
}

impl ProductService {
    pub fn new(repository: Arc<dyn ProductRepository>, cache: Arc<dyn Cache>) -> Self {
        Self { repository, cache }
    }
}
