use std::fmt;

use thiserror::Error;

use catalog_core::cache::CacheError;
use catalog_core::product::ValidationError;
use catalog_core::storage::RepositoryError;

/// Which step of an orchestration failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Path {
    Rows,
    Count,
    Populate,
    ExistenceCheck,
    Insert,
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Path::Rows => "rows",
            Path::Count => "count",
            Path::Populate => "populate",
            Path::ExistenceCheck => "existence check",
            Path::Insert => "insert",
        };
        f.write_str(name)
    }
}

/// Errors returned by [`ProductService`](super::ProductService).
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("{name} already exist")]
    AlreadyExists { name: String },

    #[error("cache {path} failed: {source}")]
    Cache { path: Path, source: CacheError },

    #[error("store {path} failed: {source}")]
    Store {
        path: Path,
        source: RepositoryError,
    },

    /// The product was committed but listings may still be served stale.
    #[error("product {id} created but cache invalidation failed: {source}")]
    Invalidation { id: i64, source: CacheError },
}

impl ServiceError {
    pub(super) fn cache(path: Path) -> impl FnOnce(CacheError) -> Self {
        move |source| Self::Cache { path, source }
    }

    pub(super) fn store(path: Path) -> impl FnOnce(RepositoryError) -> Self {
        move |source| Self::Store { path, source }
    }
}

/// Result type for service operations.
pub type Result<T> = std::result::Result<T, ServiceError>;
