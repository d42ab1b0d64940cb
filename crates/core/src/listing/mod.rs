//! Listing request normalization.
//!
//! Raw query parameters are validated and canonicalized into a
//! [`NormalizedListingRequest`], from which cache fingerprints, ordering keys,
//! and relational queries are derived.

mod pagination;
mod request;
mod sort;

pub use pagination::total_pages;
pub use request::{
    ListProductsQuery, NormalizedListingRequest, Pagination, PaginationParams, DEFAULT_LIMIT,
    DEFAULT_PAGE,
};
pub use sort::{SortDirection, SortDirective, SortField};
