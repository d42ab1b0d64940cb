//! SQLite storage backend implementation.
//!
//! Uses `rusqlite` for synchronous operations and `tokio-rusqlite` for async
//! wrapping. Listing SQL is rendered by `catalog_core::storage`; this module
//! only binds and executes it.

mod conversions;
mod error;
mod functions;
mod repository;
mod schema;

pub use repository::SqliteRepository;
