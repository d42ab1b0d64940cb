//! Storage backend implementations.
//!
//! This module provides the SQLite implementation of the
//! `catalog_core::storage::ProductRepository` trait.

pub mod sqlite;

pub use sqlite::SqliteRepository;
