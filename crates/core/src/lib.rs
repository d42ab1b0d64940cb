//! Functional core for the catalog service.
//!
//! Everything in this crate is pure: request normalization, cache key
//! derivation, query construction and SQL rendering, payload serialization,
//! and the capability traits the service implements at its edges.

pub mod cache;
pub mod listing;
pub mod product;
pub mod storage;
