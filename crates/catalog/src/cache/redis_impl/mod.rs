//! Redis cache backend implementation.
//!
//! Listing hashes live in Redis so several service instances share one cache.

mod cache;
mod error;

pub use cache::RedisCache;
