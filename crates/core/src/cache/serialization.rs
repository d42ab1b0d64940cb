//! Pure functions for encoding listing cache payloads.
//!
//! Row pages are stored as JSON arrays of [`Product`]. Counts are stored as
//! decimal text so they stay readable with `HGET` from a Redis shell.

use thiserror::Error;

use crate::product::Product;

/// Errors that can occur during cache serialization/deserialization.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SerializationError {
    #[error("Failed to serialize: {0}")]
    SerializeFailed(String),
    #[error("Failed to deserialize: {0}")]
    DeserializeFailed(String),
}

/// Result type for serialization operations.
pub type Result<T> = std::result::Result<T, SerializationError>;

/// Serializes a page of products to JSON bytes.
pub fn serialize_products(products: &[Product]) -> Result<Vec<u8>> {
    serde_json::to_vec(products).map_err(|e| SerializationError::SerializeFailed(e.to_string()))
}

/// Deserializes JSON bytes to a page of products.
pub fn deserialize_products(bytes: &[u8]) -> Result<Vec<Product>> {
    serde_json::from_slice(bytes).map_err(|e| SerializationError::DeserializeFailed(e.to_string()))
}

/// Serializes a total count.
pub fn serialize_count(count: u64) -> Vec<u8> {
    count.to_string().into_bytes()
}

/// Deserializes a total count written by [`serialize_count`].
pub fn deserialize_count(bytes: &[u8]) -> Result<u64> {
    std::str::from_utf8(bytes)
        .map_err(|e| SerializationError::DeserializeFailed(e.to_string()))?
        .trim()
        .parse()
        .map_err(|e: std::num::ParseIntError| SerializationError::DeserializeFailed(e.to_string()))
}
