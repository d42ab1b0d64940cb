use async_trait::async_trait;

use super::Result;

/// Hash-per-key cache capability used by the listing pipeline.
///
/// Each key holds a set of named fields. Lookups distinguish a miss
/// (`Ok(None)`) from a backend failure (`Err`).
#[async_trait]
pub trait Cache: Send + Sync {
    /// Gets a single field of a hash.
    async fn get_field(&self, key: &str, field: &str) -> Result<Option<Vec<u8>>>;

    /// Writes several fields of a hash in one operation.
    ///
    /// Implementations must apply either all fields or none.
    async fn set_fields(&self, key: &str, fields: &[(String, Vec<u8>)]) -> Result<()>;

    /// Deletes every hash whose key matches a glob pattern (e.g., "product:*").
    ///
    /// Returns the number of hashes removed.
    async fn delete_pattern(&self, pattern: &str) -> Result<u64>;
}
