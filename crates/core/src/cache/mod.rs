mod error;
mod keys;
mod patterns;
mod serialization;
mod traits;

pub use error::{CacheError, Result};
pub use keys::{listing_key, listing_pattern, COUNT_FIELD, LISTING_PREFIX};
pub use patterns::pattern_matches;
pub use serialization::{
    deserialize_count, deserialize_products, serialize_count, serialize_products,
    SerializationError,
};
pub use traits::Cache;
