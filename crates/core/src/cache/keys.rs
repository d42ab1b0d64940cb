/// Namespace shared by every listing hash.
pub const LISTING_PREFIX: &str = "product:";

/// Hash field holding the total count for a fingerprint.
pub const COUNT_FIELD: &str = "count";

/// Returns the hash key for a listing fingerprint.
pub fn listing_key(fingerprint: &str) -> String {
    format!("{}{}", LISTING_PREFIX, fingerprint)
}

/// Returns the pattern matching every listing hash.
pub fn listing_pattern() -> String {
    format!("{}*", LISTING_PREFIX)
}
