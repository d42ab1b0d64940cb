//! Glob matching for cache keys.
//!
//! Only `*` is special; it matches any run of characters, including none.
//! This mirrors the subset of Redis `MATCH` syntax the service relies on.

/// Checks if a cache key matches a glob pattern.
///
/// # Examples
///
/// ```
/// use catalog_core::cache::pattern_matches;
///
/// assert!(pattern_matches("product:*", r#"product:{"limit":5}"#));
/// assert!(pattern_matches("product:*:count", "product:abc:count"));
/// assert!(!pattern_matches("product:*", "session:1"));
/// ```
pub fn pattern_matches(pattern: &str, key: &str) -> bool {
    let mut segments = pattern.split('*');
    // split always yields at least one segment
    let head = segments.next().unwrap_or_default();
    let Some(mut rest) = key.strip_prefix(head) else {
        return false;
    };

    let tail: Vec<&str> = segments.collect();
    let Some((last, middle)) = tail.split_last() else {
        // no wildcard: the head is the whole pattern
        return rest.is_empty();
    };

    for segment in middle {
        match rest.find(segment) {
            Some(pos) => rest = &rest[pos + segment.len()..],
            None => return false,
        }
    }

    rest.ends_with(last)
}
