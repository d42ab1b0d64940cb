/// Number of pages needed to show `total` rows at `limit` rows per page.
///
/// A non-positive limit is treated as one row per page.
pub fn total_pages(total: u64, limit: i64) -> u64 {
    let limit = u64::try_from(limit).unwrap_or(1).max(1);
    total.div_ceil(limit)
}
