//! Scalar functions registered on every connection.

use rusqlite::functions::FunctionFlags;
use rusqlite::Connection;

use catalog_core::storage::SQLITE_LOWER_FUNCTION;

/// Registers the Unicode-aware lower-casing function used by name search.
///
/// `NULL` stays `NULL`. Everything else is folded with the same rules the
/// search text is folded with, so both sides of `LIKE` agree.
pub fn register_functions(conn: &Connection) -> rusqlite::Result<()> {
    conn.create_scalar_function(
        SQLITE_LOWER_FUNCTION,
        1,
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
        |ctx| {
            let text = ctx.get::<Option<String>>(0)?;
            Ok(text.map(|s| s.to_lowercase()))
        },
    )
}
