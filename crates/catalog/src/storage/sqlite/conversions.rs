//! Row and parameter conversions between SQLite and domain types.

use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{types::Value, Row};

use catalog_core::product::{Product, ProductType};
use catalog_core::storage::SqlParam;

/// Converts a row of the listing projection into a [`Product`].
///
/// Column order: id, name, price, product_type_name, created_at.
pub fn row_to_product(row: &Row) -> rusqlite::Result<Product> {
    let id: i64 = row.get(0)?;
    let name: String = row.get(1)?;
    let price: i64 = row.get(2)?;
    let product_type: String = row.get(3)?;
    let created_at: String = row.get(4)?;

    Ok(Product {
        id,
        name,
        price,
        product_type: ProductType::new(product_type),
        created_at: parse_datetime(4, &created_at)?,
    })
}

/// Converts a rendered bind parameter into an owned SQLite value.
pub fn to_sql_value(param: &SqlParam) -> Value {
    match param {
        SqlParam::Int(i) => Value::Integer(*i),
        SqlParam::Text(s) => Value::Text(s.clone()),
    }
}

fn parse_datetime(column: usize, s: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(column, rusqlite::types::Type::Text, Box::new(e))
        })
}

/// Formats a timestamp for storage.
///
/// Fixed-width, so text order matches time order.
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Nanos, true)
}
