//! SQLite schema definitions and SQL query constants.
//!
//! Read queries are rendered at runtime by `catalog_core::storage`. Only the
//! schema and the write statements live here.

/// SQL statement to create all tables.
pub const CREATE_TABLES: &str = r#"
PRAGMA foreign_keys = ON;

-- Product types, created implicitly by product inserts
CREATE TABLE IF NOT EXISTS product_types (
    name TEXT PRIMARY KEY,
    created_at TEXT NOT NULL
);

-- Products table
CREATE TABLE IF NOT EXISTS products (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    price INTEGER NOT NULL CHECK (price >= 0),
    product_type_name TEXT NOT NULL,
    created_at TEXT NOT NULL,
    FOREIGN KEY (product_type_name) REFERENCES product_types(name)
);

-- Indexes for filtered and sorted listings
CREATE INDEX IF NOT EXISTS idx_products_product_type_name ON products(product_type_name);
CREATE INDEX IF NOT EXISTS idx_products_price ON products(price);
CREATE INDEX IF NOT EXISTS idx_products_created_at ON products(created_at);
"#;

/// Registers a product type, leaving an existing one untouched.
pub const INSERT_PRODUCT_TYPE: &str = r#"
INSERT INTO product_types (name, created_at)
VALUES (?1, ?2)
ON CONFLICT(name) DO NOTHING
"#;

pub const INSERT_PRODUCT: &str = r#"
INSERT INTO products (name, price, product_type_name, created_at)
VALUES (?1, ?2, ?3, ?4)
RETURNING id
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_tables_contains_all_tables() {
        assert!(CREATE_TABLES.contains("CREATE TABLE IF NOT EXISTS product_types"));
        assert!(CREATE_TABLES.contains("CREATE TABLE IF NOT EXISTS products"));
    }

    #[test]
    fn test_products_columns_match_listing_projection() {
        for column in ["id", "name", "price", "product_type_name", "created_at"] {
            assert!(CREATE_TABLES.contains(&format!("    {column} ")));
        }
    }

    #[test]
    fn test_type_insert_is_idempotent() {
        assert!(INSERT_PRODUCT_TYPE.contains("ON CONFLICT(name) DO NOTHING"));
    }

    #[test]
    fn test_product_insert_returns_id() {
        assert!(INSERT_PRODUCT.contains("RETURNING id"));
    }
}
