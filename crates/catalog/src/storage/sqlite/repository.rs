//! SQLite repository implementation.
//!
//! Implements `catalog_core::storage::ProductRepository` using SQLite.

use async_trait::async_trait;
use chrono::Utc;
use rusqlite::{params, params_from_iter};
use tokio_rusqlite::Connection;

use catalog_core::product::{NewProduct, Product};
use catalog_core::storage::{
    render_count, render_rows, CountQuery, ProductRepository, RepositoryError, Result, RowsQuery,
    SqlDialect, SqlStatement,
};

use super::conversions::{format_datetime, row_to_product, to_sql_value};
use super::error::map_tokio_rusqlite_error;
use super::functions::register_functions;
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based product repository.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Creates a new repository with a file-based database.
    ///
    /// The database file will be created if it doesn't exist.
    /// Schema tables and search functions are set up automatically.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_connection(&conn).await?;

        Ok(Self { conn })
    }

    /// Creates a new repository with an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_connection(&conn).await?;

        Ok(Self { conn })
    }

    async fn init_connection(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            register_functions(conn).map_err(wrap_err)?;
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }
}

#[async_trait]
impl ProductRepository for SqliteRepository {
    async fn list_products(&self, query: &RowsQuery) -> Result<Vec<Product>> {
        let SqlStatement { sql, params } = render_rows(query, SqlDialect::Sqlite);
        let values: Vec<_> = params.iter().map(to_sql_value).collect();

        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(&sql).map_err(wrap_err)?;
                let rows = stmt
                    .query_map(params_from_iter(values.iter()), row_to_product)
                    .map_err(wrap_err)?;

                let mut products = Vec::new();
                for row_result in rows {
                    products.push(row_result.map_err(wrap_err)?);
                }
                Ok(products)
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn count_products(&self, query: &CountQuery) -> Result<u64> {
        let SqlStatement { sql, params } = render_count(query, SqlDialect::Sqlite);
        let values: Vec<_> = params.iter().map(to_sql_value).collect();

        let count: i64 = self
            .conn
            .call(move |conn| {
                let mut stmt = conn.prepare(&sql).map_err(wrap_err)?;
                let count = stmt
                    .query_row(params_from_iter(values.iter()), |row| row.get::<_, i64>(0))
                    .map_err(wrap_err)?;
                Ok(count)
            })
            .await
            .map_err(map_tokio_rusqlite_error)?;

        u64::try_from(count)
            .map_err(|_| RepositoryError::InvalidData(format!("negative count: {count}")))
    }

    async fn create_product(&self, product: &NewProduct) -> Result<i64> {
        let name = product.name().to_string();
        let price = product.price();
        let type_name = product.type_name().to_string();
        let created_at = format_datetime(&Utc::now());

        self.conn
            .call(move |conn| {
                // Dropping the transaction without commit rolls back both statements.
                let tx = conn.transaction().map_err(wrap_err)?;

                tx.execute(schema::INSERT_PRODUCT_TYPE, params![type_name, created_at])
                    .map_err(wrap_err)?;

                let id = tx
                    .query_row(
                        schema::INSERT_PRODUCT,
                        params![name, price, type_name, created_at],
                        |row| row.get::<_, i64>(0),
                    )
                    .map_err(wrap_err)?;

                tx.commit().map_err(wrap_err)?;
                Ok(id)
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }
}
