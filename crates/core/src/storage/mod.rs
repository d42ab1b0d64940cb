mod error;
mod query;
mod sql;
mod traits;

pub use error::{RepositoryError, Result};
pub use query::{
    build_count_query, build_filter, build_rows_query, CountQuery, FilterExpression, Predicate,
    RowsQuery,
};
pub use sql::{
    escape_like, render_count, render_rows, SqlDialect, SqlParam, SqlStatement,
    SQLITE_LOWER_FUNCTION,
};
pub use traits::ProductRepository;
