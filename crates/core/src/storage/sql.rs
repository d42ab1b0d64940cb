//! SQL rendering for [`RowsQuery`] and [`CountQuery`].
//!
//! Every user-supplied value becomes a bind parameter. Column names come only
//! from closed enums.

use super::{CountQuery, FilterExpression, Predicate, RowsQuery};

const ROW_COLUMNS: &str = "p.id, p.name, p.price, p.product_type_name, p.created_at";

/// Unicode-aware lower-casing function the SQLite connection must register.
///
/// SQLite's built-in `LOWER()` folds ASCII only, while search text is folded
/// with full Unicode rules.
pub const SQLITE_LOWER_FUNCTION: &str = "unicode_lower";

/// Placeholder style of the target database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqlDialect {
    /// `?1, ?2, ...`
    Sqlite,
    /// `$1, $2, ...`
    Postgres,
}

/// A bind parameter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlParam {
    Int(i64),
    Text(String),
}

/// Rendered SQL text plus its parameters in placeholder order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlStatement {
    pub sql: String,
    pub params: Vec<SqlParam>,
}

struct Renderer {
    dialect: SqlDialect,
    sql: String,
    params: Vec<SqlParam>,
}

impl Renderer {
    fn new(dialect: SqlDialect, head: &str) -> Self {
        Self {
            dialect,
            sql: head.to_string(),
            params: Vec::new(),
        }
    }

    fn bind(&mut self, param: SqlParam) -> String {
        self.params.push(param);
        let n = self.params.len();
        match self.dialect {
            SqlDialect::Sqlite => format!("?{n}"),
            SqlDialect::Postgres => format!("${n}"),
        }
    }

    fn lower(&self, column: &str) -> String {
        match self.dialect {
            SqlDialect::Sqlite => format!("{SQLITE_LOWER_FUNCTION}({column})"),
            SqlDialect::Postgres => format!("LOWER({column})"),
        }
    }

    fn push_filter(&mut self, filter: &FilterExpression) {
        if filter.is_empty() {
            return;
        }

        let mut clauses = Vec::with_capacity(filter.predicates().len());
        for predicate in filter.predicates() {
            let clause = match predicate {
                Predicate::IdEquals(id) => format!("p.id = {}", self.bind(SqlParam::Int(*id))),
                Predicate::NameContains(text) => {
                    let pattern = format!("%{}%", escape_like(text));
                    let column = self.lower("p.name");
                    format!(
                        "{column} LIKE {} ESCAPE '\\'",
                        self.bind(SqlParam::Text(pattern))
                    )
                }
                Predicate::TypeIn(types) if types.is_empty() => "1 = 0".to_string(),
                Predicate::TypeIn(types) => {
                    let placeholders = types
                        .iter()
                        .map(|t| self.bind(SqlParam::Text(t.clone())))
                        .collect::<Vec<_>>()
                        .join(", ");
                    format!("p.product_type_name IN ({placeholders})")
                }
            };
            clauses.push(clause);
        }

        self.sql.push_str(" WHERE ");
        self.sql.push_str(&clauses.join(" AND "));
    }

    fn finish(self) -> SqlStatement {
        SqlStatement {
            sql: self.sql,
            params: self.params,
        }
    }
}

/// Escapes `LIKE` metacharacters using `\` as the escape character.
pub fn escape_like(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Renders the page query.
pub fn render_rows(query: &RowsQuery, dialect: SqlDialect) -> SqlStatement {
    let mut renderer = Renderer::new(dialect, &format!("SELECT {ROW_COLUMNS} FROM products p"));
    renderer.push_filter(&query.filter);

    let order = query
        .order_by
        .iter()
        .map(|d| format!("{} {}", d.field.column(), d.direction.keyword()))
        .collect::<Vec<_>>()
        .join(", ");
    if !order.is_empty() {
        renderer.sql.push_str(" ORDER BY ");
        renderer.sql.push_str(&order);
    }

    let limit = renderer.bind(SqlParam::Int(query.limit));
    renderer.sql.push_str(&format!(" LIMIT {limit}"));

    if let Some(offset) = query.offset {
        let offset = renderer.bind(SqlParam::Int(offset));
        renderer.sql.push_str(&format!(" OFFSET {offset}"));
    }

    renderer.finish()
}

/// Renders the count query. Ordering and paging do not apply.
pub fn render_count(query: &CountQuery, dialect: SqlDialect) -> SqlStatement {
    let mut renderer = Renderer::new(dialect, "SELECT count(p.id) FROM products p");
    renderer.push_filter(&query.filter);
    renderer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::{ListProductsQuery, NormalizedListingRequest};
    use crate::storage::{build_count_query, build_rows_query};

    fn normalize(query: ListProductsQuery) -> NormalizedListingRequest {
        query.normalize().unwrap()
    }

    #[test]
    fn test_render_unfiltered_rows() {
        let statement = render_rows(
            &build_rows_query(&normalize(ListProductsQuery::new())),
            SqlDialect::Sqlite,
        );
        assert_eq!(
            statement.sql,
            "SELECT p.id, p.name, p.price, p.product_type_name, p.created_at \
             FROM products p ORDER BY p.id ASC LIMIT ?1"
        );
        assert_eq!(statement.params, vec![SqlParam::Int(5)]);
    }

    #[test]
    fn test_render_filtered_rows_sqlite() {
        let request = normalize(
            ListProductsQuery::new()
                .with_search("melon")
                .with_type("sayur,buah")
                .with_sort("price:desc,name:asc")
                .with_page(3)
                .with_limit(2),
        );
        let statement = render_rows(&build_rows_query(&request), SqlDialect::Sqlite);

        assert_eq!(
            statement.sql,
            "SELECT p.id, p.name, p.price, p.product_type_name, p.created_at \
             FROM products p \
             WHERE unicode_lower(p.name) LIKE ?1 ESCAPE '\\' AND p.product_type_name IN (?2, ?3) \
             ORDER BY p.price DESC, p.name ASC LIMIT ?4 OFFSET ?5"
        );
        assert_eq!(
            statement.params,
            vec![
                SqlParam::Text("%melon%".to_string()),
                SqlParam::Text("buah".to_string()),
                SqlParam::Text("sayur".to_string()),
                SqlParam::Int(2),
                SqlParam::Int(4),
            ]
        );
    }

    #[test]
    fn test_render_postgres_placeholders() {
        let request = normalize(ListProductsQuery::new().with_search("7").with_page(2));
        let statement = render_rows(&build_rows_query(&request), SqlDialect::Postgres);

        assert_eq!(
            statement.sql,
            "SELECT p.id, p.name, p.price, p.product_type_name, p.created_at \
             FROM products p WHERE p.id = $1 ORDER BY p.id ASC LIMIT $2 OFFSET $3"
        );
        assert_eq!(
            statement.params,
            vec![SqlParam::Int(7), SqlParam::Int(5), SqlParam::Int(5)]
        );
    }

    #[test]
    fn test_render_count_shares_where_clause() {
        let request = normalize(
            ListProductsQuery::new()
                .with_search("melon")
                .with_type("buah")
                .with_sort("price:desc")
                .with_page(4),
        );
        let rows = render_rows(&build_rows_query(&request), SqlDialect::Sqlite);
        let count = render_count(&build_count_query(&request), SqlDialect::Sqlite);

        assert_eq!(
            count.sql,
            "SELECT count(p.id) FROM products p \
             WHERE unicode_lower(p.name) LIKE ?1 ESCAPE '\\' AND p.product_type_name IN (?2)"
        );
        assert!(rows.sql.contains(&count.sql["SELECT count(p.id) FROM products p".len()..]));
        assert_eq!(count.params, rows.params[..2].to_vec());
    }

    #[test]
    fn test_name_fold_follows_dialect() {
        let request = normalize(ListProductsQuery::new().with_search("Éclair"));
        let query = build_count_query(&request);

        let sqlite = render_count(&query, SqlDialect::Sqlite);
        let postgres = render_count(&query, SqlDialect::Postgres);

        assert_eq!(
            sqlite.sql,
            "SELECT count(p.id) FROM products p \
             WHERE unicode_lower(p.name) LIKE ?1 ESCAPE '\\'"
        );
        assert_eq!(
            postgres.sql,
            "SELECT count(p.id) FROM products p \
             WHERE LOWER(p.name) LIKE $1 ESCAPE '\\'"
        );
        assert_eq!(sqlite.params, vec![SqlParam::Text("%éclair%".to_string())]);
        assert_eq!(sqlite.params, postgres.params);
    }

    #[test]
    fn test_render_unfiltered_count() {
        let statement = render_count(
            &build_count_query(&normalize(ListProductsQuery::new())),
            SqlDialect::Postgres,
        );
        assert_eq!(statement.sql, "SELECT count(p.id) FROM products p");
        assert!(statement.params.is_empty());
    }

    #[test]
    fn test_escape_like() {
        assert_eq!(escape_like("melon"), "melon");
        assert_eq!(escape_like("50%"), "50\\%");
        assert_eq!(escape_like("a_b"), "a\\_b");
        assert_eq!(escape_like("c:\\"), "c:\\\\");
    }

    #[test]
    fn test_search_metacharacters_are_bound_escaped() {
        let request = normalize(ListProductsQuery::new().with_search("100%_off"));
        let statement = render_count(&build_count_query(&request), SqlDialect::Sqlite);
        assert_eq!(
            statement.params,
            vec![SqlParam::Text("%100\\%\\_off%".to_string())]
        );
    }
}
