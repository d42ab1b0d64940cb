//! Relational query construction for product listings.
//!
//! The row query and the count query are both built around the output of
//! [`build_filter`], so a page and its total always describe the same rows.

use std::collections::BTreeSet;

use crate::listing::{NormalizedListingRequest, SortDirection, SortDirective, SortField};

/// A single filter predicate. Predicates are combined with `AND`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    IdEquals(i64),
    /// Case-insensitive substring match on the product name.
    NameContains(String),
    TypeIn(BTreeSet<String>),
}

/// The conjunction of predicates a listing filters by.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterExpression {
    predicates: Vec<Predicate>,
}

impl FilterExpression {
    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }
}

/// One page of product rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowsQuery {
    pub filter: FilterExpression,
    /// Never empty.
    pub order_by: Vec<SortDirective>,
    pub limit: i64,
    pub offset: Option<i64>,
}

/// The number of rows a filter matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountQuery {
    pub filter: FilterExpression,
}

/// Builds the filter shared by the row and count queries.
///
/// Search text that parses as an integer filters by ID; any other non-empty
/// search filters by name.
pub fn build_filter(request: &NormalizedListingRequest) -> FilterExpression {
    let mut predicates = Vec::new();

    let search = request.search();
    if !search.is_empty() {
        match search.parse::<i64>() {
            Ok(id) => predicates.push(Predicate::IdEquals(id)),
            Err(_) => predicates.push(Predicate::NameContains(search.to_lowercase())),
        }
    }

    if !request.types().is_empty() {
        predicates.push(Predicate::TypeIn(request.types().clone()));
    }

    FilterExpression { predicates }
}

/// Builds the query for the requested page, ordered by the requested sort or
/// by ascending ID when none was given.
pub fn build_rows_query(request: &NormalizedListingRequest) -> RowsQuery {
    let order_by = if request.sort().is_empty() {
        vec![SortDirective::new(SortField::Id, SortDirection::Asc)]
    } else {
        request.sort().to_vec()
    };

    RowsQuery {
        filter: build_filter(request),
        order_by,
        limit: request.limit(),
        offset: request.offset(),
    }
}

pub fn build_count_query(request: &NormalizedListingRequest) -> CountQuery {
    CountQuery {
        filter: build_filter(request),
    }
}
