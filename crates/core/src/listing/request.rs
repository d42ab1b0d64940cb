use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::{SortDirective, SortField};
use crate::product::ValidationError;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 5;

/// Raw sort and paging parameters shared by listing requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationParams {
    /// `field:direction` tokens. Each value may itself be comma-joined.
    #[serde(default)]
    pub sorts: Vec<String>,
    #[serde(default)]
    pub page: Option<i64>,
    #[serde(default)]
    pub limit: Option<i64>,
}

/// Validated sort and paging parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    pub sort: Vec<SortDirective>,
    pub page: i64,
    pub limit: i64,
}

impl PaginationParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a sort token (or a comma-joined list of them).
    pub fn with_sort(mut self, sort: impl Into<String>) -> Self {
        self.sorts.push(sort.into());
        self
    }

    pub fn with_page(mut self, page: i64) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Validates sort tokens and applies paging defaults.
    ///
    /// Pages below 1 become 1 and limits below 1 become the default limit.
    /// Repeated fields keep their first direction.
    pub fn validate(&self) -> Result<Pagination, ValidationError> {
        let page = self.page.filter(|p| *p >= 1).unwrap_or(DEFAULT_PAGE);
        let limit = self.limit.filter(|l| *l >= 1).unwrap_or(DEFAULT_LIMIT);

        let mut seen: Vec<SortField> = Vec::new();
        let mut sort = Vec::new();
        for token in split_joined(&self.sorts) {
            let directive = SortDirective::parse(token)?;
            if !seen.contains(&directive.field) {
                seen.push(directive.field);
                sort.push(directive);
            }
        }

        Ok(Pagination { sort, page, limit })
    }
}

/// Raw listing request as decoded from the transport layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListProductsQuery {
    #[serde(default)]
    pub search: Option<String>,
    /// Type names. Each value may itself be comma-joined.
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(flatten)]
    pub pagination: PaginationParams,
}

impl ListProductsQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_type(mut self, product_type: impl Into<String>) -> Self {
        self.types.push(product_type.into());
        self
    }

    pub fn with_sort(mut self, sort: impl Into<String>) -> Self {
        self.pagination = self.pagination.with_sort(sort);
        self
    }

    pub fn with_page(mut self, page: i64) -> Self {
        self.pagination = self.pagination.with_page(page);
        self
    }

    pub fn with_limit(mut self, limit: i64) -> Self {
        self.pagination = self.pagination.with_limit(limit);
        self
    }

    /// Validates and canonicalizes the request.
    ///
    /// Performs no I/O. The result is what every cache key and query is
    /// derived from.
    pub fn normalize(&self) -> Result<NormalizedListingRequest, ValidationError> {
        let Pagination { sort, page, limit } = self.pagination.validate()?;

        let search = self
            .search
            .as_deref()
            .map(str::trim)
            .unwrap_or_default()
            .to_string();

        let types = split_joined(&self.types)
            .map(str::to_lowercase)
            .collect::<BTreeSet<_>>();

        Ok(NormalizedListingRequest {
            search,
            types,
            sort,
            page,
            limit,
        })
    }
}

/// A validated, canonical listing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedListingRequest {
    search: String,
    types: BTreeSet<String>,
    sort: Vec<SortDirective>,
    page: i64,
    limit: i64,
}

impl NormalizedListingRequest {
    /// Trimmed search text. Empty means no search filter.
    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn types(&self) -> &BTreeSet<String> {
        &self.types
    }

    pub fn sort(&self) -> &[SortDirective] {
        &self.sort
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    /// Rows to skip before this page, or `None` on the first page.
    pub fn offset(&self) -> Option<i64> {
        (self.page > 1).then(|| self.limit.saturating_mul(self.page - 1))
    }

    /// Identity of the filter and paging window, independent of ordering.
    ///
    /// Built from an explicit field list so that it stays stable as the
    /// request type evolves. JSON object keys are emitted in sorted order.
    pub fn fingerprint(&self) -> String {
        serde_json::json!({
            "limit": self.limit,
            "page": self.page,
            "search": self.search,
            "types": self.types,
        })
        .to_string()
    }

    /// Distinguishes cached pages that share a fingerprint but differ in sort.
    pub fn ordering_key(&self) -> String {
        let sort = self
            .sort
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");
        format!("{}:{}:{}", self.limit, self.page, sort)
    }
}

fn split_joined(values: &[String]) -> impl Iterator<Item = &str> {
    values
        .iter()
        .flat_map(|value| value.split(','))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}
