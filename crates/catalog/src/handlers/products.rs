//! Product listing and creation handlers.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use catalog_core::listing::ListProductsQuery;
use catalog_core::product::{CreateProductRequest, ListProductsResponse};

use super::error::error_response;
use crate::state::AppState;

/// Builds a listing query from raw query-string pairs.
///
/// Keys may repeat. `type`/`types` and `sort`/`sorts` are aliases, and
/// unknown keys are ignored. An empty `page` or `limit` counts as absent.
fn parse_listing_query(pairs: Vec<(String, String)>) -> Result<ListProductsQuery, String> {
    let mut query = ListProductsQuery::new();

    for (key, value) in pairs {
        match key.as_str() {
            "search" => query.search = Some(value),
            "type" | "types" => query.types.push(value),
            "sort" | "sorts" => query.pagination.sorts.push(value),
            "page" => query.pagination.page = parse_integer("page", &value)?,
            "limit" => query.pagination.limit = parse_integer("limit", &value)?,
            _ => {}
        }
    }

    Ok(query)
}

fn parse_integer(name: &str, value: &str) -> Result<Option<i64>, String> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    value
        .parse()
        .map(Some)
        .map_err(|_| format!("{value} is not valid {name}"))
}

/// List products (GET /api/products).
pub async fn list_products(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<ListProductsResponse>, Response> {
    let Query(pairs) = query.map_err(|e| {
        error_response(StatusCode::BAD_REQUEST, format!("Failed to parse query: {e}"))
    })?;

    let query = parse_listing_query(pairs)
        .map_err(|message| error_response(StatusCode::BAD_REQUEST, message))?;

    let response = state
        .products
        .list_products(&query)
        .await
        .map_err(IntoResponse::into_response)?;

    Ok(Json(response))
}

/// Create a product (POST /api/products).
pub async fn create_product(
    State(state): State<AppState>,
    payload: Result<Json<CreateProductRequest>, JsonRejection>,
) -> Result<impl IntoResponse, Response> {
    let Json(request) = payload.map_err(|e| {
        error_response(StatusCode::BAD_REQUEST, format!("Failed to parse body: {e}"))
    })?;

    let created = state
        .products
        .create_product(&request)
        .await
        .map_err(IntoResponse::into_response)?;

    tracing::info!(id = created.id, name = %request.name, "Created product");

    Ok((StatusCode::CREATED, Json(created)))
}
