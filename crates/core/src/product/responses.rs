//! API response types for product listing and creation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Product;
use crate::listing::total_pages;

/// A single product row as returned to API clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub price: i64,
    #[serde(rename = "type")]
    pub product_type: String,
    pub created_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
            product_type: product.product_type.name,
            created_at: product.created_at,
        }
    }
}

/// A page of products plus pagination metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListProductsResponse {
    pub total_data: u64,
    pub total_page: u64,
    pub products: Vec<ProductResponse>,
}

impl ListProductsResponse {
    /// Builds the response for a page of `products` out of `total` matches.
    pub fn new(total: u64, limit: i64, products: Vec<Product>) -> Self {
        Self {
            total_data: total,
            total_page: total_pages(total, limit),
            products: products.into_iter().map(ProductResponse::from).collect(),
        }
    }

    /// The response for a filter that matched nothing.
    pub fn empty() -> Self {
        Self {
            total_data: 0,
            total_page: 0,
            products: Vec::new(),
        }
    }
}

/// Response payload for a created product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateProductResponse {
    pub id: i64,
}
