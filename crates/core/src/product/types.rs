use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A catalog product as stored in the relational store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    /// Price in minor units. Never negative.
    pub price: i64,
    pub product_type: ProductType,
    pub created_at: DateTime<Utc>,
}

/// A product type. Types are created implicitly by product creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductType {
    pub name: String,
}

impl ProductType {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A validated product ready to be inserted.
///
/// Only [`CreateProductRequest::validate`](super::CreateProductRequest::validate)
/// produces values of this type, so the name and type are always trimmed and
/// non-empty, the type is lower-cased, and the price is non-negative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub(super) name: String,
    pub(super) price: i64,
    pub(super) type_name: String,
}

impl NewProduct {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> i64 {
        self.price
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }
}
