//! API request types for product creation.

use serde::{Deserialize, Serialize};

use super::{NewProduct, ValidationError};

/// Request payload for creating a new product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub price: i64,
    #[serde(rename = "type")]
    pub product_type: String,
}

impl CreateProductRequest {
    pub fn new(name: impl Into<String>, price: i64, product_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price,
            product_type: product_type.into(),
        }
    }

    /// Validates the request and canonicalizes it for storage.
    ///
    /// Name and type are trimmed, and the type is lower-cased.
    pub fn validate(&self) -> Result<NewProduct, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }

        let type_name = self.product_type.trim();
        if type_name.is_empty() {
            return Err(ValidationError::EmptyType);
        }

        if self.price < 0 {
            return Err(ValidationError::NegativePrice);
        }

        Ok(NewProduct {
            name: name.to_string(),
            price: self.price,
            type_name: type_name.to_lowercase(),
        })
    }
}
