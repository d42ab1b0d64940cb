use std::fmt;

use serde::{Deserialize, Serialize};

use crate::product::ValidationError;

/// Columns a listing may be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    Id,
    Name,
    Price,
    CreatedAt,
}

impl SortField {
    /// Looks up an allow-listed field by its public name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "id" => Some(Self::Id),
            "name" => Some(Self::Name),
            "price" => Some(Self::Price),
            "created_at" => Some(Self::CreatedAt),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Price => "price",
            Self::CreatedAt => "created_at",
        }
    }

    /// The qualified column this field orders by.
    pub fn column(&self) -> &'static str {
        match self {
            Self::Id => "p.id",
            Self::Name => "p.name",
            Self::Price => "p.price",
            Self::CreatedAt => "p.created_at",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// One `field:direction` ordering clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortDirective {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortDirective {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Parses a single `field:direction` token.
    ///
    /// Both parts are trimmed and matched case-insensitively. Errors carry the
    /// offending token as given.
    pub fn parse(token: &str) -> Result<Self, ValidationError> {
        let token = token.trim();
        let parts: Vec<&str> = token.split(':').collect();
        let [field, direction] = parts.as_slice() else {
            return Err(ValidationError::InvalidSortFormat(token.to_string()));
        };

        let field = SortField::from_name(&field.trim().to_lowercase())
            .ok_or_else(|| ValidationError::InvalidSortField(token.to_string()))?;

        let direction = match direction.trim().to_lowercase().as_str() {
            "asc" => SortDirection::Asc,
            "desc" => SortDirection::Desc,
            _ => return Err(ValidationError::InvalidSortDirection(token.to_string())),
        };

        Ok(Self { field, direction })
    }
}

impl fmt::Display for SortDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.field.as_str(), self.direction.as_str())
    }
}
