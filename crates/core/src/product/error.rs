use thiserror::Error;

/// Errors raised while validating inbound listing or creation requests.
///
/// Validation always happens before any cache or store access.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is not valid sort format")]
    InvalidSortFormat(String),
    #[error("{0} is not valid sort field")]
    InvalidSortField(String),
    #[error("{0} is not valid sort direction")]
    InvalidSortDirection(String),
    #[error("name cannot be empty")]
    EmptyName,
    #[error("type cannot be empty")]
    EmptyType,
    #[error("price cannot be negative")]
    NegativePrice,
}
