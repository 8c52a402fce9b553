//! Domain Errors

use thiserror::Error;

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Not found: item {id} in list '{list}'")]
    NotFound { list: String, id: String },
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Malformed value under '{key}': {reason}")]
    Malformed { key: String, reason: String },
    #[error("Storage error: {0}")]
    Storage(String),
}

impl DomainError {
    pub fn not_found(list: &str, id: impl ToString) -> Self {
        DomainError::NotFound {
            list: list.to_string(),
            id: id.to_string(),
        }
    }
}
