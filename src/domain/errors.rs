// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{0}")]
    InvalidSort(String),
    #[error("{0}")]
    InvalidFilter(String),
    #[error("validation failed: {}", .0.join(", "))]
    ValidationFailed(Vec<String>),
    #[error("persistence error: {0}")]
    Persistence(String),
}

impl DomainError {
    /// Messages carried by a validation failure, empty for every other variant.
    pub fn messages(&self) -> &[String] {
        match self {
            Self::ValidationFailed(messages) => messages,
            _ => &[],
        }
    }
}
