//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Question text cannot be empty")]
    EmptyQuestion,

    #[error("Invalid difficulty: {0} (must be at least 1)")]
    InvalidDifficulty(i64),

    #[error("Missing field: {0}")]
    MissingField(&'static str),
}
