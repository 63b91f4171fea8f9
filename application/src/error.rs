//! Use case error taxonomy.
//!
//! Use cases never fail on an empty result by themselves; they report either
//! [`ErrorKind::NotFound`] or [`ErrorKind::Unprocessable`] and leave the
//! status code to the HTTP layer.

use crate::ports::trivia_store::StoreError;
use thiserror::Error;
use trivia_domain::DomainError;

/// Coarse classification of a [`TriviaError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Nothing matched the request.
    NotFound,
    /// The request was understood but the operation could not complete.
    Unprocessable,
}

/// Errors returned by the use cases
#[derive(Error, Debug)]
pub enum TriviaError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unprocessable: {0}")]
    Unprocessable(String),

    #[error("Invalid input: {0}")]
    Invalid(#[from] DomainError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl TriviaError {
    pub fn not_found(what: impl Into<String>) -> Self {
        TriviaError::NotFound(what.into())
    }

    pub fn unprocessable(why: impl Into<String>) -> Self {
        TriviaError::Unprocessable(why.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            TriviaError::NotFound(_) => ErrorKind::NotFound,
            TriviaError::Unprocessable(_) | TriviaError::Invalid(_) | TriviaError::Store(_) => {
                ErrorKind::Unprocessable
            }
        }
    }
}
