//! Trivia store port
//!
//! Defines the interface to the relational store holding questions and
//! categories.

use async_trait::async_trait;
use thiserror::Error;
use trivia_domain::{Category, CategoryId, NewQuestion, Question, QuestionId};

/// Errors that can occur during store operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Query failed: {0}")]
    Query(String),

    #[error("Write failed: {0}")]
    Write(String),
}

/// Store of questions and categories
///
/// Every method is one independent round trip. Listing methods return
/// questions in ascending identifier order. Implementations live in the
/// infrastructure layer.
#[async_trait]
pub trait TriviaStore: Send + Sync {
    /// All categories, ordered by identifier.
    async fn categories(&self) -> Result<Vec<Category>, StoreError>;

    /// All questions, ordered by identifier.
    async fn questions(&self) -> Result<Vec<Question>, StoreError>;

    /// Total number of stored questions.
    async fn count_questions(&self) -> Result<usize, StoreError>;

    /// Questions whose category reference equals `category`.
    async fn questions_in_category(
        &self,
        category: CategoryId,
    ) -> Result<Vec<Question>, StoreError>;

    /// Questions whose text contains `term`, ignoring case.
    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, StoreError>;

    /// Look a single question up by identifier.
    async fn find_question(&self, id: QuestionId) -> Result<Option<Question>, StoreError>;

    /// Persist a new question and return it with its assigned identifier.
    async fn insert_question(&self, question: NewQuestion) -> Result<Question, StoreError>;

    /// Delete a question. Returns `false` if no row had that identifier.
    async fn delete_question(&self, id: QuestionId) -> Result<bool, StoreError>;
}
