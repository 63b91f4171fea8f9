//! Create Question use case.

use crate::error::TriviaError;
use crate::ports::trivia_store::TriviaStore;
use std::sync::Arc;
use tracing::info;
use trivia_domain::{CategoryId, DomainError, NewQuestion, Question};

/// Raw creation input as received from a client.
///
/// Fields are optional because clients may omit them; validation happens in
/// [`CreateQuestionUseCase::execute`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateQuestionInput {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<i64>,
    pub difficulty: Option<i64>,
}

impl CreateQuestionInput {
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
        category: i64,
        difficulty: i64,
    ) -> Self {
        Self {
            question: Some(question.into()),
            answer: Some(answer.into()),
            category: Some(category),
            difficulty: Some(difficulty),
        }
    }

    fn validate(self) -> Result<NewQuestion, DomainError> {
        let question = self.question.ok_or(DomainError::MissingField("question"))?;
        let category = self.category.ok_or(DomainError::MissingField("category"))?;
        let difficulty = self
            .difficulty
            .ok_or(DomainError::MissingField("difficulty"))?;
        NewQuestion::try_new(
            question,
            self.answer.unwrap_or_default(),
            CategoryId::new(category),
            difficulty,
        )
    }
}

/// Use case for adding a question to the store.
pub struct CreateQuestionUseCase {
    store: Arc<dyn TriviaStore>,
}

impl CreateQuestionUseCase {
    pub fn new(store: Arc<dyn TriviaStore>) -> Self {
        Self { store }
    }

    /// Any validation or insert failure is unprocessable.
    pub async fn execute(&self, input: CreateQuestionInput) -> Result<Question, TriviaError> {
        let new = input.validate()?;
        let stored = self.store.insert_question(new).await?;
        info!(
            "Created question {} in category {}",
            stored.id, stored.category
        );
        Ok(stored)
    }
}
