//! Search Questions use case.

use super::QuestionList;
use crate::error::TriviaError;
use crate::ports::trivia_store::TriviaStore;
use std::sync::Arc;
use tracing::debug;

/// Case-insensitive substring search over question text.
pub struct SearchQuestionsUseCase {
    store: Arc<dyn TriviaStore>,
}

impl SearchQuestionsUseCase {
    pub fn new(store: Arc<dyn TriviaStore>) -> Self {
        Self { store }
    }

    /// Results are unpaginated; zero matches is a valid empty list.
    pub async fn execute(&self, term: &str) -> Result<QuestionList, TriviaError> {
        let questions = self.store.search_questions(term).await?;
        debug!("Search {:?} matched {} questions", term, questions.len());
        Ok(QuestionList::new(questions, None))
    }
}
