//! List Questions use case.
//!
//! Serves one page of the full question list, together with the total count
//! and the category mapping the front-end needs to render it.

use crate::error::TriviaError;
use crate::ports::trivia_store::TriviaStore;
use std::sync::Arc;
use tracing::debug;
use trivia_domain::{CategoryMap, Page, QUESTIONS_PER_PAGE, Question, paginate};

/// Output of [`ListQuestionsUseCase`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuestionsOutput {
    /// The requested page, in ascending identifier order.
    pub questions: Vec<Question>,
    /// Number of questions in the store, ignoring pagination.
    pub total_questions: usize,
    pub categories: CategoryMap,
}

/// Use case for listing questions page by page.
pub struct ListQuestionsUseCase {
    store: Arc<dyn TriviaStore>,
}

impl ListQuestionsUseCase {
    pub fn new(store: Arc<dyn TriviaStore>) -> Self {
        Self { store }
    }

    /// Fails with [`TriviaError::NotFound`] when the page is empty.
    pub async fn execute(&self, page: Page) -> Result<ListQuestionsOutput, TriviaError> {
        let all = self.store.questions().await?;
        let questions = paginate(&all, page, QUESTIONS_PER_PAGE).to_vec();

        if questions.is_empty() {
            debug!(
                "Page {} is empty ({} questions stored)",
                page.number(),
                all.len()
            );
            return Err(TriviaError::not_found(format!(
                "page {} of questions",
                page.number()
            )));
        }

        let total_questions = self.store.count_questions().await?;
        let categories = self.store.categories().await?.into_iter().collect();

        Ok(ListQuestionsOutput {
            questions,
            total_questions,
            categories,
        })
    }
}
