//! Questions by Category use case.

use super::QuestionList;
use crate::error::TriviaError;
use crate::ports::trivia_store::TriviaStore;
use std::sync::Arc;
use trivia_domain::CategoryId;

/// Lists every question filed under one category.
pub struct QuestionsByCategoryUseCase {
    store: Arc<dyn TriviaStore>,
}

impl QuestionsByCategoryUseCase {
    pub fn new(store: Arc<dyn TriviaStore>) -> Self {
        Self { store }
    }

    /// A category without questions is unprocessable, not not-found. The
    /// list endpoint reports an empty page as not-found instead; both
    /// behaviors are kept for client compatibility.
    pub async fn execute(&self, category: CategoryId) -> Result<QuestionList, TriviaError> {
        let questions = self.store.questions_in_category(category).await?;
        if questions.is_empty() {
            return Err(TriviaError::unprocessable(format!(
                "category {category} has no questions"
            )));
        }
        Ok(QuestionList::new(questions, Some(category)))
    }
}
