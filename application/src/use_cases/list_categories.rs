//! List Categories use case.

use crate::error::TriviaError;
use crate::ports::trivia_store::TriviaStore;
use std::sync::Arc;
use trivia_domain::CategoryMap;

/// Returns every category as an identifier → label mapping.
pub struct ListCategoriesUseCase {
    store: Arc<dyn TriviaStore>,
}

impl ListCategoriesUseCase {
    pub fn new(store: Arc<dyn TriviaStore>) -> Self {
        Self { store }
    }

    /// An empty mapping is a valid result.
    pub async fn execute(&self) -> Result<CategoryMap, TriviaError> {
        let categories = self.store.categories().await?;
        Ok(categories.into_iter().collect())
    }
}
