//! Delete Question use case.

use crate::error::TriviaError;
use crate::ports::trivia_store::TriviaStore;
use std::sync::Arc;
use tracing::info;
use trivia_domain::QuestionId;

/// Removes a question permanently.
pub struct DeleteQuestionUseCase {
    store: Arc<dyn TriviaStore>,
}

impl DeleteQuestionUseCase {
    pub fn new(store: Arc<dyn TriviaStore>) -> Self {
        Self { store }
    }

    /// Returns the deleted identifier.
    ///
    /// A missing question is [`TriviaError::NotFound`]; a store failure is
    /// unprocessable.
    pub async fn execute(&self, id: QuestionId) -> Result<QuestionId, TriviaError> {
        if self.store.find_question(id).await?.is_none() {
            return Err(TriviaError::not_found(format!("question {id}")));
        }

        // Another request may have removed the row since the lookup.
        if !self.store.delete_question(id).await? {
            return Err(TriviaError::not_found(format!("question {id}")));
        }

        info!("Deleted question {}", id);
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use crate::use_cases::test_support::{MockStore, categories, numbered_questions};

    #[tokio::test]
    async fn test_delete_existing_question() {
        let store = Arc::new(MockStore::new(categories(), numbered_questions(3)));
        let deleted = DeleteQuestionUseCase::new(store.clone())
            .execute(QuestionId::new(2))
            .await
            .unwrap();

        assert_eq!(deleted, QuestionId::new(2));
        assert_eq!(store.ids(), vec![1, 3]);
        assert!(
            store
                .find_question(QuestionId::new(2))
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_repeated_delete_is_not_found() {
        let store = Arc::new(MockStore::new(categories(), numbered_questions(3)));
        let use_case = DeleteQuestionUseCase::new(store);
        use_case.execute(QuestionId::new(1)).await.unwrap();

        let err = use_case.execute(QuestionId::new(1)).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_store_failure_is_unprocessable() {
        let store = Arc::new(
            MockStore::new(categories(), numbered_questions(3)).with_failing_writes(),
        );
        let err = DeleteQuestionUseCase::new(store)
            .execute(QuestionId::new(1))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unprocessable);
    }
}
