//! Play Quiz use case.
//!
//! Serves the next question of a quiz round. The round itself lives on the
//! client: each request carries the identifiers already shown, and the
//! server picks a random question outside that set.

use crate::error::TriviaError;
use crate::ports::trivia_store::TriviaStore;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info};
use trivia_domain::{Question, QuestionId, QuizCategory, pick_next_question};

/// Input for the [`PlayQuizUseCase`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayQuizInput {
    /// Questions already shown in this round.
    pub previous_questions: HashSet<QuestionId>,
    /// Pool selector; `None` when the client sent no usable category.
    pub quiz_category: Option<QuizCategory>,
}

impl PlayQuizInput {
    pub fn new(quiz_category: QuizCategory) -> Self {
        Self {
            previous_questions: HashSet::new(),
            quiz_category: Some(quiz_category),
        }
    }

    pub fn with_previous(mut self, ids: impl IntoIterator<Item = i64>) -> Self {
        self.previous_questions
            .extend(ids.into_iter().map(QuestionId::new));
        self
    }
}

/// Use case for drawing the next quiz question.
pub struct PlayQuizUseCase {
    store: Arc<dyn TriviaStore>,
}

impl PlayQuizUseCase {
    pub fn new(store: Arc<dyn TriviaStore>) -> Self {
        Self { store }
    }

    /// Returns `Ok(None)` once every question of the pool has been seen.
    ///
    /// A missing category is unprocessable. A pool that is empty before any
    /// exclusion (e.g. an unknown category) is not-found.
    pub async fn execute(&self, input: PlayQuizInput) -> Result<Option<Question>, TriviaError> {
        let category = input
            .quiz_category
            .ok_or_else(|| TriviaError::unprocessable("quiz category is required"))?;

        let pool = match category {
            QuizCategory::All => self.store.questions().await?,
            QuizCategory::Only(id) => self.store.questions_in_category(id).await?,
        };

        if pool.is_empty() {
            return Err(TriviaError::not_found(format!("quiz pool for {category}")));
        }

        let next = pick_next_question(&pool, &input.previous_questions).cloned();
        match &next {
            Some(q) => debug!("Quiz ({}) drew question {}", category, q.id),
            None => info!(
                "Quiz ({}) exhausted after {} questions",
                category,
                input.previous_questions.len()
            ),
        }
        Ok(next)
    }
}
