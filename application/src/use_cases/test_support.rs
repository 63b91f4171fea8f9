//! Store doubles shared by the use case tests.

use crate::ports::trivia_store::{StoreError, TriviaStore};
use async_trait::async_trait;
use std::sync::Mutex;
use trivia_domain::{Category, CategoryId, NewQuestion, Question, QuestionId};

/// Vec-backed store that mimics the SQLite adapter's ordering rules.
pub(crate) struct MockStore {
    categories: Vec<Category>,
    questions: Mutex<Vec<Question>>,
    fail_writes: bool,
}

impl MockStore {
    pub(crate) fn new(categories: Vec<Category>, questions: Vec<Question>) -> Self {
        let mut questions = questions;
        questions.sort_by_key(|q| q.id);
        Self {
            categories,
            questions: Mutex::new(questions),
            fail_writes: false,
        }
    }

    pub(crate) fn empty() -> Self {
        Self::new(vec![], vec![])
    }

    pub(crate) fn with_failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub(crate) fn ids(&self) -> Vec<i64> {
        self.questions
            .lock()
            .unwrap()
            .iter()
            .map(|q| q.id.value())
            .collect()
    }
}

pub(crate) fn question(id: i64, text: &str, category: i64) -> Question {
    Question {
        id: QuestionId::new(id),
        question: text.to_string(),
        answer: format!("answer {id}"),
        difficulty: 2,
        category: CategoryId::new(category),
    }
}

pub(crate) fn categories() -> Vec<Category> {
    vec![
        Category::new(1, "Science"),
        Category::new(2, "Art"),
        Category::new(3, "Geography"),
    ]
}

/// `count` questions numbered from 1, spread over categories 1 and 2.
pub(crate) fn numbered_questions(count: i64) -> Vec<Question> {
    (1..=count)
        .map(|id| question(id, &format!("Question number {id}"), 1 + id % 2))
        .collect()
}

#[async_trait]
impl TriviaStore for MockStore {
    async fn categories(&self) -> Result<Vec<Category>, StoreError> {
        let mut categories = self.categories.clone();
        categories.sort_by_key(|c| c.id);
        Ok(categories)
    }

    async fn questions(&self) -> Result<Vec<Question>, StoreError> {
        Ok(self.questions.lock().unwrap().clone())
    }

    async fn count_questions(&self) -> Result<usize, StoreError> {
        Ok(self.questions.lock().unwrap().len())
    }

    async fn questions_in_category(
        &self,
        category: CategoryId,
    ) -> Result<Vec<Question>, StoreError> {
        Ok(self
            .questions
            .lock()
            .unwrap()
            .iter()
            .filter(|q| q.category == category)
            .cloned()
            .collect())
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, StoreError> {
        Ok(self
            .questions
            .lock()
            .unwrap()
            .iter()
            .filter(|q| q.matches_term(term))
            .cloned()
            .collect())
    }

    async fn find_question(&self, id: QuestionId) -> Result<Option<Question>, StoreError> {
        Ok(self
            .questions
            .lock()
            .unwrap()
            .iter()
            .find(|q| q.id == id)
            .cloned())
    }

    async fn insert_question(&self, question: NewQuestion) -> Result<Question, StoreError> {
        if self.fail_writes {
            return Err(StoreError::Write("read-only store".to_string()));
        }
        let mut questions = self.questions.lock().unwrap();
        let next_id = questions.iter().map(|q| q.id.value()).max().unwrap_or(0) + 1;
        let stored = Question::from_new(QuestionId::new(next_id), question);
        questions.push(stored.clone());
        Ok(stored)
    }

    async fn delete_question(&self, id: QuestionId) -> Result<bool, StoreError> {
        if self.fail_writes {
            return Err(StoreError::Write("read-only store".to_string()));
        }
        let mut questions = self.questions.lock().unwrap();
        let before = questions.len();
        questions.retain(|q| q.id != id);
        Ok(questions.len() != before)
    }
}

/// Store whose every call fails, for error-path tests.
pub(crate) struct BrokenStore;

fn broken() -> StoreError {
    StoreError::Unavailable("connection refused".to_string())
}

#[async_trait]
impl TriviaStore for BrokenStore {
    async fn categories(&self) -> Result<Vec<Category>, StoreError> {
        Err(broken())
    }

    async fn questions(&self) -> Result<Vec<Question>, StoreError> {
        Err(broken())
    }

    async fn count_questions(&self) -> Result<usize, StoreError> {
        Err(broken())
    }

    async fn questions_in_category(&self, _: CategoryId) -> Result<Vec<Question>, StoreError> {
        Err(broken())
    }

    async fn search_questions(&self, _: &str) -> Result<Vec<Question>, StoreError> {
        Err(broken())
    }

    async fn find_question(&self, _: QuestionId) -> Result<Option<Question>, StoreError> {
        Err(broken())
    }

    async fn insert_question(&self, _: NewQuestion) -> Result<Question, StoreError> {
        Err(broken())
    }

    async fn delete_question(&self, _: QuestionId) -> Result<bool, StoreError> {
        Err(broken())
    }
}
