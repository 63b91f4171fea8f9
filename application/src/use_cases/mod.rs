//! Use cases
//!
//! Application-level operations that orchestrate domain logic over the
//! [`TriviaStore`](crate::ports::trivia_store::TriviaStore) port.

pub mod create_question;
pub mod delete_question;
pub mod list_categories;
pub mod list_questions;
pub mod play_quiz;
pub mod questions_by_category;
pub mod search_questions;

#[cfg(test)]
pub(crate) mod test_support;

use trivia_domain::{CategoryId, Question};

/// An unpaginated list of questions with its size.
///
/// Shared output of search and category listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionList {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    /// Category the list was filtered by, if any.
    pub current_category: Option<CategoryId>,
}

impl QuestionList {
    pub fn new(questions: Vec<Question>, current_category: Option<CategoryId>) -> Self {
        Self {
            total_questions: questions.len(),
            questions,
            current_category,
        }
    }
}
