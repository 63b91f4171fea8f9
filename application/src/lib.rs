//! Application layer for trivia-api
//!
//! This crate contains use cases, port definitions, and the error taxonomy
//! the HTTP layer translates into status codes. It depends only on the
//! domain layer.

pub mod error;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use error::{ErrorKind, TriviaError};
pub use ports::trivia_store::{StoreError, TriviaStore};
pub use use_cases::{
    QuestionList,
    create_question::{CreateQuestionInput, CreateQuestionUseCase},
    delete_question::DeleteQuestionUseCase,
    list_categories::ListCategoriesUseCase,
    list_questions::{ListQuestionsOutput, ListQuestionsUseCase},
    play_quiz::{PlayQuizInput, PlayQuizUseCase},
    questions_by_category::QuestionsByCategoryUseCase,
    search_questions::SearchQuestionsUseCase,
};
