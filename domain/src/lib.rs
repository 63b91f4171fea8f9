//! Domain layer for trivia-api
//!
//! This crate contains the core entities and the two pieces of pure logic the
//! service is built on. It has no dependencies on storage or HTTP concerns.
//!
//! # Core Concepts
//!
//! ## Questions and Categories
//!
//! - **Question**: a stored trivia question with its answer, category reference
//!   and difficulty
//! - **Category**: a read-only label questions are grouped under
//!
//! ## Pagination
//!
//! Question listings are served in fixed windows of [`QUESTIONS_PER_PAGE`]
//! items, addressed by a 1-based [`Page`].
//!
//! ## Quiz rounds
//!
//! A quiz round draws one random question from a [`QuizCategory`] pool,
//! skipping every question the player has already seen.

pub mod core;
pub mod pagination;
pub mod quiz;

// Re-export commonly used types
pub use core::{
    category::{Category, CategoryId, CategoryMap},
    error::DomainError,
    question::{NewQuestion, Question, QuestionId},
};
pub use pagination::{Page, QUESTIONS_PER_PAGE, paginate};
pub use quiz::{
    category::QuizCategory,
    selector::{next_question, pick_next_question},
};
