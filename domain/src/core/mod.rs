//! Core domain concepts shared across the crate.
//!
//! - [`question::Question`] - a stored trivia question
//! - [`category::Category`] - a question category
//! - [`error::DomainError`] - domain-level errors

pub mod category;
pub mod error;
pub mod question;
