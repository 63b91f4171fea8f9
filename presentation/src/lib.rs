//! Presentation layer for trivia-api
//!
//! This crate contains the axum router, request handlers, wire DTOs,
//! the JSON error envelope and CLI definitions.

pub mod cli;
pub mod http;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use http::{ApiError, ApiErrorKind, AppState, ErrorPolicy, build_router};
