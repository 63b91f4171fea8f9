//! HTTP surface of the trivia service.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
mod router;

pub use error::{ApiError, ApiErrorKind, ErrorPolicy};
pub use router::{AppState, build_router};
