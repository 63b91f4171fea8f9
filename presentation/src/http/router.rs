//! Route table and shared state.

use super::{handlers, middleware};
use axum::{
    Router,
    middleware::from_fn,
    routing::{delete, get, post},
};
use std::sync::Arc;
use trivia_application::TriviaStore;

/// State shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn TriviaStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn TriviaStore>) -> Self {
        Self { store }
    }
}

/// Build the application router.
///
/// The error envelope runs inside the tracing span so that logged statuses
/// match what the client receives.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/categories", get(handlers::list_categories))
        .route(
            "/questions",
            get(handlers::list_questions).post(handlers::create_or_search_questions),
        )
        .route("/questions/:id", delete(handlers::delete_question))
        .route(
            "/categories/:id/questions",
            get(handlers::questions_by_category),
        )
        .route("/quizzes", post(handlers::play_quiz))
        .route("/healthz", get(handlers::health))
        .fallback(handlers::not_found)
        .layer(from_fn(middleware::error_envelope))
        .layer(from_fn(middleware::request_tracing))
        .with_state(state)
}
