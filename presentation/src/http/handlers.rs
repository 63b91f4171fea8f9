//! Request handlers.
//!
//! Each handler builds its use case over the shared store, runs it and
//! translates the outcome. Only `list_questions` and `list_categories` keep
//! not-found as 404; the others fold every failure into 422.

use super::dto::{
    CategoriesResponse, CreatedResponse, DeletedResponse, HealthResponse, PageQuery,
    QuestionCommand, QuestionListResponse, QuestionPageResponse, QuestionsBody, QuizBody,
    QuizResponse,
};
use super::error::{ApiError, ApiErrorKind};
use super::router::AppState;
use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    response::{IntoResponse, Response},
};
use tracing::debug;
use trivia_application::{
    CreateQuestionUseCase, DeleteQuestionUseCase, ListCategoriesUseCase, ListQuestionsUseCase,
    PlayQuizUseCase, QuestionsByCategoryUseCase, SearchQuestionsUseCase,
};
use trivia_domain::{CategoryId, Page, QuestionId};

/// `GET /categories`
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<CategoriesResponse>, ApiError> {
    let categories = ListCategoriesUseCase::new(state.store)
        .execute()
        .await
        .map_err(ApiError::strict)?;
    Ok(Json(CategoriesResponse { categories }))
}

/// `GET /questions?page=N`
pub async fn list_questions(
    State(state): State<AppState>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Json<QuestionPageResponse>, ApiError> {
    let raw = query.ok().and_then(|Query(q)| q.page);
    let page = Page::from_query(raw.as_deref());

    let output = ListQuestionsUseCase::new(state.store)
        .execute(page)
        .await
        .map_err(ApiError::strict)?;
    Ok(Json(output.into()))
}

/// `DELETE /questions/{id}`
pub async fn delete_question(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<DeletedResponse>, ApiError> {
    let Path(id) = id?;
    let deleted = DeleteQuestionUseCase::new(state.store)
        .execute(QuestionId::new(id))
        .await
        .map_err(ApiError::folded)?;
    Ok(Json(DeletedResponse {
        success: true,
        deleted,
    }))
}

/// `POST /questions`: search when `searchTerm` is set, create otherwise.
pub async fn create_or_search_questions(
    State(state): State<AppState>,
    body: Result<Json<QuestionsBody>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(body) = body?;
    match body.into_command() {
        QuestionCommand::Search(term) => {
            debug!("Searching questions for {:?}", term);
            let list = SearchQuestionsUseCase::new(state.store)
                .execute(&term)
                .await
                .map_err(ApiError::folded)?;
            Ok(Json(QuestionListResponse::from(list)).into_response())
        }
        QuestionCommand::Create(input) => {
            CreateQuestionUseCase::new(state.store)
                .execute(input)
                .await
                .map_err(ApiError::folded)?;
            Ok(Json(CreatedResponse { success: true }).into_response())
        }
    }
}

/// `GET /categories/{id}/questions`
pub async fn questions_by_category(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<QuestionListResponse>, ApiError> {
    let Path(id) = id?;
    let list = QuestionsByCategoryUseCase::new(state.store)
        .execute(CategoryId::new(id))
        .await
        .map_err(ApiError::folded)?;
    Ok(Json(list.into()))
}

/// `POST /quizzes`
pub async fn play_quiz(
    State(state): State<AppState>,
    body: Result<Json<QuizBody>, JsonRejection>,
) -> Result<Json<QuizResponse>, ApiError> {
    let Json(body) = body?;
    let question = PlayQuizUseCase::new(state.store)
        .execute(body.into_input())
        .await
        .map_err(ApiError::folded)?;
    Ok(Json(QuizResponse {
        success: true,
        question,
    }))
}

/// `GET /healthz`
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Fallback for unknown paths.
pub async fn not_found() -> ApiError {
    ApiError::new(ApiErrorKind::NotFound)
}
