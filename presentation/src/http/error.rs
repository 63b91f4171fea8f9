//! JSON error envelope and the mapping from use case errors to status codes.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::debug;
use trivia_application::{ErrorKind, TriviaError};

/// The four client-facing error classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    BadRequest,
    NotFound,
    MethodNotAllowed,
    Unprocessable,
}

impl ApiErrorKind {
    pub fn status(self) -> StatusCode {
        match self {
            ApiErrorKind::BadRequest => StatusCode::BAD_REQUEST,
            ApiErrorKind::NotFound => StatusCode::NOT_FOUND,
            ApiErrorKind::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiErrorKind::Unprocessable => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    /// Fixed message sent to clients.
    pub fn message(self) -> &'static str {
        match self {
            ApiErrorKind::BadRequest => "bad request",
            ApiErrorKind::NotFound => "resource not found",
            ApiErrorKind::MethodNotAllowed => "method not allowed",
            ApiErrorKind::Unprocessable => "unprocessable",
        }
    }

    pub fn from_status(status: StatusCode) -> Option<Self> {
        match status {
            StatusCode::BAD_REQUEST => Some(ApiErrorKind::BadRequest),
            StatusCode::NOT_FOUND => Some(ApiErrorKind::NotFound),
            StatusCode::METHOD_NOT_ALLOWED => Some(ApiErrorKind::MethodNotAllowed),
            StatusCode::UNPROCESSABLE_ENTITY => Some(ApiErrorKind::Unprocessable),
            _ => None,
        }
    }
}

/// How a handler surfaces use case failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Not-found stays 404, everything else is 422.
    Strict,
    /// Every failure is 422, not-found included.
    FoldToUnprocessable,
}

/// Error returned by handlers; renders as
/// `{"success": false, "error": <status>, "message": <text>}`.
#[derive(Debug)]
pub struct ApiError {
    kind: ApiErrorKind,
    cause: Option<String>,
}

#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    error: u16,
    message: &'static str,
}

impl ApiError {
    pub fn new(kind: ApiErrorKind) -> Self {
        Self { kind, cause: None }
    }

    pub fn with_cause(kind: ApiErrorKind, cause: impl Into<String>) -> Self {
        Self {
            kind,
            cause: Some(cause.into()),
        }
    }

    pub fn kind(&self) -> ApiErrorKind {
        self.kind
    }

    pub fn from_trivia(err: TriviaError, policy: ErrorPolicy) -> Self {
        let kind = match (policy, err.kind()) {
            (ErrorPolicy::Strict, ErrorKind::NotFound) => ApiErrorKind::NotFound,
            _ => ApiErrorKind::Unprocessable,
        };
        Self::with_cause(kind, err.to_string())
    }

    pub fn strict(err: TriviaError) -> Self {
        Self::from_trivia(err, ErrorPolicy::Strict)
    }

    pub fn folded(err: TriviaError) -> Self {
        Self::from_trivia(err, ErrorPolicy::FoldToUnprocessable)
    }
}

impl From<JsonRejection> for ApiError {
    /// Well-formed JSON of the wrong shape is unprocessable; anything that
    /// is not JSON at all is a bad request.
    fn from(rejection: JsonRejection) -> Self {
        let kind = match rejection {
            JsonRejection::JsonDataError(_) => ApiErrorKind::Unprocessable,
            _ => ApiErrorKind::BadRequest,
        };
        Self::with_cause(kind, rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    /// A path segment that does not parse names no resource.
    fn from(rejection: PathRejection) -> Self {
        Self::with_cause(ApiErrorKind::NotFound, rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.kind.status();
        if let Some(cause) = &self.cause {
            debug!(status = status.as_u16(), cause = %cause, "request failed");
        }
        let body = ErrorBody {
            success: false,
            error: status.as_u16(),
            message: self.kind.message(),
        };
        (status, Json(body)).into_response()
    }
}
