//! Request middleware: tracing spans and the error envelope.

use super::error::{ApiError, ApiErrorKind};
use axum::{
    extract::Request,
    http::header,
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::time::Instant;
use tracing::{Instrument, info, warn};

/// Run the request inside an `http.request` span and log its outcome.
pub async fn request_tracing(request: Request, next: Next) -> Response {
    let method = request.method().to_string();
    let path = request.uri().path().to_string();
    let span = tracing::info_span!("http.request", method = %method, path = %path);

    async move {
        let started = Instant::now();
        let response = next.run(request).await;
        let status = response.status().as_u16();
        let latency_ms = started.elapsed().as_millis() as u64;
        if response.status().is_server_error() {
            warn!(status, latency_ms, "request completed");
        } else {
            info!(status, latency_ms, "request completed");
        }
        response
    }
    .instrument(span)
    .await
}

/// Replace bodyless or non-JSON client errors produced by the router with the
/// JSON error envelope.
///
/// Responses that already carry JSON (handler errors) pass through.
pub async fn error_envelope(request: Request, next: Next) -> Response {
    let response = next.run(request).await;
    if !response.status().is_client_error() || is_json(&response) {
        return response;
    }
    let Some(kind) = ApiErrorKind::from_status(response.status()) else {
        return response;
    };

    let mut envelope = ApiError::new(kind).into_response();
    if let Some(allow) = response.headers().get(header::ALLOW) {
        envelope.headers_mut().insert(header::ALLOW, allow.clone());
    }
    envelope
}

fn is_json(response: &Response) -> bool {
    response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("application/json"))
}
