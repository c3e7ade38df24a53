// src/logging_middleware.rs
//! Middleware for logging submitted forms and response summaries in debug mode

use axum::body::{to_bytes, HttpBody};
use axum::{
    body::Body,
    extract::Request,
    http::{header, HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};
use tracing::{debug, enabled, Level};

use crate::common::helpers::truncate_for_log;

const MAX_LOGGED_BODY_CHARS: usize = 512;
/// Larger form bodies are passed through unread and left to the extractor's own limit
const MAX_BUFFERED_BODY_BYTES: usize = 64 * 1024;

fn is_form(content_type: Option<&header::HeaderValue>) -> bool {
    content_type
        .and_then(|value| value.to_str().ok())
        .map_or(false, |value| {
            value.starts_with("application/x-www-form-urlencoded")
        })
}

fn content_length(headers: &HeaderMap) -> Option<usize> {
    headers
        .get(header::CONTENT_LENGTH)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse().ok())
}

/// Logs form request bodies and the status and size of every response
pub async fn log_request_response(request: Request, next: Next) -> Result<Response, StatusCode> {
    if !enabled!(Level::DEBUG) {
        return Ok(next.run(request).await);
    }

    let bufferable = is_form(request.headers().get(header::CONTENT_TYPE))
        && content_length(request.headers()).map_or(false, |len| len <= MAX_BUFFERED_BODY_BYTES);

    let request = if bufferable {
        let (parts, body) = request.into_parts();
        let bytes = to_bytes(body, MAX_BUFFERED_BODY_BYTES)
            .await
            .map_err(|_| StatusCode::BAD_REQUEST)?;

        match std::str::from_utf8(&bytes) {
            Ok(body_str) => debug!(
                method = %parts.method,
                uri = %parts.uri,
                form = %truncate_for_log(body_str, MAX_LOGGED_BODY_CHARS),
                "📥 Form submitted"
            ),
            Err(_) => debug!(method = %parts.method, uri = %parts.uri, "📥 Form submitted (not UTF-8)"),
        }
        Request::from_parts(parts, Body::from(bytes))
    } else {
        debug!(
            method = %request.method(),
            uri = %request.uri(),
            content_length = ?content_length(request.headers()),
            "📥 Request"
        );
        request
    };

    let response = next.run(request).await;

    debug!(
        status = %response.status(),
        content_type = ?response.headers().get(header::CONTENT_TYPE),
        body_bytes = ?response.body().size_hint().exact(),
        "📤 Response"
    );

    Ok(response)
}
