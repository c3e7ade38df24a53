// Error handling types for the web layer

use axum::{
    extract::rejection::FormRejection,
    http::StatusCode,
    response::{Html, IntoResponse},
};
use std::fmt;
use tracing::{error, warn};

use super::helpers::escape_html;
use crate::products::repository::RepositoryError;

/// Errors that abort a request before the page can be rendered.
/// Form validation failures never end up here.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    Repository(RepositoryError),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::BadRequest(msg) => write!(f, "Bad Request: {}", msg),
            ApiError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            ApiError::Repository(e) => write!(f, "Repository Error: {}", e),
        }
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();
        let message = match self {
            ApiError::BadRequest(msg) => {
                warn!(error = %msg, "Rejected malformed request");
                msg
            }
            ApiError::NotFound(msg) => msg,
            ApiError::Repository(e) => {
                error!(error = %e, "Product repository failure");
                "Product storage is unavailable".to_string()
            }
        };

        let body = format!(
            r#"<!doctype html>
<html lang="ar" dir="rtl">
<head>
    <meta charset="utf-8">
    <title>{code}</title>
    <link href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.2/dist/css/bootstrap.min.css" rel="stylesheet">
</head>
<body class="bg-light">
<div class="container py-4">
    <div class="alert alert-danger">
        <h1 class="h5">{code}</h1>
        <p class="mb-0">{message}</p>
    </div>
    <a href="/">&larr;</a>
</div>
</body>
</html>
"#,
            code = status,
            message = escape_html(&message),
        );

        (status, Html(body)).into_response()
    }
}

impl From<RepositoryError> for ApiError {
    fn from(e: RepositoryError) -> Self {
        ApiError::Repository(e)
    }
}

impl From<FormRejection> for ApiError {
    fn from(rejection: FormRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}
