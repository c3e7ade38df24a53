use super::models::{HealthResponse, ProductForm};
use super::services::{FormProcessor, SubmissionOutcome};
use super::views::{render_page, PageView};
use crate::common::session::SessionHandle;
use crate::common::{ApiError, AppState, ValidationResult};
use axum::{
    extract::{rejection::FormRejection, Extension},
    http::{header, HeaderMap, Uri},
    response::{Html, IntoResponse, Response},
    Form, Json,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

// ============================================================================
// Page rendering
// ============================================================================

/// Renders the page, consuming the session's pending flash if there is one
async fn render_for_session(
    state: &AppState,
    session: Option<SessionHandle>,
    errors: ValidationResult,
    echo: ProductForm,
) -> Response {
    let flash = match session {
        Some(session) => state.sessions.take_flash(session.id).await,
        None => None,
    };
    let view = PageView {
        products: state.products.list().await,
        errors,
        echo,
        flash,
    };

    let mut response = Html(render_page(&view)).into_response();
    if let Some(session) = session.filter(|session| session.is_new) {
        if let Some(cookie) = state.sessions.cookie_header(session.id) {
            response.headers_mut().insert(header::SET_COOKIE, cookie);
        }
    }
    response
}

// ============================================================================
// Inventory Handlers
// ============================================================================

/// GET / - Product list and an empty form
pub async fn show_inventory(
    Extension(state): Extension<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let session = state.sessions.resolve(&headers).await;
    Ok(render_for_session(&state, session, ValidationResult::new(), ProductForm::default()).await)
}

/// POST / - Add a product, re-rendering the page either way
pub async fn submit_product(
    Extension(state): Extension<Arc<AppState>>,
    headers: HeaderMap,
    form: Result<Form<ProductForm>, FormRejection>,
) -> Result<Response, ApiError> {
    let Form(form) = form?;
    let session = state.sessions.resolve(&headers).await;

    if !form.is_add() {
        warn!(action = ?form.action, "Ignoring unknown form action");
        return Ok(
            render_for_session(&state, session, ValidationResult::new(), ProductForm::default())
                .await,
        );
    }

    let processor = FormProcessor::new(state.products.clone());
    match processor.submit(form).await? {
        SubmissionOutcome::Created { product, flash } => {
            let session = match session {
                Some(session) => session,
                None => state.sessions.start().await,
            };
            state.sessions.set_flash(session.id, flash).await;
            debug!(product_id = product.id, session_id = %session.id, "Success notice queued");

            Ok(render_for_session(
                &state,
                Some(session),
                ValidationResult::new(),
                ProductForm::default(),
            )
            .await)
        }
        SubmissionOutcome::Rejected { errors, echo } => {
            Ok(render_for_session(&state, session, errors, echo).await)
        }
    }
}

// ============================================================================
// Operational Handlers
// ============================================================================

/// GET /health - Liveness check with the product count and next id
pub async fn health(Extension(state): Extension<Arc<AppState>>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        products: state.products.count().await,
        next_id: state.products.next_id().await,
    })
}

pub async fn not_found(uri: Uri) -> ApiError {
    info!(uri = %uri, "No route matched");
    ApiError::NotFound(format!("No page at {}", uri.path()))
}
