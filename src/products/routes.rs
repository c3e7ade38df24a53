use super::handlers;
use axum::{routing::get, Router};

/// Creates the inventory router: one page answering GET and POST, plus health
pub fn products_routes() -> Router {
    Router::new()
        .route(
            "/",
            get(handlers::show_inventory).post(handlers::submit_product),
        )
        .route("/health", get(handlers::health))
        .fallback(handlers::not_found)
}
