// src/main.rs
use axum::{extract::Extension, middleware, Router};
use dotenv::dotenv;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

// ============================================================================
// MODULE IMPORTS
// ============================================================================

mod common;
mod logging_middleware;
mod products;

// ============================================================================
// COMMON IMPORTS
// ============================================================================

use common::config::{print_config_status, AppConfig};
use common::{AppState, SessionStore};
use products::repository::{InMemoryProductRepository, ProductRepository};

// ============================================================================
// ROUTER COMPOSITION
// ============================================================================

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(products::products_routes())
        // Add form/response logging in debug mode
        .layer(middleware::from_fn(logging_middleware::log_request_response))
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
}

// ============================================================================
// MAIN APPLICATION ENTRY POINT
// ============================================================================

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    // ========================================================================
    // CONFIGURATION
    // ========================================================================

    let config = AppConfig::from_env().apply_cli_overrides(std::env::args().skip(1));
    print_config_status(&config);

    // ========================================================================
    // APPLICATION STATE
    // ========================================================================

    let products: Arc<dyn ProductRepository> = if config.seed_products {
        Arc::new(InMemoryProductRepository::seeded())
    } else {
        Arc::new(InMemoryProductRepository::empty())
    };
    info!(products = products.count().await, "Product repository initialized");

    let addr = config.socket_addr();
    let state = Arc::new(AppState::new(&config, products));

    SessionStore::start_cleanup_task(state.sessions.clone());
    info!("Session cleanup task started");

    // ========================================================================
    // SERVER STARTUP
    // ========================================================================

    let app = build_router(state);

    info!("Listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
