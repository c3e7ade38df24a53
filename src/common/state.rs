// Application state shared across all modules

use std::sync::Arc;

use crate::common::config::AppConfig;
use crate::common::session::SessionStore;
use crate::products::repository::ProductRepository;

/// Application state containing the product store and sessions
#[derive(Clone)]
pub struct AppState {
    pub products: Arc<dyn ProductRepository>,
    pub sessions: SessionStore,
}

impl AppState {
    pub fn new(config: &AppConfig, products: Arc<dyn ProductRepository>) -> Self {
        let sessions = SessionStore::new(config.session_ttl_minutes, config.session_cookie_secure);
        Self { products, sessions }
    }
}
