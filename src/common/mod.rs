// Common module - shared types and utilities across all modules

pub mod config;
pub mod error;
pub mod helpers;
pub mod session;
pub mod state;
pub mod validation;

// Re-export commonly used types for convenience
pub use error::ApiError;
pub use helpers::{escape_html, format_price};
pub use session::SessionStore;
pub use state::AppState;
pub use validation::ValidationResult;
