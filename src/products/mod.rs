//! # Products Module
//!
//! The inventory page and its add-product workflow:
//! - Product and category models, plus the two seed products
//! - Form validation with per-field messages
//! - The injectable product repository (in-memory by default)
//! - HTML rendering of the form and product table

pub mod handlers;
pub mod models;
pub mod repository;
pub mod routes;
pub mod services;
pub mod validators;
pub mod views;


pub use routes::products_routes;
