//! LocalLibrary Catalog Server
//!
//! A Rust implementation of a library catalog backend: books, authors,
//! genres, languages and physical book copies, served as a REST JSON API
//! together with the declarative admin-site configuration consumed by an
//! external admin UI.

use std::sync::Arc;

pub mod admin;
pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub repository: Arc<repository::Repository>,
}
