//! Signup Server Library
//!
//! A small user registration site: a signup form, a dashboard listing every
//! registered user, and per-user deletion, backed by a single SQLite table.

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod security;
pub mod views;

pub use config::Config;
pub use db::{open_database, Db};
pub use error::{AppError, Result};

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::constants::{DASHBOARD_PATH, SIGNUP_PATH};
use crate::routes::{dashboard, delete_user, health_check, signup, signup_form};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub db: Db,
    pub config: Config,
}

impl AppState {
    /// Create a new AppState with the given database and configuration
    pub fn new(db: Db, config: Config) -> Self {
        Self { db, config }
    }
}

/// Build the application router
pub fn app(state: AppState) -> Router {
    let log_requests = state.config.log_requests;

    let router = Router::new()
        .route(SIGNUP_PATH, get(signup_form).post(signup))
        .route(DASHBOARD_PATH, get(dashboard))
        .route("/delete/:id", get(delete_user))
        .route("/health", get(health_check))
        .with_state(state);

    if log_requests {
        router.layer(TraceLayer::new_for_http())
    } else {
        router
    }
}
