//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST API routes for fiscal years, journals and ledgers
//! - Mapping of [`tally_core::LedgerError`] to JSON error responses

pub mod error;
pub mod routes;

#[cfg(test)]
pub(crate) mod test_support;

use axum::Router;
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tally_db::{FiscalYearRepository, JournalRepository};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: Arc<DatabaseConnection>,
}

impl AppState {
    /// Wraps a connection pool.
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db: Arc::new(db) }
    }

    /// Fiscal year registry backed by the pool.
    #[must_use]
    pub fn fiscal_years(&self) -> FiscalYearRepository {
        FiscalYearRepository::new((*self.db).clone())
    }

    /// Journal store backed by the pool.
    #[must_use]
    pub fn journals(&self) -> JournalRepository {
        JournalRepository::new((*self.db).clone())
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
