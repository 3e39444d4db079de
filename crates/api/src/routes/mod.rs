//! API route definitions.

use axum::Router;
use serde::Deserialize;

use crate::AppState;

pub mod fiscal_years;
pub mod health;
pub mod journal;
pub mod ledger;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(fiscal_years::routes())
        .merge(journal::routes())
        .merge(ledger::routes())
}

/// Optional fuzzy search parameter shared by list endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    /// Search text; blank means no filtering.
    pub q: Option<String>,
}
