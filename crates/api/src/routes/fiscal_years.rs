//! Fiscal year registry routes.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch, post},
};
use serde::Deserialize;
use serde_json::json;
use tally_shared::types::FiscalYearId;

use super::SearchQuery;
use crate::{AppState, error::ledger_error_response};

/// Creates the fiscal year routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/fiscal-years",
            get(list_fiscal_years).post(create_fiscal_year),
        )
        .route(
            "/fiscal-years/{id}",
            patch(rename_fiscal_year).delete(delete_fiscal_year),
        )
        .route("/fiscal-years/{id}/toggle-status", post(toggle_status))
}

/// Request body for creating or renaming a fiscal year.
///
/// `name` is optional so that a missing name is reported as an empty field.
#[derive(Debug, Default, Deserialize)]
pub struct FiscalYearNameRequest {
    /// Fiscal year name (e.g., "FY2024").
    #[serde(default)]
    pub name: Option<String>,
}

/// GET `/fiscal-years?q=` - List fiscal years, optionally fuzzy-filtered by name.
async fn list_fiscal_years(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> impl IntoResponse {
    match state.fiscal_years().list(query.q.as_deref()).await {
        Ok(years) => (StatusCode::OK, Json(years)).into_response(),
        Err(e) => ledger_error_response(&e),
    }
}

/// POST `/fiscal-years` - Create an open fiscal year.
async fn create_fiscal_year(
    State(state): State<AppState>,
    Json(payload): Json<FiscalYearNameRequest>,
) -> impl IntoResponse {
    match state.fiscal_years().create(payload.name.as_deref()).await {
        Ok(fy) => (StatusCode::CREATED, Json(fy)).into_response(),
        Err(e) => ledger_error_response(&e),
    }
}

/// PATCH `/fiscal-years/{id}` - Rename a fiscal year.
async fn rename_fiscal_year(
    State(state): State<AppState>,
    Path(id): Path<FiscalYearId>,
    Json(payload): Json<FiscalYearNameRequest>,
) -> impl IntoResponse {
    match state.fiscal_years().rename(id, payload.name.as_deref()).await {
        Ok(_) => (StatusCode::OK, Json(json!({}))).into_response(),
        Err(e) => ledger_error_response(&e),
    }
}

/// POST `/fiscal-years/{id}/toggle-status` - Flip between open and closed.
async fn toggle_status(
    State(state): State<AppState>,
    Path(id): Path<FiscalYearId>,
) -> impl IntoResponse {
    match state.fiscal_years().toggle_status(id).await {
        Ok(status) => (StatusCode::OK, Json(json!({ "status": status }))).into_response(),
        Err(e) => ledger_error_response(&e),
    }
}

/// DELETE `/fiscal-years/{id}` - Delete a fiscal year and its journal.
async fn delete_fiscal_year(
    State(state): State<AppState>,
    Path(id): Path<FiscalYearId>,
) -> impl IntoResponse {
    match state.fiscal_years().delete(id).await {
        Ok(()) => (StatusCode::OK, Json(json!({}))).into_response(),
        Err(e) => ledger_error_response(&e),
    }
}
