//! Journal routes.
//!
//! A journal is always written as a whole: `PUT` replaces every entry of the
//! fiscal year with the submitted list, renumbering them from 1. Send the
//! complete journal, including entries that did not change.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Value, json};
use tally_core::journal::{Journal, JournalEntry, JournalEntryInput};
use tally_shared::types::FiscalYearId;

use crate::{AppState, error::ledger_error_response};

/// Creates the journal routes.
pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/fiscal-years/{id}/journal",
        get(list_journal).put(replace_journal),
    )
}

/// One submitted journal entry.
///
/// Every field may be omitted; missing fields are reported per entry.
/// `amount` may be a JSON string or number.
#[derive(Debug, Default, Deserialize)]
pub struct JournalEntryRequest {
    /// Date (YYYY-MM-DD).
    #[serde(default)]
    pub date: Option<String>,
    /// Account debited.
    #[serde(default)]
    pub ac_debited: Option<String>,
    /// Account credited.
    #[serde(default)]
    pub ac_credited: Option<String>,
    /// Positive amount.
    #[serde(default, deserialize_with = "amount_text")]
    pub amount: Option<String>,
    /// Description.
    #[serde(default)]
    pub description: Option<String>,
}

impl From<JournalEntryRequest> for JournalEntryInput {
    fn from(req: JournalEntryRequest) -> Self {
        Self {
            date: req.date,
            ac_debited: req.ac_debited,
            ac_credited: req.ac_credited,
            amount: req.amount,
            description: req.description,
        }
    }
}

/// Reads a JSON string verbatim and any other JSON value as its text, leaving
/// validation to the journal.
fn amount_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

/// Response for a fiscal year's journal.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalResponse {
    /// Entries in id order.
    pub entries: Vec<JournalEntry>,
    /// Sum of all amounts.
    pub total: Decimal,
    /// Owning fiscal year's name.
    pub fy_name: String,
}

impl From<Journal> for JournalResponse {
    fn from(journal: Journal) -> Self {
        Self {
            entries: journal.entries,
            total: journal.total,
            fy_name: journal.fy_name,
        }
    }
}

/// GET `/fiscal-years/{id}/journal` - List all entries with their total.
async fn list_journal(
    State(state): State<AppState>,
    Path(id): Path<FiscalYearId>,
) -> impl IntoResponse {
    match state.journals().list(id).await {
        Ok(journal) => (StatusCode::OK, Json(JournalResponse::from(journal))).into_response(),
        Err(e) => ledger_error_response(&e),
    }
}

/// PUT `/fiscal-years/{id}/journal` - Replace the whole journal.
async fn replace_journal(
    State(state): State<AppState>,
    Path(id): Path<FiscalYearId>,
    Json(payload): Json<Vec<JournalEntryRequest>>,
) -> impl IntoResponse {
    let entries: Vec<JournalEntryInput> = payload.into_iter().map(Into::into).collect();

    match state.journals().replace(id, &entries).await {
        Ok(_) => (StatusCode::OK, Json(json!({}))).into_response(),
        Err(e) => ledger_error_response(&e),
    }
}
