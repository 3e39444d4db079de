//! Ledger routes: account lists and T-account statements.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tally_core::LedgerError;
use tally_core::ledger::{AccountStatement, BalanceSide, StatementLine};
use tally_shared::types::FiscalYearId;

use super::SearchQuery;
use crate::{AppState, error::ledger_error_response};

/// Creates the ledger routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/fiscal-years/{id}/accounts", get(list_accounts))
        .route("/fiscal-years/{id}/ledger", get(account_statement))
}

/// Query parameters for an account statement.
#[derive(Debug, Deserialize)]
pub struct StatementQuery {
    /// Exact, case-sensitive account name.
    pub account: Option<String>,
}

/// Response for an account statement.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatementResponse {
    /// Account name.
    pub account: String,
    /// Entries debiting the account, showing the credited account.
    pub debit_side: Vec<StatementLine>,
    /// Entries crediting the account, showing the debited account.
    pub credit_side: Vec<StatementLine>,
    /// Sum of the debit side.
    pub debit_total: Decimal,
    /// Sum of the credit side.
    pub credit_total: Decimal,
    /// `debit_side`, `credit_side` or null when balanced.
    pub balance_side: Option<BalanceSide>,
    /// Absolute balance.
    pub balance: Decimal,
    /// Larger of the two side totals.
    pub total: Decimal,
}

impl From<AccountStatement> for StatementResponse {
    fn from(st: AccountStatement) -> Self {
        Self {
            account: st.account,
            debit_side: st.debit_side,
            credit_side: st.credit_side,
            debit_total: st.debit_total,
            credit_total: st.credit_total,
            balance_side: st.balance_side,
            balance: st.balance,
            total: st.total,
        }
    }
}

/// GET `/fiscal-years/{id}/accounts?q=` - Distinct accounts used in the journal.
async fn list_accounts(
    State(state): State<AppState>,
    Path(id): Path<FiscalYearId>,
    Query(query): Query<SearchQuery>,
) -> impl IntoResponse {
    match state.journals().list_accounts(id, query.q.as_deref()).await {
        Ok(accounts) => (StatusCode::OK, Json(accounts)).into_response(),
        Err(e) => ledger_error_response(&e),
    }
}

/// GET `/fiscal-years/{id}/ledger?account=` - T-account statement of one account.
async fn account_statement(
    State(state): State<AppState>,
    Path(id): Path<FiscalYearId>,
    Query(query): Query<StatementQuery>,
) -> impl IntoResponse {
    let Some(account) = query.account.filter(|a| !a.trim().is_empty()) else {
        return ledger_error_response(&LedgerError::empty_field("account"));
    };

    match state.journals().account_statement(id, &account).await {
        Ok(statement) => {
            (StatusCode::OK, Json(StatementResponse::from(statement))).into_response()
        }
        Err(e) => ledger_error_response(&e),
    }
}
