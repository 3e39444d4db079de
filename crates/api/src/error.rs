//! JSON error responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};
use tally_core::LedgerError;

/// Builds the error body for a failed operation.
///
/// `field` and `index` are present when the error points at an input, `id`
/// when a fiscal year name is already taken. Storage failures carry a generic
/// message; the cause is logged where it happened.
#[must_use]
pub fn error_body(err: &LedgerError) -> Value {
    let message = if err.is_storage_failure() {
        "An error occurred".to_string()
    } else {
        err.to_string()
    };

    let mut body = json!({
        "error": err.error_code(),
        "message": message,
    });

    if let Some(field) = err.field() {
        body["field"] = json!(field);
    }
    if let Some(index) = err.index() {
        body["index"] = json!(index);
    }
    if let LedgerError::Duplicate { existing_id } = err {
        body["id"] = json!(existing_id);
    }

    body
}

/// Converts a ledger error into an HTTP response.
pub fn ledger_error_response(err: &LedgerError) -> Response {
    let status = StatusCode::from_u16(err.http_status_code())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    if !err.is_storage_failure() {
        tracing::warn!(error_code = err.error_code(), error = %err, "Request rejected");
    }

    (status, Json(error_body(err))).into_response()
}
