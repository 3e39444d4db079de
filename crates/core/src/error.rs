//! Error types for registry, journal and ledger operations.
//!
//! Every failure an operation can report is one of these variants. Variants that
//! point at a specific input carry the offending `field` and, for whole-journal
//! submissions, the zero-based `index` of the entry that failed.

use tally_shared::types::FiscalYearId;
use thiserror::Error;

/// Errors that can occur during fiscal year, journal and ledger operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    // ========== Validation Errors ==========
    /// A required field is missing or blank after trimming.
    #[error("Field '{field}' is required{}", at_entry(.index))]
    EmptyField {
        /// Name of the missing field.
        field: &'static str,
        /// Entry index for journal submissions.
        index: Option<usize>,
    },

    /// Amount is not a number or not strictly positive.
    #[error("Invalid amount at entry {index}")]
    InvalidAmount {
        /// Entry index in the submitted journal.
        index: usize,
    },

    /// Date is not a real calendar date in `YYYY-MM-DD` form.
    #[error("Invalid date at entry {index}")]
    InvalidDate {
        /// Entry index in the submitted journal.
        index: usize,
    },

    // ========== Lookup Errors ==========
    /// Another fiscal year already uses the name.
    #[error("Fiscal year already exists with id {existing_id}")]
    Duplicate {
        /// The fiscal year owning the name.
        existing_id: FiscalYearId,
    },

    /// The referenced fiscal year does not exist.
    #[error("Invalid fiscal year id: {0}")]
    InvalidId(FiscalYearId),

    /// The account appears on neither side of any entry.
    #[error("Invalid account: {0}")]
    InvalidAccount(String),

    // ========== Storage Errors ==========
    /// The backing store failed; the operation had no effect.
    #[error("Storage failure: {0}")]
    StorageFailure(String),
}

fn at_entry(index: &Option<usize>) -> String {
    index.map_or_else(String::new, |i| format!(" at entry {i}"))
}

impl LedgerError {
    /// Shorthand for a missing field on a single-record operation.
    #[must_use]
    pub const fn empty_field(field: &'static str) -> Self {
        Self::EmptyField { field, index: None }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyField { .. } => "empty_field",
            Self::InvalidAmount { .. } => "invalid_amount",
            Self::InvalidDate { .. } => "invalid_date",
            Self::Duplicate { .. } => "duplicate",
            Self::InvalidId(_) => "invalid_id",
            Self::InvalidAccount(_) => "invalid_account",
            Self::StorageFailure(_) => "storage_failure",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn http_status_code(&self) -> u16 {
        match self {
            // 400 Bad Request - validation errors
            Self::EmptyField { .. } | Self::InvalidAmount { .. } | Self::InvalidDate { .. } => 400,

            // 404 Not Found
            Self::InvalidId(_) | Self::InvalidAccount(_) => 404,

            // 409 Conflict
            Self::Duplicate { .. } => 409,

            // 500 Internal Server Error
            Self::StorageFailure(_) => 500,
        }
    }

    /// The input field the error points at, if any.
    #[must_use]
    pub const fn field(&self) -> Option<&'static str> {
        match self {
            Self::EmptyField { field, .. } => Some(*field),
            Self::InvalidAmount { .. } => Some("amount"),
            Self::InvalidDate { .. } => Some("date"),
            _ => None,
        }
    }

    /// The zero-based journal entry index the error points at, if any.
    #[must_use]
    pub const fn index(&self) -> Option<usize> {
        match self {
            Self::EmptyField { index, .. } => *index,
            Self::InvalidAmount { index } | Self::InvalidDate { index } => Some(*index),
            _ => None,
        }
    }

    /// Returns true if the failure came from the store rather than the input.
    #[must_use]
    pub const fn is_storage_failure(&self) -> bool {
        matches!(self, Self::StorageFailure(_))
    }
}
