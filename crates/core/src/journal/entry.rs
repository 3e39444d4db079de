//! Journal entry types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tally_shared::types::{Amount, JournalEntryId};

use crate::error::LedgerError;

/// An entry as submitted, before validation.
///
/// Every field is optional so that a missing field can be reported as such
/// instead of failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntryInput {
    /// `YYYY-MM-DD`.
    #[serde(default)]
    pub date: Option<String>,
    /// Account debited.
    #[serde(default)]
    pub ac_debited: Option<String>,
    /// Account credited.
    #[serde(default)]
    pub ac_credited: Option<String>,
    /// Decimal text.
    #[serde(default)]
    pub amount: Option<String>,
    /// Free text.
    #[serde(default)]
    pub description: Option<String>,
}

/// A validated entry ready to be stored. Text fields are trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewJournalEntry {
    /// Transaction date.
    pub date: NaiveDate,
    /// Account debited.
    pub ac_debited: String,
    /// Account credited.
    pub ac_credited: String,
    /// Strictly positive amount.
    pub amount: Amount,
    /// Free text.
    pub description: String,
}

/// A stored journal entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Identifier assigned when the journal was last replaced.
    pub id: JournalEntryId,
    /// Transaction date.
    pub date: NaiveDate,
    /// Account debited.
    pub ac_debited: String,
    /// Account credited.
    pub ac_credited: String,
    /// Strictly positive amount.
    pub amount: Amount,
    /// Free text.
    pub description: String,
}

/// A fiscal year's full journal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Journal {
    /// Name of the owning fiscal year.
    pub fy_name: String,
    /// Entries in id order.
    pub entries: Vec<JournalEntry>,
    /// Sum of all amounts, zero for an empty journal.
    pub total: Decimal,
}

impl Journal {
    /// Builds a journal listing, computing its total.
    ///
    /// # Errors
    ///
    /// See [`journal_total`].
    pub fn new(fy_name: String, entries: Vec<JournalEntry>) -> Result<Self, LedgerError> {
        let total = journal_total(&entries)?;
        Ok(Self {
            fy_name,
            entries,
            total,
        })
    }
}

/// Sum of all entry amounts.
///
/// # Errors
///
/// Returns `StorageFailure` if the stored amounts add up past the decimal range.
pub fn journal_total(entries: &[JournalEntry]) -> Result<Decimal, LedgerError> {
    entries
        .iter()
        .try_fold(Decimal::ZERO, |total, e| total.checked_add(e.amount.value()))
        .ok_or_else(|| LedgerError::StorageFailure("journal total exceeds the decimal range".to_string()))
}
