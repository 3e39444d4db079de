//! Whole-journal validation.
//!
//! Entries are checked in submission order. For each entry the required
//! fields are checked first, then the amount, then the date; the first failure
//! stops validation and reports the entry's zero-based index. Nothing is
//! written unless every entry passes.
//!
//! The journal total must stay within the decimal range, so an amount that
//! pushes the running total past it is reported as that entry's invalid amount.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tally_shared::types::Amount;

use super::entry::{JournalEntryInput, NewJournalEntry};
use crate::error::LedgerError;

/// Required entry fields, in the order they are checked.
pub const REQUIRED_FIELDS: [&str; 5] = ["date", "ac_debited", "ac_credited", "amount", "description"];

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Validates a complete journal submission.
///
/// # Errors
///
/// Returns the first `EmptyField`, `InvalidAmount` or `InvalidDate` found.
pub fn validate_journal(entries: &[JournalEntryInput]) -> Result<Vec<NewJournalEntry>, LedgerError> {
    let mut total = Decimal::ZERO;
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| -> Result<NewJournalEntry, LedgerError> {
            let entry = validate_entry(index, entry)?;
            total = total
                .checked_add(entry.amount.value())
                .ok_or(LedgerError::InvalidAmount { index })?;
            Ok(entry)
        })
        .collect()
}

/// Validates one submitted entry at position `index`.
///
/// # Errors
///
/// See [`validate_journal`].
pub fn validate_entry(index: usize, entry: &JournalEntryInput) -> Result<NewJournalEntry, LedgerError> {
    let submitted = [
        entry.date.as_deref(),
        entry.ac_debited.as_deref(),
        entry.ac_credited.as_deref(),
        entry.amount.as_deref(),
        entry.description.as_deref(),
    ];

    let mut values = [""; REQUIRED_FIELDS.len()];
    for ((slot, field), value) in values.iter_mut().zip(REQUIRED_FIELDS).zip(submitted) {
        *slot = value.map(str::trim).unwrap_or_default();
        if slot.is_empty() {
            return Err(LedgerError::EmptyField {
                field,
                index: Some(index),
            });
        }
    }
    let [date, ac_debited, ac_credited, amount, description] = values;

    let amount = amount
        .parse::<Amount>()
        .map_err(|_| LedgerError::InvalidAmount { index })?;

    let date = NaiveDate::parse_from_str(date, DATE_FORMAT)
        .map_err(|_| LedgerError::InvalidDate { index })?;

    Ok(NewJournalEntry {
        date,
        ac_debited: ac_debited.to_string(),
        ac_credited: ac_credited.to_string(),
        amount,
        description: description.to_string(),
    })
}
