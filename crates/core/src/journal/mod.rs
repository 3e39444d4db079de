//! Journal entries and whole-journal validation.
//!
//! A fiscal year's journal is only ever written as a whole: the client sends
//! the complete list of entries it wants, the list is validated up front, and
//! the store swaps it in atomically. There is no per-entry insert, edit or
//! delete.

pub mod entry;
pub mod validation;

#[cfg(test)]
mod validation_props;

pub use entry::{Journal, JournalEntry, JournalEntryInput, NewJournalEntry, journal_total};
pub use validation::{REQUIRED_FIELDS, validate_entry, validate_journal};
