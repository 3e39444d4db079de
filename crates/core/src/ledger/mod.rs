//! Ledger views derived from a fiscal year's journal.
//!
//! Nothing here is persisted. Accounts exist only as the distinct names used
//! on either side of the journal, and statements are recomputed per query.

pub mod accounts;
pub mod statement;

#[cfg(test)]
mod statement_props;

pub use accounts::{distinct_accounts, search_accounts};
pub use statement::{AccountStatement, BalanceSide, StatementLine};
