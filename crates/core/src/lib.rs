//! Core bookkeeping logic for Tally.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `error` - The error taxonomy shared by every operation
//! - `fuzzy` - Character n-gram similarity search over names
//! - `fiscal` - Fiscal year naming and status rules
//! - `journal` - Journal entries and whole-journal validation
//! - `ledger` - Account lists and T-account statements

pub mod error;
pub mod fiscal;
pub mod fuzzy;
pub mod journal;
pub mod ledger;

pub use error::LedgerError;
