//! Fiscal year registry rules.
//!
//! A fiscal year is an isolated journal namespace. This module owns naming,
//! status and search rules; persistence lives in the database crate.

pub mod year;

pub use year::{FiscalYear, FiscalYearStatus, normalize_name, search_fiscal_years};
