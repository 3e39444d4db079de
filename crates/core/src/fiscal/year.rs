//! Fiscal year types.

use serde::{Deserialize, Serialize};
use tally_shared::types::FiscalYearId;

use crate::error::LedgerError;
use crate::fuzzy::FuzzyMatcher;

/// Whether a fiscal year is still being worked on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FiscalYearStatus {
    /// Newly created fiscal years are open.
    #[default]
    Open,
    /// Closed by the user.
    Closed,
}

impl FiscalYearStatus {
    /// Returns the other status.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Open => Self::Closed,
            Self::Closed => Self::Open,
        }
    }

    /// Returns the wire/database representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
        }
    }
}

impl std::fmt::Display for FiscalYearStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for FiscalYearStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(Self::Open),
            "closed" => Ok(Self::Closed),
            _ => Err(format!("Unknown fiscal year status: {s}")),
        }
    }
}

/// A bookkeeping period owning one journal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FiscalYear {
    /// Store-assigned identifier.
    pub id: FiscalYearId,
    /// Unique, trimmed, non-empty name.
    pub name: String,
    /// Open or closed.
    pub status: FiscalYearStatus,
}

/// Trims a proposed fiscal year name.
///
/// # Errors
///
/// Returns `LedgerError::EmptyField` when the name is missing or blank.
pub fn normalize_name(raw: Option<&str>) -> Result<String, LedgerError> {
    match raw.map(str::trim) {
        Some(name) if !name.is_empty() => Ok(name.to_string()),
        _ => Err(LedgerError::empty_field("name")),
    }
}

/// Filters fiscal years by fuzzy name match, best match first.
///
/// Without a query (or with a blank one) every fiscal year is returned as given.
#[must_use]
pub fn search_fiscal_years(
    years: Vec<FiscalYear>,
    query: Option<&str>,
    matcher: &FuzzyMatcher,
) -> Vec<FiscalYear> {
    matcher.filter(years, query, |fy| fy.name.as_str())
}
