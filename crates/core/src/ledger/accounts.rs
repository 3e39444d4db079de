//! Account discovery.

use std::collections::BTreeSet;

use crate::fuzzy::FuzzyMatcher;
use crate::journal::JournalEntry;

/// Distinct account names used as either the debited or the credited account,
/// sorted.
#[must_use]
pub fn distinct_accounts(entries: &[JournalEntry]) -> Vec<String> {
    entries
        .iter()
        .flat_map(|e| [e.ac_debited.as_str(), e.ac_credited.as_str()])
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Distinct accounts, optionally narrowed to fuzzy matches of `query`.
#[must_use]
pub fn search_accounts(
    entries: &[JournalEntry],
    query: Option<&str>,
    matcher: &FuzzyMatcher,
) -> Vec<String> {
    matcher.filter(distinct_accounts(entries), query, String::as_str)
}
