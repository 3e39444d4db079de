//! Property-based tests for whole-journal validation.

use proptest::prelude::*;

use super::entry::JournalEntryInput;
use super::validation::validate_journal;
use crate::error::LedgerError;

/// Strategy for a valid positive amount written as text.
fn positive_amount() -> impl Strategy<Value = String> {
    (1i64..100_000_000i64).prop_map(|cents| rust_decimal::Decimal::new(cents, 2).to_string())
}

/// Strategy for a non-positive amount written as text.
fn non_positive_amount() -> impl Strategy<Value = String> {
    (0i64..100_000_000i64).prop_map(|cents| rust_decimal::Decimal::new(-cents, 2).to_string())
}

fn date_strategy() -> impl Strategy<Value = String> {
    (2000i32..=2040, 1u32..=12, 1u32..=28).prop_map(|(y, m, d)| format!("{y:04}-{m:02}-{d:02}"))
}

fn valid_entry() -> impl Strategy<Value = JournalEntryInput> {
    (
        date_strategy(),
        "[A-Za-z][A-Za-z ]{0,15}",
        "[A-Za-z][A-Za-z ]{0,15}",
        positive_amount(),
        "[a-z][a-z ]{0,20}",
    )
        .prop_map(|(date, debited, credited, amount, description)| JournalEntryInput {
            date: Some(date),
            ac_debited: Some(debited),
            ac_credited: Some(credited),
            amount: Some(amount),
            description: Some(description),
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Valid journals pass and keep length, order and trimmed text.
    #[test]
    fn prop_valid_journal_accepted(entries in prop::collection::vec(valid_entry(), 0..20)) {
        let validated = validate_journal(&entries).unwrap();
        prop_assert_eq!(validated.len(), entries.len());
        for (input, output) in entries.iter().zip(&validated) {
            prop_assert_eq!(
                input.ac_debited.as_deref().map(str::trim),
                Some(output.ac_debited.as_str())
            );
            prop_assert_eq!(
                input.amount.as_deref().map(|a| a.parse::<rust_decimal::Decimal>().unwrap()),
                Some(output.amount.value())
            );
        }
    }

    /// A non-positive amount anywhere rejects the journal at that index.
    #[test]
    fn prop_non_positive_amount_reported_at_index(
        mut entries in prop::collection::vec(valid_entry(), 1..20),
        pick in any::<prop::sample::Index>(),
        bad in non_positive_amount(),
    ) {
        let index = pick.index(entries.len());
        entries[index].amount = Some(bad);
        prop_assert_eq!(
            validate_journal(&entries),
            Err(LedgerError::InvalidAmount { index })
        );
    }

    /// With two broken entries, the earlier one is reported.
    #[test]
    fn prop_first_failure_wins(
        mut entries in prop::collection::vec(valid_entry(), 2..20),
        a in any::<prop::sample::Index>(),
        b in any::<prop::sample::Index>(),
    ) {
        let first = a.index(entries.len());
        let second = b.index(entries.len());
        entries[first].description = None;
        entries[second].date = Some("2024-02-31".to_string());

        let expected_index = first.min(second);
        let err = validate_journal(&entries).unwrap_err();
        prop_assert_eq!(err.index(), Some(expected_index));
    }
}
