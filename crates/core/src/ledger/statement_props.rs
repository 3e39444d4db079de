//! Property-based tests for account statements.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;
use tally_shared::types::{Amount, JournalEntryId};

use super::accounts::distinct_accounts;
use super::statement::{AccountStatement, BalanceSide};
use crate::journal::JournalEntry;

const ACCOUNTS: [&str; 4] = ["Cash", "Sales", "Rent", "Bank"];

fn entries_strategy() -> impl Strategy<Value = Vec<JournalEntry>> {
    prop::collection::vec((0usize..4, 0usize..4, 1i64..10_000_000i64), 1..30).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (d, c, cents))| JournalEntry {
                id: JournalEntryId::new(i32::try_from(i).unwrap_or(i32::MAX) + 1),
                date: NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
                ac_debited: ACCOUNTS[d].to_string(),
                ac_credited: ACCOUNTS[c].to_string(),
                amount: Amount::new(Decimal::new(cents, 2)).unwrap(),
                description: "generated".to_string(),
            })
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// debit_total - credit_total is the signed balance, reported as its
    /// absolute value with the matching side.
    #[test]
    fn prop_balance_identity(entries in entries_strategy()) {
        for account in distinct_accounts(&entries) {
            let st = AccountStatement::compute(&account, &entries).unwrap();
            let signed = st.debit_total - st.credit_total;

            prop_assert_eq!(st.signed_balance(), signed);
            prop_assert_eq!(st.balance, signed.abs());
            prop_assert_eq!(st.balance_side == Some(BalanceSide::CreditSide), signed > Decimal::ZERO);
            prop_assert_eq!(st.balance_side == Some(BalanceSide::DebitSide), signed < Decimal::ZERO);
            prop_assert_eq!(st.total, st.debit_total.max(st.credit_total));

            let debit_sum: Decimal = st.debit_side.iter().map(|l| l.amount.value()).sum();
            let credit_sum: Decimal = st.credit_side.iter().map(|l| l.amount.value()).sum();
            prop_assert_eq!(debit_sum, st.debit_total);
            prop_assert_eq!(credit_sum, st.credit_total);
        }
    }

    /// Across all accounts, the signed balances of a double-entry journal sum to zero.
    #[test]
    fn prop_trial_balance_nets_to_zero(entries in entries_strategy()) {
        let net: Decimal = distinct_accounts(&entries)
            .iter()
            .map(|a| AccountStatement::compute(a, &entries).unwrap().signed_balance())
            .sum();
        prop_assert_eq!(net, Decimal::ZERO);
    }
}
