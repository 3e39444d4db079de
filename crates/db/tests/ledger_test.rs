//! Integration tests for account listing and statements.

mod common;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tally_core::LedgerError;
use tally_core::ledger::BalanceSide;
use tally_db::{FiscalYearRepository, JournalRepository};
use tally_shared::types::{FiscalYearId, JournalEntryId};

use common::{entry, setup};

async fn fixture() -> (FiscalYearRepository, JournalRepository, FiscalYearId) {
    let db = setup().await;
    let years = FiscalYearRepository::new(db.clone());
    let journals = JournalRepository::new(db);
    let fy = years.create(Some("FY2024")).await.expect("create");

    let entries = vec![
        entry("2024-01-01", "Cash", "Sales", "100", "sale"),
        entry("2024-01-02", "Rent", "Cash", "40", "rent"),
        entry("2024-01-03", "Petty Cash", "Bank", "15", "float"),
    ];
    journals.replace(fy.id, &entries).await.expect("replace");

    (years, journals, fy.id)
}

#[tokio::test]
async fn test_list_accounts_sorted_and_distinct() {
    let (_, journals, fy) = fixture().await;

    let accounts = journals.list_accounts(fy, None).await.expect("accounts");
    assert_eq!(accounts, vec!["Bank", "Cash", "Petty Cash", "Rent", "Sales"]);
}

#[tokio::test]
async fn test_list_accounts_fuzzy_query() {
    let (_, journals, fy) = fixture().await;

    let accounts = journals
        .list_accounts(fy, Some("cash"))
        .await
        .expect("accounts");
    assert_eq!(accounts, vec!["Cash", "Petty Cash"]);

    let none = journals
        .list_accounts(fy, Some("zzzz"))
        .await
        .expect("accounts");
    assert!(none.is_empty());
}

#[tokio::test]
async fn test_list_accounts_of_empty_journal() {
    let (years, journals, _) = fixture().await;
    let empty = years.create(Some("FY2025")).await.expect("create").id;

    assert_eq!(journals.list_accounts(empty, None).await, Ok(Vec::new()));
    assert_eq!(journals.list_accounts(empty, Some("cash")).await, Ok(Vec::new()));
}

#[tokio::test]
async fn test_single_sale_statement() {
    let (years, journals, _) = fixture().await;
    let fy = years.create(Some("Single")).await.expect("create").id;
    journals
        .replace(fy, &[entry("2024-01-01", "Cash", "Sales", "100", "sale")])
        .await
        .expect("replace");

    let cash = journals.account_statement(fy, "Cash").await.expect("statement");
    assert_eq!(cash.debit_total, dec!(100));
    assert_eq!(cash.credit_total, Decimal::ZERO);
    assert_eq!(cash.balance, dec!(100));
    assert_eq!(cash.total, dec!(100));
    assert_eq!(cash.balance_side, Some(BalanceSide::CreditSide));
    assert_eq!(cash.debit_side[0].account, "Sales");
}

#[tokio::test]
async fn test_statement_with_both_sides() {
    let (_, journals, fy) = fixture().await;

    let cash = journals.account_statement(fy, "Cash").await.expect("statement");
    assert_eq!(cash.debit_total, dec!(100));
    assert_eq!(cash.credit_total, dec!(40));
    assert_eq!(cash.balance, dec!(60));
    assert_eq!(cash.total, dec!(100));
    assert_eq!(cash.debit_side.len(), 1);
    assert_eq!(cash.credit_side.len(), 1);
    assert_eq!(cash.credit_side[0].id, JournalEntryId::new(2));
    assert_eq!(cash.credit_side[0].account, "Rent");

    // "Petty Cash" is a different account.
    assert!(
        cash.debit_side
            .iter()
            .chain(&cash.credit_side)
            .all(|line| line.account != "Bank")
    );
}

#[tokio::test]
async fn test_statement_credit_heavy_account() {
    let (_, journals, fy) = fixture().await;

    let sales = journals.account_statement(fy, "Sales").await.expect("statement");
    assert_eq!(sales.credit_total, dec!(100));
    assert_eq!(sales.balance, dec!(100));
    assert_eq!(sales.balance_side, Some(BalanceSide::DebitSide));
}

#[tokio::test]
async fn test_statement_errors() {
    let (_, journals, fy) = fixture().await;

    assert_eq!(
        journals.account_statement(fy, "cash").await,
        Err(LedgerError::InvalidAccount("cash".to_string()))
    );
    assert_eq!(
        journals.account_statement(fy, "Utilities").await,
        Err(LedgerError::InvalidAccount("Utilities".to_string()))
    );

    let missing = FiscalYearId::new(9000);
    assert_eq!(
        journals.account_statement(missing, "Cash").await,
        Err(LedgerError::InvalidId(missing))
    );
}

#[tokio::test]
async fn test_statement_gone_after_delete() {
    let (years, journals, fy) = fixture().await;

    years.delete(fy).await.expect("delete");

    assert_eq!(
        journals.account_statement(fy, "Cash").await,
        Err(LedgerError::InvalidId(fy))
    );
}
