//! T-account statements.
//!
//! For one account, the debit side lists every entry that debited it (showing
//! the credited account as the counterpart) and the credit side every entry that
//! credited it (showing the debited account). The balancing figure is written
//! on the lighter side: a debit-heavy account is balanced on the credit side.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tally_shared::types::{Amount, JournalEntryId};

use crate::error::LedgerError;
use crate::journal::JournalEntry;

/// Side of the T-account that carries the balancing figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BalanceSide {
    /// Credits exceed debits.
    DebitSide,
    /// Debits exceed credits.
    CreditSide,
}

impl BalanceSide {
    /// Side for a signed `debit_total - credit_total`; `None` when balanced.
    #[must_use]
    pub fn for_balance(balance: Decimal) -> Option<Self> {
        if balance > Decimal::ZERO {
            Some(Self::CreditSide)
        } else if balance < Decimal::ZERO {
            Some(Self::DebitSide)
        } else {
            None
        }
    }

    /// Returns the wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DebitSide => "debit_side",
            Self::CreditSide => "credit_side",
        }
    }
}

/// One line of a T-account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementLine {
    /// Journal entry id.
    pub id: JournalEntryId,
    /// Entry date.
    pub date: NaiveDate,
    /// The counterpart account.
    pub account: String,
    /// Entry amount.
    pub amount: Amount,
}

/// Ledger view of a single account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountStatement {
    /// The account described.
    pub account: String,
    /// Entries debiting the account.
    pub debit_side: Vec<StatementLine>,
    /// Entries crediting the account.
    pub credit_side: Vec<StatementLine>,
    /// Sum of the debit side.
    pub debit_total: Decimal,
    /// Sum of the credit side.
    pub credit_total: Decimal,
    /// Where the balancing figure goes, if any.
    pub balance_side: Option<BalanceSide>,
    /// Absolute net balance.
    pub balance: Decimal,
    /// Column total of the heavier side.
    pub total: Decimal,
}

impl AccountStatement {
    /// Computes the statement of `account` over a fiscal year's entries.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::InvalidAccount` if no entry uses the account, and
    /// `LedgerError::StorageFailure` if a side total exceeds the decimal range.
    pub fn compute(account: &str, entries: &[JournalEntry]) -> Result<Self, LedgerError> {
        let mut debit_side = Vec::new();
        let mut credit_side = Vec::new();
        let mut debit_total = Decimal::ZERO;
        let mut credit_total = Decimal::ZERO;

        for entry in entries {
            if entry.ac_debited == account {
                debit_total = add_to_side(debit_total, entry.amount)?;
                debit_side.push(StatementLine {
                    id: entry.id,
                    date: entry.date,
                    account: entry.ac_credited.clone(),
                    amount: entry.amount,
                });
            }
            if entry.ac_credited == account {
                credit_total = add_to_side(credit_total, entry.amount)?;
                credit_side.push(StatementLine {
                    id: entry.id,
                    date: entry.date,
                    account: entry.ac_debited.clone(),
                    amount: entry.amount,
                });
            }
        }

        if debit_side.is_empty() && credit_side.is_empty() {
            return Err(LedgerError::InvalidAccount(account.to_string()));
        }

        let signed = debit_total - credit_total;

        Ok(Self {
            account: account.to_string(),
            debit_side,
            credit_side,
            debit_total,
            credit_total,
            balance_side: BalanceSide::for_balance(signed),
            balance: signed.abs(),
            total: debit_total.max(credit_total),
        })
    }

    /// `debit_total - credit_total`.
    #[must_use]
    pub fn signed_balance(&self) -> Decimal {
        self.debit_total - self.credit_total
    }
}

fn add_to_side(total: Decimal, amount: Amount) -> Result<Decimal, LedgerError> {
    total
        .checked_add(amount.value())
        .ok_or_else(|| LedgerError::StorageFailure("account total exceeds the decimal range".to_string()))
}
