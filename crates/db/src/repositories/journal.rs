//! Journal store and ledger queries.
//!
//! A fiscal year's journal is only ever written as a whole: [`JournalRepository::replace`]
//! validates the submitted list, then clears and re-inserts it in one transaction.

use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use tally_core::LedgerError;
use tally_core::fuzzy::FuzzyMatcher;
use tally_core::journal::{Journal, JournalEntry, JournalEntryInput, NewJournalEntry, validate_journal};
use tally_core::ledger::{AccountStatement, search_accounts};
use tally_shared::types::FiscalYearId;

use super::{lock_fiscal_year, require_fiscal_year, storage_failure};
use crate::entities::journal_entries;

/// Rows per INSERT statement; keeps bind parameters well under SQLite's limit.
const INSERT_BATCH: usize = 100;

/// Journal repository.
#[derive(Debug, Clone)]
pub struct JournalRepository {
    db: DatabaseConnection,
}

impl JournalRepository {
    /// Creates a new journal repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Replaces a fiscal year's entire journal, returning the number of
    /// entries stored.
    ///
    /// Entry ids are reassigned from 1 in submission order. An empty list
    /// clears the journal. On any error the existing journal is untouched.
    ///
    /// # Errors
    ///
    /// - `InvalidId` if the fiscal year does not exist
    /// - `EmptyField`, `InvalidAmount` or `InvalidDate` for the first invalid entry
    /// - `StorageFailure` if the database fails
    pub async fn replace(
        &self,
        fy_id: FiscalYearId,
        entries: &[JournalEntryInput],
    ) -> Result<usize, LedgerError> {
        let txn = self.db.begin().await.map_err(storage_failure)?;

        lock_fiscal_year(&txn, fy_id).await?;

        let validated = validate_journal(entries).inspect_err(|err| {
            tracing::warn!(fiscal_year_id = %fy_id, error = %err, "journal rejected");
        })?;
        let count = validated.len();
        let rows = to_active_models(fy_id, validated)?;

        let removed = journal_entries::Entity::delete_many()
            .filter(journal_entries::Column::FiscalYearId.eq(fy_id.into_inner()))
            .exec(&txn)
            .await
            .map_err(storage_failure)?
            .rows_affected;

        for batch in rows.chunks(INSERT_BATCH) {
            journal_entries::Entity::insert_many(batch.iter().cloned())
                .exec_without_returning(&txn)
                .await
                .map_err(storage_failure)?;
        }

        txn.commit().await.map_err(storage_failure)?;

        tracing::info!(fiscal_year_id = %fy_id, entries = count, removed, "journal replaced");
        Ok(count)
    }

    /// Lists a fiscal year's journal in id order with its total.
    ///
    /// # Errors
    ///
    /// - `InvalidId` if the fiscal year does not exist
    /// - `StorageFailure` if the stored amounts cannot be totalled
    pub async fn list(&self, fy_id: FiscalYearId) -> Result<Journal, LedgerError> {
        let year = require_fiscal_year(&self.db, fy_id).await?;
        let entries = self.load_entries(fy_id, None).await?;

        Journal::new(year.name, entries).inspect_err(|err| {
            tracing::error!(fiscal_year_id = %fy_id, error = %err, "stored journal cannot be totalled");
        })
    }

    /// Lists the distinct accounts used in a fiscal year, sorted, optionally
    /// ranked by fuzzy match against `query`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidId` if the fiscal year does not exist.
    pub async fn list_accounts(
        &self,
        fy_id: FiscalYearId,
        query: Option<&str>,
    ) -> Result<Vec<String>, LedgerError> {
        require_fiscal_year(&self.db, fy_id).await?;
        let entries = self.load_entries(fy_id, None).await?;

        Ok(search_accounts(&entries, query, &FuzzyMatcher::default()))
    }

    /// Builds the T-account statement of one account.
    ///
    /// # Errors
    ///
    /// - `InvalidId` if the fiscal year does not exist
    /// - `InvalidAccount` if no entry debits or credits `account`
    /// - `StorageFailure` if the stored amounts cannot be totalled
    pub async fn account_statement(
        &self,
        fy_id: FiscalYearId,
        account: &str,
    ) -> Result<AccountStatement, LedgerError> {
        require_fiscal_year(&self.db, fy_id).await?;
        let entries = self.load_entries(fy_id, Some(account)).await?;

        AccountStatement::compute(account, &entries)
    }

    async fn load_entries(
        &self,
        fy_id: FiscalYearId,
        account: Option<&str>,
    ) -> Result<Vec<JournalEntry>, LedgerError> {
        let mut select = journal_entries::Entity::find()
            .filter(journal_entries::Column::FiscalYearId.eq(fy_id.into_inner()));

        if let Some(account) = account {
            select = select.filter(
                Condition::any()
                    .add(journal_entries::Column::AcDebited.eq(account))
                    .add(journal_entries::Column::AcCredited.eq(account)),
            );
        }

        select
            .order_by_asc(journal_entries::Column::Id)
            .all(&self.db)
            .await
            .map_err(storage_failure)?
            .into_iter()
            .map(JournalEntry::try_from)
            .collect()
    }
}

fn to_active_models(
    fy_id: FiscalYearId,
    entries: Vec<NewJournalEntry>,
) -> Result<Vec<journal_entries::ActiveModel>, LedgerError> {
    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            let id = i32::try_from(index + 1).map_err(|_| {
                LedgerError::StorageFailure(format!("journal too large: entry {index}"))
            })?;

            Ok(journal_entries::ActiveModel {
                fiscal_year_id: Set(fy_id.into_inner()),
                id: Set(id),
                date: Set(entry.date),
                ac_debited: Set(entry.ac_debited),
                ac_credited: Set(entry.ac_credited),
                amount: Set(entry.amount.to_string()),
                description: Set(entry.description),
            })
        })
        .collect()
}
