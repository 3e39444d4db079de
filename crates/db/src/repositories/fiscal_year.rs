//! Fiscal year registry.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, ModelTrait,
    QueryFilter, QueryOrder, Set, SqlErr, TransactionTrait,
};
use tally_core::LedgerError;
use tally_core::fiscal::{FiscalYear, FiscalYearStatus, normalize_name, search_fiscal_years};
use tally_core::fuzzy::FuzzyMatcher;
use tally_shared::types::FiscalYearId;

use super::{lock_fiscal_year, require_fiscal_year, storage_failure};
use crate::entities::{fiscal_years, journal_entries};

/// Fiscal year repository.
#[derive(Debug, Clone)]
pub struct FiscalYearRepository {
    db: DatabaseConnection,
}

impl FiscalYearRepository {
    /// Creates a new fiscal year repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an open fiscal year.
    ///
    /// The name is trimmed first. Its journal starts out empty.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the name is missing or blank
    /// - `Duplicate` if another fiscal year already has the exact name
    /// - `StorageFailure` if the database fails
    pub async fn create(&self, name: Option<&str>) -> Result<FiscalYear, LedgerError> {
        let name = normalize_name(name)?;

        if let Some(existing) = self.find_by_name(&name).await? {
            tracing::warn!(name = %name, existing_id = %existing.id, "fiscal year name taken");
            return Err(LedgerError::Duplicate {
                existing_id: existing.id,
            });
        }

        let model = fiscal_years::ActiveModel {
            name: Set(name.clone()),
            status: Set(FiscalYearStatus::Open.into()),
            ..Default::default()
        };

        let created = match model.insert(&self.db).await {
            Ok(created) => created,
            Err(err) => return Err(self.duplicate_or_failure(err, &name).await),
        };

        tracing::info!(fiscal_year_id = created.id, name = %created.name, "fiscal year created");
        Ok(created.into())
    }

    /// Lists fiscal years by id, or ranked by fuzzy name match when a
    /// non-blank query is given.
    ///
    /// # Errors
    ///
    /// Returns `StorageFailure` if the database query fails.
    pub async fn list(&self, query: Option<&str>) -> Result<Vec<FiscalYear>, LedgerError> {
        let years = fiscal_years::Entity::find()
            .order_by_asc(fiscal_years::Column::Id)
            .all(&self.db)
            .await
            .map_err(storage_failure)?
            .into_iter()
            .map(FiscalYear::from)
            .collect();

        Ok(search_fiscal_years(years, query, &FuzzyMatcher::default()))
    }

    /// Finds a fiscal year by id.
    ///
    /// # Errors
    ///
    /// Returns `InvalidId` if no such fiscal year exists.
    pub async fn find(&self, id: FiscalYearId) -> Result<FiscalYear, LedgerError> {
        require_fiscal_year(&self.db, id).await
    }

    /// Finds a fiscal year by exact name.
    ///
    /// # Errors
    ///
    /// Returns `StorageFailure` if the database query fails.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<FiscalYear>, LedgerError> {
        fiscal_years::Entity::find()
            .filter(fiscal_years::Column::Name.eq(name))
            .one(&self.db)
            .await
            .map(|found| found.map(FiscalYear::from))
            .map_err(storage_failure)
    }

    /// Renames a fiscal year. Renaming to the current name is a no-op.
    ///
    /// # Errors
    ///
    /// - `InvalidId` if the fiscal year does not exist
    /// - `EmptyField` if the new name is missing or blank
    /// - `Duplicate` if another fiscal year owns the name
    pub async fn rename(
        &self,
        id: FiscalYearId,
        name: Option<&str>,
    ) -> Result<FiscalYear, LedgerError> {
        let current = self.find(id).await?;
        let name = normalize_name(name)?;

        if current.name == name {
            return Ok(current);
        }

        if let Some(other) = self.find_by_name(&name).await? {
            tracing::warn!(fiscal_year_id = %id, name = %name, existing_id = %other.id, "fiscal year name taken");
            return Err(LedgerError::Duplicate {
                existing_id: other.id,
            });
        }

        let model = fiscal_years::ActiveModel {
            id: Set(id.into_inner()),
            name: Set(name.clone()),
            ..Default::default()
        };

        let updated = match model.update(&self.db).await {
            Ok(updated) => updated,
            Err(DbErr::RecordNotUpdated) => return Err(LedgerError::InvalidId(id)),
            Err(err) => return Err(self.duplicate_or_failure(err, &name).await),
        };

        tracing::info!(fiscal_year_id = %id, from = %current.name, to = %updated.name, "fiscal year renamed");
        Ok(updated.into())
    }

    /// Flips a fiscal year between open and closed, returning the new status.
    ///
    /// # Errors
    ///
    /// Returns `InvalidId` if the fiscal year does not exist.
    pub async fn toggle_status(&self, id: FiscalYearId) -> Result<FiscalYearStatus, LedgerError> {
        let txn = self.db.begin().await.map_err(storage_failure)?;

        let current = lock_fiscal_year(&txn, id).await?;
        let status = FiscalYearStatus::from(current.status).toggled();

        let mut model: fiscal_years::ActiveModel = current.into();
        model.status = Set(status.into());
        model.update(&txn).await.map_err(storage_failure)?;

        txn.commit().await.map_err(storage_failure)?;

        tracing::info!(fiscal_year_id = %id, status = %status, "fiscal year status toggled");
        Ok(status)
    }

    /// Deletes a fiscal year together with its whole journal.
    ///
    /// # Errors
    ///
    /// Returns `InvalidId` if the fiscal year does not exist.
    pub async fn delete(&self, id: FiscalYearId) -> Result<(), LedgerError> {
        let txn = self.db.begin().await.map_err(storage_failure)?;

        let year = lock_fiscal_year(&txn, id).await?;

        let removed = journal_entries::Entity::delete_many()
            .filter(journal_entries::Column::FiscalYearId.eq(id.into_inner()))
            .exec(&txn)
            .await
            .map_err(storage_failure)?
            .rows_affected;

        year.delete(&txn).await.map_err(storage_failure)?;

        txn.commit().await.map_err(storage_failure)?;

        tracing::info!(fiscal_year_id = %id, entries = removed, "fiscal year deleted");
        Ok(())
    }

    /// Maps a unique-name violation raised by a concurrent writer to
    /// `Duplicate`, anything else to `StorageFailure`.
    async fn duplicate_or_failure(&self, err: DbErr, name: &str) -> LedgerError {
        if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
            match self.find_by_name(name).await {
                Ok(Some(existing)) => {
                    tracing::warn!(name = %name, existing_id = %existing.id, "lost race for fiscal year name");
                    return LedgerError::Duplicate {
                        existing_id: existing.id,
                    };
                }
                Ok(None) => {}
                Err(lookup) => return lookup,
            }
        }

        storage_failure(err)
    }
}
