//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations,
//! hiding the `SeaORM` implementation details from the rest of the application.
//! Every operation reports failures as [`LedgerError`]; database errors are
//! logged and surface as `LedgerError::StorageFailure`.

pub mod fiscal_year;
pub mod journal;

pub use fiscal_year::FiscalYearRepository;
pub use journal::JournalRepository;

use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseTransaction, DbErr, EntityTrait, QueryFilter,
};
use tally_core::LedgerError;
use tally_core::fiscal::FiscalYear;
use tally_shared::types::FiscalYearId;

use crate::entities::fiscal_years;

/// Logs a database error and converts it into a storage failure.
pub(crate) fn storage_failure(err: DbErr) -> LedgerError {
    tracing::error!(error = %err, "database operation failed");
    LedgerError::StorageFailure(err.to_string())
}

/// Loads a fiscal year or fails with `InvalidId`.
pub(crate) async fn require_fiscal_year<C: ConnectionTrait>(
    conn: &C,
    id: FiscalYearId,
) -> Result<FiscalYear, LedgerError> {
    fiscal_years::Entity::find_by_id(id.into_inner())
        .one(conn)
        .await
        .map_err(storage_failure)?
        .map(FiscalYear::from)
        .ok_or(LedgerError::InvalidId(id))
}

/// Claims a fiscal year for writing at the start of a transaction, holding
/// the claim until the transaction ends.
///
/// The claim is a no-op `UPDATE` of the row, so it must be the transaction's
/// first statement. On Postgres it takes the row lock. On SQLite it takes the
/// database write lock up front, which makes a competing writer wait on the
/// busy timeout instead of failing when it upgrades from a read lock.
pub(crate) async fn lock_fiscal_year(
    txn: &DatabaseTransaction,
    id: FiscalYearId,
) -> Result<fiscal_years::Model, LedgerError> {
    let claimed = fiscal_years::Entity::update_many()
        .col_expr(
            fiscal_years::Column::Status,
            Expr::col(fiscal_years::Column::Status).into(),
        )
        .filter(fiscal_years::Column::Id.eq(id.into_inner()))
        .exec(txn)
        .await
        .map_err(storage_failure)?
        .rows_affected;
    if claimed == 0 {
        return Err(LedgerError::InvalidId(id));
    }

    fiscal_years::Entity::find_by_id(id.into_inner())
        .one(txn)
        .await
        .map_err(storage_failure)?
        .ok_or(LedgerError::InvalidId(id))
}
