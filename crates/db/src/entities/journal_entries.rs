//! `SeaORM` Entity for journal_entries table.
//!
//! Entries are keyed by `(fiscal_year_id, id)`; `id` restarts at 1 each time a
//! fiscal year's journal is replaced. `amount` holds the decimal as text.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use tally_core::LedgerError;
use tally_core::journal::JournalEntry;
use tally_shared::types::{Amount, JournalEntryId};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "journal_entries")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub fiscal_year_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub date: Date,
    pub ac_debited: String,
    pub ac_credited: String,
    #[sea_orm(column_type = "Text")]
    pub amount: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::fiscal_years::Entity",
        from = "Column::FiscalYearId",
        to = "super::fiscal_years::Column::Id",
        on_delete = "Cascade"
    )]
    FiscalYears,
}

impl Related<super::fiscal_years::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FiscalYears.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for JournalEntry {
    type Error = LedgerError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let amount = model.amount.parse::<Amount>().map_err(|e| {
            LedgerError::StorageFailure(format!(
                "corrupt amount in journal entry {}/{}: {e}",
                model.fiscal_year_id, model.id
            ))
        })?;

        Ok(Self {
            id: JournalEntryId::new(model.id),
            date: model.date,
            ac_debited: model.ac_debited,
            ac_credited: model.ac_credited,
            amount,
            description: model.description,
        })
    }
}
