//! `SeaORM` Entity for fiscal_years table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use tally_core::fiscal::FiscalYear;
use tally_shared::types::FiscalYearId;

use super::sea_orm_active_enums::FiscalYearStatus;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "fiscal_years")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub status: FiscalYearStatus,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::journal_entries::Entity")]
    JournalEntries,
}

impl Related<super::journal_entries::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::JournalEntries.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for FiscalYear {
    fn from(model: Model) -> Self {
        Self {
            id: FiscalYearId::new(model.id),
            name: model.name,
            status: model.status.into(),
        }
    }
}
