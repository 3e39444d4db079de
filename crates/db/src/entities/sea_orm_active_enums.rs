//! `SeaORM` active enums.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Stored fiscal year status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "lowercase")]
pub enum FiscalYearStatus {
    #[sea_orm(string_value = "open")]
    Open,
    #[sea_orm(string_value = "closed")]
    Closed,
}

impl From<FiscalYearStatus> for tally_core::fiscal::FiscalYearStatus {
    fn from(status: FiscalYearStatus) -> Self {
        match status {
            FiscalYearStatus::Open => Self::Open,
            FiscalYearStatus::Closed => Self::Closed,
        }
    }
}

impl From<tally_core::fiscal::FiscalYearStatus> for FiscalYearStatus {
    fn from(status: tally_core::fiscal::FiscalYearStatus) -> Self {
        match status {
            tally_core::fiscal::FiscalYearStatus::Open => Self::Open,
            tally_core::fiscal::FiscalYearStatus::Closed => Self::Closed,
        }
    }
}
