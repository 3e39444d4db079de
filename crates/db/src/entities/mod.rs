//! `SeaORM` entity definitions.

pub mod fiscal_years;
pub mod journal_entries;
pub mod sea_orm_active_enums;
