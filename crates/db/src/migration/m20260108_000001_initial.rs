//! Initial database migration.
//!
//! Creates the fiscal year registry and the journal table. Built with the
//! schema builder so the same migration runs on SQLite and PostgreSQL.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FiscalYears::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FiscalYears::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(FiscalYears::Name)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(FiscalYears::Status)
                            .string_len(16)
                            .not_null()
                            .default("open"),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(JournalEntries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(JournalEntries::FiscalYearId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(JournalEntries::Id).integer().not_null())
                    .col(ColumnDef::new(JournalEntries::Date).date().not_null())
                    .col(ColumnDef::new(JournalEntries::AcDebited).string().not_null())
                    .col(
                        ColumnDef::new(JournalEntries::AcCredited)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(JournalEntries::Amount).text().not_null())
                    .col(
                        ColumnDef::new(JournalEntries::Description)
                            .text()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(JournalEntries::FiscalYearId)
                            .col(JournalEntries::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_journal_entries_fiscal_year")
                            .from(JournalEntries::Table, JournalEntries::FiscalYearId)
                            .to(FiscalYears::Table, FiscalYears::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Statement lookups filter on either side of the entry.
        manager
            .create_index(
                Index::create()
                    .name("idx_journal_entries_debited")
                    .table(JournalEntries::Table)
                    .col(JournalEntries::FiscalYearId)
                    .col(JournalEntries::AcDebited)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_journal_entries_credited")
                    .table(JournalEntries::Table)
                    .col(JournalEntries::FiscalYearId)
                    .col(JournalEntries::AcCredited)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(JournalEntries::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(FiscalYears::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum FiscalYears {
    Table,
    Id,
    Name,
    Status,
}

#[derive(DeriveIden)]
enum JournalEntries {
    Table,
    FiscalYearId,
    Id,
    Date,
    AcDebited,
    AcCredited,
    Amount,
    Description,
}
