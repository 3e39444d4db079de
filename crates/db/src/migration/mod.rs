//! Database migrations.
//!
//! Applied by the server at startup when `database.run_migrations` is set, by
//! the `migrator` binary, and by tests against in-memory SQLite.

pub use sea_orm_migration::prelude::*;

mod m20260108_000001_initial;

/// Runs the schema migrations in order.
pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20260108_000001_initial::Migration)]
    }
}
