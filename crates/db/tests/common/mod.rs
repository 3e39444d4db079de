//! Shared setup for repository integration tests.
#![allow(dead_code)]

use sea_orm::DatabaseConnection;
use tally_core::journal::JournalEntryInput;
use tempfile::TempDir;
use tally_db::migration::{Migrator, MigratorTrait};
use tally_shared::config::DatabaseConfig;

/// Connects to a fresh in-memory SQLite database with the schema applied.
///
/// The pool holds a single connection: every connection to `sqlite::memory:`
/// would otherwise see its own empty database.
pub async fn setup() -> DatabaseConnection {
    let config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        min_connections: 1,
        run_migrations: true,
    };

    let db = tally_db::connect(&config)
        .await
        .expect("Failed to connect to database");
    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");
    db
}

/// Connects to a fresh file-backed SQLite database through a pool of several
/// connections, so that concurrent operations really run side by side.
///
/// The returned directory owns the database file; keep it alive for the
/// duration of the test.
pub async fn setup_pooled() -> (DatabaseConnection, TempDir) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config = DatabaseConfig {
        url: format!("sqlite://{}?mode=rwc", dir.path().join("tally.db").display()),
        max_connections: 10,
        min_connections: 1,
        run_migrations: true,
    };

    let db = tally_db::connect(&config)
        .await
        .expect("Failed to connect to database");
    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");
    (db, dir)
}

/// Builds a fully populated journal entry submission.
pub fn entry(
    date: &str,
    debited: &str,
    credited: &str,
    amount: &str,
    description: &str,
) -> JournalEntryInput {
    JournalEntryInput {
        date: Some(date.to_string()),
        ac_debited: Some(debited.to_string()),
        ac_credited: Some(credited.to_string()),
        amount: Some(amount.to_string()),
        description: Some(description.to_string()),
    }
}
