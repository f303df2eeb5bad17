//! Migration runner
//!
//! Applies pending migrations in order, each in its own transaction, and
//! refuses to start on a store whose applied migrations have drifted.

use rusqlite::{Connection, OptionalExtension};
use thiserror::Error;

use crate::migrations::checksums::compute_checksum;
use crate::migrations::embedded::{get_migrations, Migration};

/// Failure while bringing a store's schema up to date
#[derive(Debug, Error)]
pub enum MigrationError {
    #[error("migration {id} failed: {source}")]
    Failed {
        id: &'static str,
        #[source]
        source: rusqlite::Error,
    },

    #[error("checksum mismatch for migration {id}: recorded {recorded}, embedded {embedded}")]
    ChecksumMismatch {
        id: &'static str,
        recorded: String,
        embedded: String,
    },

    #[error("schema_version bookkeeping failed: {0}")]
    Bookkeeping(#[from] rusqlite::Error),
}

/// Apply all pending migrations to the database
pub fn apply_migrations(conn: &mut Connection) -> Result<(), MigrationError> {
    create_schema_version_table(conn)?;

    for migration in get_migrations() {
        apply_migration(conn, migration)?;
    }

    Ok(())
}

fn create_schema_version_table(conn: &Connection) -> Result<(), MigrationError> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS schema_version (
            id INTEGER PRIMARY KEY,
            migration_id TEXT NOT NULL UNIQUE,
            applied_at INTEGER NOT NULL,
            checksum TEXT
        )",
        [],
    )?;

    Ok(())
}

/// Apply a single migration if not already applied
fn apply_migration(conn: &mut Connection, migration: Migration) -> Result<(), MigrationError> {
    let embedded = compute_checksum(migration.sql);

    let recorded: Option<Option<String>> = conn
        .query_row(
            "SELECT checksum FROM schema_version WHERE migration_id = ?1",
            [migration.id],
            |row| row.get(0),
        )
        .optional()?;

    match recorded {
        Some(Some(recorded)) if recorded != embedded => {
            return Err(MigrationError::ChecksumMismatch {
                id: migration.id,
                recorded,
                embedded,
            });
        }
        Some(_) => return Ok(()),
        None => {}
    }

    let tx = conn.transaction()?;

    tx.execute_batch(migration.sql)
        .map_err(|source| MigrationError::Failed {
            id: migration.id,
            source,
        })?;

    tx.execute(
        "INSERT INTO schema_version (migration_id, applied_at, checksum) VALUES (?1, ?2, ?3)",
        rusqlite::params![migration.id, chrono::Utc::now().timestamp(), embedded],
    )?;

    tx.commit()?;

    tracing::debug!(migration_id = migration.id, "migration applied");
    Ok(())
}
