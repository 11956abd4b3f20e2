//! Versioned schema migrations, tracked in `schema_version`.

mod v001_labels;

use rusqlite::Connection;

use sieve_core::errors::{SieveResult, StorageError};

use crate::to_storage_err;

type Migration = fn(&Connection) -> rusqlite::Result<()>;

const MIGRATIONS: &[(u32, Migration)] = &[(1, v001_labels::migrate)];

/// Apply every migration newer than the recorded schema version.
pub fn run_migrations(conn: &Connection) -> SieveResult<u32> {
    conn.execute_batch("CREATE TABLE IF NOT EXISTS schema_version (version INTEGER NOT NULL)")
        .map_err(|e| to_storage_err(e.to_string()))?;
    let mut current = current_version(conn)?;

    for &(version, migrate) in MIGRATIONS {
        if version <= current {
            continue;
        }
        migrate(conn).map_err(|e| StorageError::MigrationFailed {
            version,
            reason: e.to_string(),
        })?;
        conn.execute("INSERT INTO schema_version (version) VALUES (?1)", [version])
            .map_err(|e| to_storage_err(e.to_string()))?;
        tracing::info!(version, "schema migration applied");
        current = version;
    }
    Ok(current)
}

pub fn current_version(conn: &Connection) -> SieveResult<u32> {
    conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM schema_version",
        [],
        |row| row.get(0),
    )
    .map_err(|e| to_storage_err(e.to_string()))
}
