//! Database connection management
//!
//! Provides utilities for opening and configuring SQLite connections

use rusqlite::{Connection, OpenFlags};
use std::path::Path;
use std::time::Duration;

/// How long a statement waits for another connection's write lock
pub const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Open an existing SQLite database at the given path
///
/// Does not create the file: a store removed after initialization surfaces as
/// a connection error instead of a silently empty database.
pub fn open_existing<P: AsRef<Path>>(path: P) -> rusqlite::Result<Connection> {
    let flags = OpenFlags::SQLITE_OPEN_READ_WRITE
        | OpenFlags::SQLITE_OPEN_URI
        | OpenFlags::SQLITE_OPEN_NO_MUTEX;
    let conn = Connection::open_with_flags(path, flags)?;
    configure(&conn)?;
    Ok(conn)
}

/// Open or create a SQLite database at the given path
pub fn open_or_create<P: AsRef<Path>>(path: P) -> rusqlite::Result<Connection> {
    let conn = Connection::open(path)?;
    configure(&conn)?;
    Ok(conn)
}

/// Configure a connection
///
/// SQLite enforces foreign keys per connection, so this runs on every open.
pub fn configure(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute("PRAGMA foreign_keys = ON", [])?;
    conn.busy_timeout(BUSY_TIMEOUT)?;
    Ok(())
}

/// Create any missing parent directories of `path`
pub fn ensure_parent_dir(path: &Path) -> std::io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_foreign_keys_enabled() {
        let conn = Connection::open_in_memory().unwrap();
        configure(&conn).unwrap();
        let enabled: i64 = conn
            .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
            .unwrap();
        assert_eq!(enabled, 1);
    }

    #[test]
    fn test_open_existing_does_not_create() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("missing.db");
        assert!(open_existing(&path).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_ensure_parent_dir_creates_nested() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("a").join("b").join("store.db");
        ensure_parent_dir(&path).unwrap();
        assert!(dir.path().join("a").join("b").is_dir());
    }
}
