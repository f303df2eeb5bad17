//! Error handling for carshare-store
//!
//! Classifies rusqlite failures into the core taxonomy. Constraint errors carry
//! only what SQLite reports: `DuplicateName` has an empty name and
//! `CarUnavailable` a zero car id until the repository adds the values it
//! passed in (`with_name`, `with_car_id`).

use carshare_core::{CarshareError, EntityKind};
use rusqlite::ffi;
use std::path::Path;

/// Constraint classes the schema can raise
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    /// UNIQUE on a NAME column
    DuplicateName(EntityKind),
    /// UNIQUE on CUSTOMER.RENTED_CAR_ID
    ActiveRental,
    /// FOREIGN KEY
    ForeignKey,
    /// CHECK (NAME <> '')
    EmptyName,
}

/// Classify a rusqlite error as a schema constraint violation, if it is one
pub fn violation(err: &rusqlite::Error) -> Option<Violation> {
    let rusqlite::Error::SqliteFailure(failure, message) = err else {
        return None;
    };
    if failure.code != rusqlite::ErrorCode::ConstraintViolation {
        return None;
    }

    match failure.extended_code {
        ffi::SQLITE_CONSTRAINT_FOREIGNKEY => Some(Violation::ForeignKey),
        ffi::SQLITE_CONSTRAINT_CHECK => Some(Violation::EmptyName),
        ffi::SQLITE_CONSTRAINT_UNIQUE | ffi::SQLITE_CONSTRAINT_PRIMARYKEY => {
            // "UNIQUE constraint failed: COMPANY.NAME"
            let column = message.as_deref()?.rsplit(": ").next()?;
            let (table, column) = column.split_once('.')?;
            if column.eq_ignore_ascii_case("RENTED_CAR_ID") {
                Some(Violation::ActiveRental)
            } else if column.eq_ignore_ascii_case("NAME") {
                EntityKind::from_table(table).map(Violation::DuplicateName)
            } else {
                None
            }
        }
        _ => None,
    }
}

/// Map a failed mutating statement into the taxonomy
pub fn from_rusqlite_write(err: rusqlite::Error) -> CarshareError {
    match violation(&err) {
        Some(Violation::DuplicateName(entity)) => CarshareError::DuplicateName {
            entity,
            name: String::new(),
        },
        Some(Violation::ActiveRental) => CarshareError::CarUnavailable { car_id: 0 },
        Some(Violation::ForeignKey) => CarshareError::ForeignKey {
            reason: err.to_string(),
        },
        Some(Violation::EmptyName) => CarshareError::Validation {
            reason: "Name can't be empty!".to_string(),
        },
        None => CarshareError::StorageWrite {
            reason: err.to_string(),
        },
    }
}

/// Map a failed read statement into the taxonomy
pub fn from_rusqlite_read(err: rusqlite::Error) -> CarshareError {
    CarshareError::StorageRead {
        reason: err.to_string(),
    }
}

/// Create a store initialization error
pub fn init_error(path: &Path, reason: impl std::fmt::Display) -> CarshareError {
    CarshareError::StorageInit {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Create a read error for a row that does not have the expected shape
pub fn column_error(column: &str, reason: &str) -> CarshareError {
    CarshareError::StorageRead {
        reason: format!("column {}: {}", column, reason),
    }
}
