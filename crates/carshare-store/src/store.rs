//! File-backed relational store
//!
//! Every call opens its own connection, runs a single auto-committed statement
//! and drops the connection. There is no pooling and no transaction spanning
//! two calls.

use std::path::{Path, PathBuf};

use carshare_core::{CarshareError, Result};
use rusqlite::types::Value;
use rusqlite::ToSql;

use crate::config::StoreConfig;
use crate::db;
use crate::errors::{column_error, from_rusqlite_read, from_rusqlite_write, init_error};
use crate::migrations::apply_migrations;

/// One result row: column names mapped to typed values, in select order
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    cells: Vec<(String, Value)>,
}

impl Row {
    pub fn new(cells: Vec<(String, Value)>) -> Self {
        Self { cells }
    }

    /// Value of `column` (case-insensitive), if the row has it
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.cells
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(column))
            .map(|(_, value)| value)
    }

    /// Column names in select order
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(name, _)| name.as_str())
    }

    /// Required integer column
    pub fn int(&self, column: &str) -> Result<i64> {
        match self.get(column) {
            Some(Value::Integer(v)) => Ok(*v),
            Some(other) => Err(column_error(column, &format!("expected integer, got {:?}", other))),
            None => Err(column_error(column, "missing")),
        }
    }

    /// Nullable integer column
    pub fn opt_int(&self, column: &str) -> Result<Option<i64>> {
        match self.get(column) {
            Some(Value::Null) => Ok(None),
            Some(Value::Integer(v)) => Ok(Some(*v)),
            Some(other) => Err(column_error(column, &format!("expected integer, got {:?}", other))),
            None => Err(column_error(column, "missing")),
        }
    }

    /// Required text column
    pub fn text(&self, column: &str) -> Result<String> {
        match self.get(column) {
            Some(Value::Text(v)) => Ok(v.clone()),
            Some(other) => Err(column_error(column, &format!("expected text, got {:?}", other))),
            None => Err(column_error(column, "missing")),
        }
    }
}

/// Handle on the store file
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    /// Open or create the store at `config.path` and bring its schema up to date
    ///
    /// Safe to call on an existing store: tables are only created when absent
    /// and existing rows are left alone.
    ///
    /// # Errors
    /// `StorageInit` if the directory or file cannot be created, the file is
    /// not a SQLite database, or a migration fails.
    pub fn initialize(config: &StoreConfig) -> Result<Self> {
        let path = config.path.clone();

        db::ensure_parent_dir(&path).map_err(|e| init_error(&path, e))?;
        let mut conn = db::open_or_create(&path).map_err(|e| init_error(&path, e))?;
        apply_migrations(&mut conn).map_err(|e| init_error(&path, e))?;

        tracing::debug!(path = %path.display(), "store initialized");
        Ok(Self { path })
    }

    /// Path of the store file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Run one mutating statement and return the number of affected rows
    ///
    /// # Errors
    /// Constraint violations map to `DuplicateName`, `ForeignKey`,
    /// `CarUnavailable` or `Validation`; anything else is `StorageWrite`.
    pub fn execute(&self, sql: &str, params: &[&dyn ToSql]) -> Result<usize> {
        let conn = db::open_existing(&self.path).map_err(|e| CarshareError::StorageWrite {
            reason: e.to_string(),
        })?;
        let changed = conn.execute(sql, params).map_err(from_rusqlite_write)?;

        tracing::debug!(sql = sql, changed = changed, "statement executed");
        Ok(changed)
    }

    /// Run one INSERT and return the row id the store assigned
    ///
    /// # Errors
    /// Same as [`Store::execute`].
    pub fn insert(&self, sql: &str, params: &[&dyn ToSql]) -> Result<i64> {
        let conn = db::open_existing(&self.path).map_err(|e| CarshareError::StorageWrite {
            reason: e.to_string(),
        })?;
        conn.execute(sql, params).map_err(from_rusqlite_write)?;
        let id = conn.last_insert_rowid();

        tracing::debug!(sql = sql, id = id, "row inserted");
        Ok(id)
    }

    /// Run one read statement and return its rows in order
    ///
    /// # Errors
    /// `StorageRead` on a malformed query or connection failure.
    pub fn query(&self, sql: &str, params: &[&dyn ToSql]) -> Result<Vec<Row>> {
        let conn = db::open_existing(&self.path).map_err(from_rusqlite_read)?;
        let mut stmt = conn.prepare(sql).map_err(from_rusqlite_read)?;
        let columns: Vec<String> = stmt
            .column_names()
            .into_iter()
            .map(String::from)
            .collect();

        let rows = stmt
            .query_map(params, |row| {
                columns
                    .iter()
                    .enumerate()
                    .map(|(i, name)| Ok((name.clone(), row.get::<_, Value>(i)?)))
                    .collect::<rusqlite::Result<Vec<_>>>()
                    .map(Row::new)
            })
            .map_err(from_rusqlite_read)?
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(from_rusqlite_read)?;

        tracing::debug!(sql = sql, rows = rows.len(), "query returned");
        Ok(rows)
    }
}
