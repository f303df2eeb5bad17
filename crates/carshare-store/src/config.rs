//! Store location configuration

use std::path::{Path, PathBuf};

/// File name used when none is given on the command line
pub const DEFAULT_DB_FILE_NAME: &str = "carsharing.db";

/// Where the store file lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub path: PathBuf,
}

impl StoreConfig {
    /// Store file `file_name` inside `dir`
    pub fn new(dir: impl AsRef<Path>, file_name: &str) -> Self {
        Self {
            path: dir.as_ref().join(file_name),
        }
    }

    /// Store file at an explicit path
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(".", DEFAULT_DB_FILE_NAME)
    }
}
