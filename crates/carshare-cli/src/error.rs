use std::io;

use carshare_core::CarshareError;
use thiserror::Error;

/// Failures that end the program
///
/// Recoverable `CarshareError`s are reported inside the session and never
/// reach this type.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Store(#[from] CarshareError),

    #[error("Terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("Cannot encode dump: {0}")]
    Json(#[from] serde_json::Error),
}

pub type CliResult<T> = std::result::Result<T, CliError>;
