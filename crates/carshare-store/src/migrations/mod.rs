//! Migration framework
//!
//! Provides:
//! - Migration runner recording a checksum per applied migration
//! - Idempotent application with drift detection
//! - Embedded SQL migrations

mod checksums;
mod embedded;
mod runner;

pub use embedded::{get_migrations, Migration};
pub use runner::{apply_migrations, MigrationError};
