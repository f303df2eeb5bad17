//! Carshare Store - Persistence layer with SQLite
//!
//! Provides:
//! - File-backed SQLite store with one connection per statement
//! - Embedded, checksummed schema migrations
//! - Row mapping from column names to typed values
//! - `CarshareRepo`, the typed repository over companies, cars and customers

pub mod config;
pub mod db;
pub mod errors;
pub mod migrations;
pub mod repo;
pub mod store;

// Re-export key types
pub use carshare_core::Result;
pub use config::StoreConfig;
pub use repo::CarshareRepo;
pub use store::{Row, Store};
