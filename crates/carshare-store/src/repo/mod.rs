//! Repository layer mapping domain entities to store rows

pub mod mapping;
pub mod sqlite_repo;

pub use sqlite_repo::CarshareRepo;
