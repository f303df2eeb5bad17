#![allow(dead_code)]

use carshare_store::{CarshareRepo, Store, StoreConfig};
use tempfile::TempDir;

/// Fresh repository over a throwaway store file
///
/// Keep the `TempDir` alive for as long as the repository is used.
pub fn setup_repo() -> (TempDir, CarshareRepo) {
    let dir = TempDir::new().unwrap();
    let store = Store::initialize(&StoreConfig::at(dir.path().join("carsharing.db"))).unwrap();
    (dir, CarshareRepo::new(store))
}
