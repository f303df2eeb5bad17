//! JSON snapshot of the whole store

use std::io::Write;

use carshare_core::{Car, Company, Customer};
use carshare_engine::commands::{car, company, customer};
use carshare_store::CarshareRepo;
use serde::Serialize;

use crate::error::CliResult;

#[derive(Debug, Serialize)]
pub struct Dump {
    pub companies: Vec<Company>,
    pub cars: Vec<Car>,
    pub customers: Vec<Customer>,
}

impl Dump {
    /// Read every entity from the store
    pub fn collect(repo: &CarshareRepo) -> CliResult<Self> {
        Ok(Self {
            companies: company::company_list(repo)?,
            cars: car::car_list(repo)?,
            customers: customer::customer_list(repo)?,
        })
    }
}

/// Write the store as pretty-printed JSON followed by a newline
pub fn write_dump<W: Write>(repo: &CarshareRepo, mut out: W) -> CliResult<()> {
    let dump = Dump::collect(repo)?;
    serde_json::to_writer_pretty(&mut out, &dump)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use carshare_engine::commands::rental::car_rent;
    use carshare_store::{Store, StoreConfig};
    use tempfile::TempDir;

    #[test]
    fn test_dump_lists_every_entity() {
        let dir = TempDir::new().unwrap();
        let store = Store::initialize(&StoreConfig::at(dir.path().join("carsharing.db"))).unwrap();
        let repo = CarshareRepo::new(store);
        let sixt = company::company_create(&repo, "Sixt").unwrap();
        let model_x = car::car_create(&repo, sixt.id, "Model X").unwrap();
        let alice = customer::customer_create(&repo, "Alice").unwrap();
        car_rent(&repo, alice.id, model_x.id).unwrap();

        let mut out = Vec::new();
        write_dump(&repo, &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(value["companies"][0]["name"], "Sixt");
        assert_eq!(value["cars"][0]["company_id"], sixt.id);
        assert_eq!(value["customers"][0]["rented_car_id"], model_x.id);
    }
}
