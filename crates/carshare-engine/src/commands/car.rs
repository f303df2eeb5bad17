//! Car command handlers

use carshare_core::rules::validate_name;
use carshare_core::{log_op_start, Car, EntityKind, Result};
use carshare_store::CarshareRepo;

/// Create a car owned by `company_id`
///
/// # Errors
///
/// - `Validation`: blank or over-long name
/// - `DuplicateName`: a car with this name exists
/// - `ForeignKey`: the company does not exist
pub fn car_create(repo: &CarshareRepo, company_id: i64, raw_name: &str) -> Result<Car> {
    log_op_start!("car_create", company_id = company_id);
    let start = std::time::Instant::now();

    let result = validate_name(EntityKind::Car, raw_name)
        .and_then(|name| repo.add_car(&name, company_id));

    finish!("car_create", start, result)
}

/// All cars of every company in creation order
pub fn car_list(repo: &CarshareRepo) -> Result<Vec<Car>> {
    log_op_start!("car_list");
    let start = std::time::Instant::now();
    finish!("car_list", start, repo.get_all_cars())
}

/// All cars of a company, rented or not
pub fn company_cars(repo: &CarshareRepo, company_id: i64) -> Result<Vec<Car>> {
    log_op_start!("company_cars", company_id = company_id);
    let start = std::time::Instant::now();
    finish!("company_cars", start, repo.get_company_cars(company_id))
}

/// Cars of a company that can be rented right now
pub fn available_cars(repo: &CarshareRepo, company_id: i64) -> Result<Vec<Car>> {
    log_op_start!("available_cars", company_id = company_id);
    let start = std::time::Instant::now();
    finish!(
        "available_cars",
        start,
        repo.get_available_company_cars(company_id),
    )
}
