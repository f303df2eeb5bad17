//! Customer command handlers

use carshare_core::rules::validate_name;
use carshare_core::{log_op_start, CarshareError, Customer, EntityKind, Result};
use carshare_store::CarshareRepo;

/// Create a customer with no rental
///
/// # Errors
///
/// - `Validation`: blank or over-long name
/// - `DuplicateName`: a customer with this name exists
pub fn customer_create(repo: &CarshareRepo, raw_name: &str) -> Result<Customer> {
    log_op_start!("customer_create");
    let start = std::time::Instant::now();

    let result = validate_name(EntityKind::Customer, raw_name)
        .and_then(|name| repo.add_customer(&name));

    finish!("customer_create", start, result)
}

/// List all customers in creation order
pub fn customer_list(repo: &CarshareRepo) -> Result<Vec<Customer>> {
    log_op_start!("customer_list");
    let start = std::time::Instant::now();
    finish!("customer_list", start, repo.get_all_customers())
}

/// Current snapshot of one customer
///
/// # Errors
///
/// - `NotFound`: no customer with this id
pub fn customer_get(repo: &CarshareRepo, customer_id: i64) -> Result<Customer> {
    log_op_start!("customer_get", customer_id = customer_id);
    let start = std::time::Instant::now();
    finish!("customer_get", start, fetch_customer(repo, customer_id))
}

// Lookup without lifecycle events, for handlers that log their own op.
pub(crate) fn fetch_customer(repo: &CarshareRepo, customer_id: i64) -> Result<Customer> {
    repo.get_customer_by_id(customer_id)?
        .ok_or(CarshareError::NotFound {
            entity: EntityKind::Customer,
            id: customer_id,
        })
}
