//! Company command handlers

use carshare_core::rules::validate_name;
use carshare_core::{log_op_start, Company, EntityKind, Result};
use carshare_store::CarshareRepo;

/// Create a company
///
/// # Errors
///
/// - `Validation`: blank or over-long name
/// - `DuplicateName`: a company with this name exists
/// - `StorageWrite`: database error
pub fn company_create(repo: &CarshareRepo, raw_name: &str) -> Result<Company> {
    log_op_start!("company_create");
    let start = std::time::Instant::now();

    let result = validate_name(EntityKind::Company, raw_name)
        .and_then(|name| repo.add_company(&name));

    finish!("company_create", start, result)
}

/// List all companies in creation order
pub fn company_list(repo: &CarshareRepo) -> Result<Vec<Company>> {
    log_op_start!("company_list");
    let start = std::time::Instant::now();
    finish!("company_list", start, repo.get_all_companies())
}
