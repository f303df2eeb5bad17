//! Row to entity mapping
//!
//! Column names match the schema; lookups are case-insensitive.

use carshare_core::{Car, Company, Customer, Result};

use crate::store::Row;

pub fn company_from_row(row: &Row) -> Result<Company> {
    Ok(Company::new(row.int("ID")?, row.text("NAME")?))
}

pub fn car_from_row(row: &Row) -> Result<Car> {
    Ok(Car::new(
        row.int("ID")?,
        row.int("COMPANY_ID")?,
        row.text("NAME")?,
    ))
}

pub fn customer_from_row(row: &Row) -> Result<Customer> {
    Ok(Customer::new(
        row.int("ID")?,
        row.text("NAME")?,
        row.opt_int("RENTED_CAR_ID")?,
    ))
}

/// Map every row, failing on the first malformed one
pub fn map_rows<T>(rows: &[Row], map: fn(&Row) -> Result<T>) -> Result<Vec<T>> {
    rows.iter().map(map).collect()
}
