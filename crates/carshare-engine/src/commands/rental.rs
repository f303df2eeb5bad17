//! Rental command handlers
//!
//! Renting is check-then-act: the customer and the car's company availability
//! are read, the policy is applied, then the rental is written. Under a single
//! interactive writer the check holds until the write. With several writers
//! the unique index on active rentals rejects the losing write with
//! `CarUnavailable`.

use carshare_core::policy::{check_rental, check_return};
use carshare_core::{log_op_start, Car, CarshareError, EntityKind, RentedCar, Result};
use carshare_store::CarshareRepo;

use super::customer::fetch_customer;

/// Rent `car_id` to `customer_id`
///
/// Re-reads the customer from the store rather than trusting a cached copy.
///
/// # Errors
///
/// - `NotFound`: customer or car does not exist
/// - `AlreadyRenting`: the customer holds a car
/// - `CarUnavailable`: another customer holds the car
pub fn car_rent(repo: &CarshareRepo, customer_id: i64, car_id: i64) -> Result<Car> {
    log_op_start!("car_rent", customer_id = customer_id, car_id = car_id);
    let start = std::time::Instant::now();
    finish!("car_rent", start, car_rent_impl(repo, customer_id, car_id))
}

fn car_rent_impl(repo: &CarshareRepo, customer_id: i64, car_id: i64) -> Result<Car> {
    let customer = fetch_customer(repo, customer_id)?;
    let car = repo
        .get_car_by_id(car_id)?
        .ok_or(CarshareError::NotFound {
            entity: EntityKind::Car,
            id: car_id,
        })?;

    let available = repo.get_available_company_cars(car.company_id)?;
    check_rental(&customer, car.id, &available)?;

    repo.rent_car_to_customer(car.id, customer.id)?;
    Ok(car)
}

/// Return the car `customer_id` holds
///
/// # Errors
///
/// - `NotFound`: customer does not exist
/// - `NoActiveRental`: the customer holds no car
pub fn car_return(repo: &CarshareRepo, customer_id: i64) -> Result<Car> {
    log_op_start!("car_return", customer_id = customer_id);
    let start = std::time::Instant::now();
    finish!("car_return", start, car_return_impl(repo, customer_id))
}

fn car_return_impl(repo: &CarshareRepo, customer_id: i64) -> Result<Car> {
    let customer = fetch_customer(repo, customer_id)?;
    let car_id = check_return(&customer)?;
    let car = repo
        .get_car_by_id(car_id)?
        .ok_or(CarshareError::NotFound {
            entity: EntityKind::Car,
            id: car_id,
        })?;

    repo.return_rented_car(customer.id)?;
    Ok(car)
}

/// The car `customer_id` holds, with its company
///
/// # Errors
///
/// - `NotFound`: customer does not exist
/// - `NoActiveRental`: the customer holds no car
pub fn rented_car_info(repo: &CarshareRepo, customer_id: i64) -> Result<RentedCar> {
    log_op_start!("rented_car_info", customer_id = customer_id);
    let start = std::time::Instant::now();

    let result = fetch_customer(repo, customer_id).and_then(|customer| {
        repo.get_rented_car(customer.id)?
            .ok_or(CarshareError::NoActiveRental {
                customer_id: customer.id,
            })
    });

    finish!("rented_car_info", start, result)
}
