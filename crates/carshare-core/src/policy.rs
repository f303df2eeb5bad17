//! Rental eligibility policy
//!
//! The repository writes whatever it is asked to. These checks run in the
//! caller before a rental or return is written.
//!
//! The check and the write are separate steps. With more than one writer two
//! callers can both pass `check_rental` for the same car; only the first
//! write succeeds because the store keeps a unique index on active rentals.
//! Callers that need the check and write as one step use
//! `CarshareRepo::rent_car_if_available`.

use crate::errors::{CarshareError, Result};
use crate::model::{Car, Customer};

/// Check that `customer` may rent car `car_id`
///
/// `available` is the owning company's available cars at the time of the check.
///
/// # Errors
/// - `AlreadyRenting` if the customer holds a car
/// - `CarUnavailable` if the car is not in `available`
pub fn check_rental(customer: &Customer, car_id: i64, available: &[Car]) -> Result<()> {
    if let Some(rented) = customer.rented_car_id {
        return Err(CarshareError::AlreadyRenting {
            customer_id: customer.id,
            car_id: rented,
        });
    }

    if !available.iter().any(|car| car.id == car_id) {
        return Err(CarshareError::CarUnavailable { car_id });
    }

    Ok(())
}

/// Check that `customer` has a car to return and yield its id
///
/// # Errors
/// Returns `NoActiveRental` if the customer holds no car.
pub fn check_return(customer: &Customer) -> Result<i64> {
    customer
        .rented_car_id
        .ok_or(CarshareError::NoActiveRental {
            customer_id: customer.id,
        })
}
