//! SQLite repository implementation
//!
//! Translates typed entity operations into single store statements and maps
//! the resulting rows back into entities.

use carshare_core::{Car, CarshareError, Company, Customer, EntityKind, RentedCar, Result};
use rusqlite::params;

use super::mapping::{car_from_row, company_from_row, customer_from_row, map_rows};
use crate::store::Store;

/// Repository for companies, cars and customers
#[derive(Debug, Clone)]
pub struct CarshareRepo {
    store: Store,
}

impl CarshareRepo {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Underlying store
    pub fn store(&self) -> &Store {
        &self.store
    }

    // ===== Writes =====

    /// Insert a company and return it with its assigned id
    ///
    /// # Errors
    /// `DuplicateName` if a company with this name exists.
    pub fn add_company(&self, name: &str) -> Result<Company> {
        let id = self
            .store
            .insert("INSERT INTO COMPANY (NAME) VALUES (?1)", params![name])
            .map_err(|e| e.with_name(name))?;

        Ok(Company::new(id, name))
    }

    /// Insert a car owned by `company_id` and return it with its assigned id
    ///
    /// # Errors
    /// `DuplicateName` if a car with this name exists, `ForeignKey` if the
    /// company does not exist.
    pub fn add_car(&self, name: &str, company_id: i64) -> Result<Car> {
        let id = self
            .store
            .insert(
                "INSERT INTO CAR (NAME, COMPANY_ID) VALUES (?1, ?2)",
                params![name, company_id],
            )
            .map_err(|e| {
                e.with_name(name)
                    .with_missing(EntityKind::Company, company_id)
            })?;

        Ok(Car::new(id, company_id, name))
    }

    /// Insert a customer with no rental and return it with its assigned id
    ///
    /// # Errors
    /// `DuplicateName` if a customer with this name exists.
    pub fn add_customer(&self, name: &str) -> Result<Customer> {
        let id = self
            .store
            .insert("INSERT INTO CUSTOMER (NAME) VALUES (?1)", params![name])
            .map_err(|e| e.with_name(name))?;

        Ok(Customer::new(id, name, None))
    }

    /// Record that `customer_id` holds `car_id`
    ///
    /// No eligibility check is made here; see `carshare_core::policy`.
    ///
    /// # Errors
    /// `ForeignKey` if the car or customer does not exist, `CarUnavailable`
    /// if another customer already holds the car.
    pub fn rent_car_to_customer(&self, car_id: i64, customer_id: i64) -> Result<()> {
        let changed = self
            .store
            .execute(
                "UPDATE CUSTOMER SET RENTED_CAR_ID = ?1 WHERE ID = ?2",
                params![car_id, customer_id],
            )
            .map_err(|e| {
                e.with_car_id(car_id)
                    .with_missing(EntityKind::Car, car_id)
            })?;

        if changed == 0 {
            return Err(missing_customer(customer_id));
        }
        Ok(())
    }

    /// Rent `car_id` to `customer_id` only if neither is already engaged
    ///
    /// The eligibility check and the write are one conditional UPDATE, so two
    /// concurrent callers cannot both succeed for the same car. Returns
    /// `false` when the customer already holds a car or the car is taken.
    ///
    /// # Errors
    /// `ForeignKey` if the car or customer does not exist.
    pub fn rent_car_if_available(&self, car_id: i64, customer_id: i64) -> Result<bool> {
        let changed = self
            .store
            .execute(
                "UPDATE CUSTOMER SET RENTED_CAR_ID = ?1
                 WHERE ID = ?2
                   AND RENTED_CAR_ID IS NULL
                   AND NOT EXISTS (SELECT 1 FROM CUSTOMER WHERE RENTED_CAR_ID = ?1)",
                params![car_id, customer_id],
            )
            .map_err(|e| {
                e.with_car_id(car_id)
                    .with_missing(EntityKind::Car, car_id)
            })?;

        if changed == 0 {
            if self.get_customer_by_id(customer_id)?.is_none() {
                return Err(missing_customer(customer_id));
            }
            if self.get_car_by_id(car_id)?.is_none() {
                return Err(CarshareError::ForeignKey {
                    reason: format!("{} {} does not exist", EntityKind::Car, car_id),
                });
            }
            return Ok(false);
        }
        Ok(true)
    }

    /// Clear the customer's rental
    ///
    /// # Errors
    /// `ForeignKey` if the customer does not exist.
    pub fn return_rented_car(&self, customer_id: i64) -> Result<()> {
        let changed = self.store.execute(
            "UPDATE CUSTOMER SET RENTED_CAR_ID = NULL WHERE ID = ?1",
            params![customer_id],
        )?;

        if changed == 0 {
            return Err(missing_customer(customer_id));
        }
        Ok(())
    }

    // ===== Reads =====

    pub fn get_car_by_id(&self, id: i64) -> Result<Option<Car>> {
        let rows = self.store.query(
            "SELECT ID, COMPANY_ID, NAME FROM CAR WHERE ID = ?1",
            params![id],
        )?;
        rows.first().map(car_from_row).transpose()
    }

    pub fn get_company_by_id(&self, id: i64) -> Result<Option<Company>> {
        let rows = self
            .store
            .query("SELECT ID, NAME FROM COMPANY WHERE ID = ?1", params![id])?;
        rows.first().map(company_from_row).transpose()
    }

    pub fn get_customer_by_id(&self, id: i64) -> Result<Option<Customer>> {
        let rows = self.store.query(
            "SELECT ID, NAME, RENTED_CAR_ID FROM CUSTOMER WHERE ID = ?1",
            params![id],
        )?;
        rows.first().map(customer_from_row).transpose()
    }

    /// All companies in insertion order
    pub fn get_all_companies(&self) -> Result<Vec<Company>> {
        let rows = self
            .store
            .query("SELECT ID, NAME FROM COMPANY ORDER BY ID", params![])?;
        map_rows(&rows, company_from_row)
    }

    /// All cars in insertion order
    pub fn get_all_cars(&self) -> Result<Vec<Car>> {
        let rows = self.store.query(
            "SELECT ID, COMPANY_ID, NAME FROM CAR ORDER BY ID",
            params![],
        )?;
        map_rows(&rows, car_from_row)
    }

    /// All customers in insertion order
    pub fn get_all_customers(&self) -> Result<Vec<Customer>> {
        let rows = self.store.query(
            "SELECT ID, NAME, RENTED_CAR_ID FROM CUSTOMER ORDER BY ID",
            params![],
        )?;
        map_rows(&rows, customer_from_row)
    }

    /// Cars owned by `company_id`, in insertion order
    pub fn get_company_cars(&self, company_id: i64) -> Result<Vec<Car>> {
        let rows = self.store.query(
            "SELECT ID, COMPANY_ID, NAME FROM CAR WHERE COMPANY_ID = ?1 ORDER BY ID",
            params![company_id],
        )?;
        map_rows(&rows, car_from_row)
    }

    /// Cars owned by `company_id` that no customer currently holds
    pub fn get_available_company_cars(&self, company_id: i64) -> Result<Vec<Car>> {
        let rows = self.store.query(
            "SELECT CAR.ID AS ID, CAR.COMPANY_ID AS COMPANY_ID, CAR.NAME AS NAME FROM CAR
             WHERE CAR.COMPANY_ID = ?1
               AND NOT EXISTS (
                   SELECT 1 FROM CUSTOMER WHERE CUSTOMER.RENTED_CAR_ID = CAR.ID
               )
             ORDER BY CAR.ID",
            params![company_id],
        )?;
        map_rows(&rows, car_from_row)
    }

    /// The customer's active rental with its owning company
    ///
    /// `None` when the customer does not exist or holds no car.
    pub fn get_rented_car(&self, customer_id: i64) -> Result<Option<RentedCar>> {
        let Some(car_id) = self
            .get_customer_by_id(customer_id)?
            .and_then(|customer| customer.rented_car_id)
        else {
            return Ok(None);
        };

        let car = self.get_car_by_id(car_id)?.ok_or_else(|| dangling(EntityKind::Car, car_id))?;
        let company = self
            .get_company_by_id(car.company_id)?
            .ok_or_else(|| dangling(EntityKind::Company, car.company_id))?;

        Ok(Some(RentedCar { car, company }))
    }
}

fn missing_customer(customer_id: i64) -> CarshareError {
    CarshareError::ForeignKey {
        reason: format!("{} {} does not exist", EntityKind::Customer, customer_id),
    }
}

// Foreign keys are enforced, so a dangling reference means the file was
// edited outside the store.
fn dangling(entity: EntityKind, id: i64) -> CarshareError {
    CarshareError::StorageRead {
        reason: format!("dangling reference to {} {}", entity, id),
    }
}
