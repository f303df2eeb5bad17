//! Carshare Core - domain kernel for the car-sharing store
//!
//! This crate provides the pieces shared by every layer above it:
//! - Company, Car and Customer entities plus the derived RentedCar view
//! - The error taxonomy with stable error codes
//! - Name validation applied before anything reaches the store
//! - The rental eligibility policy
//! - The structured logging facility

pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod policy;
pub mod rules;

// Re-export commonly used types
pub use errors::{CarshareError, ExErrorKind, Result};
pub use model::{Car, Company, Customer, EntityKind, RentedCar};
