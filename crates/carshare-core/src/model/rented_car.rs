use serde::{Deserialize, Serialize};

use super::{Car, Company};

/// A customer's active rental resolved to the car and its owning company
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentedCar {
    pub car: Car,
    pub company: Company,
}

impl std::fmt::Display for RentedCar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Your rented car:\n{}\nCompany:\n{}",
            self.car.name, self.company.name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_menu_text() {
        let rented = RentedCar {
            car: Car::new(1, 1, "Model X"),
            company: Company::new(1, "Sixt"),
        };

        assert_eq!(
            rented.to_string(),
            "Your rented car:\nModel X\nCompany:\nSixt"
        );
    }
}
