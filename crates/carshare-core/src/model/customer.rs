use serde::{Deserialize, Serialize};

/// Customer - may hold at most one rented car
///
/// A Customer value is a snapshot of the store at read time. Renting or
/// returning goes through the repository; re-fetch the customer afterwards
/// to observe the new `rented_car_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Store-assigned identifier
    pub id: i64,

    /// Unique, non-empty name
    pub name: String,

    /// Car currently rented, if any
    pub rented_car_id: Option<i64>,
}

impl Customer {
    pub fn new(id: i64, name: impl Into<String>, rented_car_id: Option<i64>) -> Self {
        Self {
            id,
            name: name.into(),
            rented_car_id,
        }
    }

    /// Check if this customer currently holds a car
    pub fn has_rental(&self) -> bool {
        self.rented_car_id.is_some()
    }

    /// Check if this customer holds the given car
    pub fn is_renting(&self, car_id: i64) -> bool {
        self.rented_car_id == Some(car_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_customer_has_no_rental() {
        let customer = Customer::new(1, "Alice", None);

        assert_eq!(customer.name, "Alice");
        assert!(!customer.has_rental());
        assert!(!customer.is_renting(1));
    }

    #[test]
    fn test_is_renting() {
        let customer = Customer::new(1, "Alice", Some(7));

        assert!(customer.has_rental());
        assert!(customer.is_renting(7));
        assert!(!customer.is_renting(8));
    }
}
