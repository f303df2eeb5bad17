use serde::{Deserialize, Serialize};

/// Car - belongs to exactly one company
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car {
    /// Store-assigned identifier
    pub id: i64,

    /// Owning company
    pub company_id: i64,

    /// Unique across all cars, non-empty
    pub name: String,
}

impl Car {
    pub fn new(id: i64, company_id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            company_id,
            name: name.into(),
        }
    }
}
