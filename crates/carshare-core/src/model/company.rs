use serde::{Deserialize, Serialize};

/// Company - owns cars
///
/// Created once through the repository and never mutated or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    /// Store-assigned identifier
    pub id: i64,

    /// Unique, non-empty name
    pub name: String,
}

impl Company {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
