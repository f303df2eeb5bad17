use serde::{Deserialize, Serialize};

/// The three entity tables of the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Company,
    Car,
    Customer,
}

impl EntityKind {
    /// Table name as declared in the schema
    pub fn table(&self) -> &'static str {
        match self {
            EntityKind::Company => "COMPANY",
            EntityKind::Car => "CAR",
            EntityKind::Customer => "CUSTOMER",
        }
    }

    /// Resolve a schema table name (case-insensitive)
    pub fn from_table(table: &str) -> Option<Self> {
        [EntityKind::Company, EntityKind::Car, EntityKind::Customer]
            .into_iter()
            .find(|kind| kind.table().eq_ignore_ascii_case(table))
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            EntityKind::Company => "company",
            EntityKind::Car => "car",
            EntityKind::Customer => "customer",
        };
        f.write_str(label)
    }
}
