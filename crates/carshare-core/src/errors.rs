use thiserror::Error;

use crate::model::EntityKind;

/// Result type alias using CarshareError
pub type Result<T> = std::result::Result<T, CarshareError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// handling, log fields and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Storage
    StorageInit,
    StorageWrite,
    StorageRead,

    // Constraint violations
    DuplicateName,
    ForeignKey,

    // Input
    Validation,
    NotFound,

    // Rental policy
    AlreadyRenting,
    NoActiveRental,
    CarUnavailable,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::StorageInit => "ERR_STORAGE_INIT",
            ExErrorKind::StorageWrite => "ERR_STORAGE_WRITE",
            ExErrorKind::StorageRead => "ERR_STORAGE_READ",
            ExErrorKind::DuplicateName => "ERR_DUPLICATE_NAME",
            ExErrorKind::ForeignKey => "ERR_FOREIGN_KEY",
            ExErrorKind::Validation => "ERR_VALIDATION",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::AlreadyRenting => "ERR_ALREADY_RENTING",
            ExErrorKind::NoActiveRental => "ERR_NO_ACTIVE_RENTAL",
            ExErrorKind::CarUnavailable => "ERR_CAR_UNAVAILABLE",
        }
    }

    /// Whether a caller can report this error and carry on
    ///
    /// Storage failures are fatal for the process; everything else leaves the
    /// store untouched and only needs to be shown to the user.
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            ExErrorKind::StorageInit | ExErrorKind::StorageWrite | ExErrorKind::StorageRead
        )
    }
}

// ========== End Error Facility ==========

/// Error taxonomy for car-sharing operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CarshareError {
    // ===== Storage Errors =====
    /// Store file could not be created, opened or migrated
    #[error("Cannot initialize store at {path}: {reason}")]
    StorageInit { path: String, reason: String },

    /// A mutating statement failed for a reason other than a constraint
    #[error("Store write failed: {reason}")]
    StorageWrite { reason: String },

    /// A read statement failed or returned an unexpected shape
    #[error("Store read failed: {reason}")]
    StorageRead { reason: String },

    // ===== Constraint Errors =====
    /// Another entity of the same kind already uses this name
    #[error("A {entity} named '{name}' already exists")]
    DuplicateName { entity: EntityKind, name: String },

    /// A referenced company, car or customer does not exist
    #[error("Invalid reference: {reason}")]
    ForeignKey { reason: String },

    // ===== Validation Errors =====
    /// Input rejected before reaching the store
    #[error("{reason}")]
    Validation { reason: String },

    /// Entity looked up by id does not exist
    #[error("{entity} {id} not found")]
    NotFound { entity: EntityKind, id: i64 },

    // ===== Rental Errors =====
    /// Customer already holds a car
    #[error("Customer {customer_id} has already rented car {car_id}")]
    AlreadyRenting { customer_id: i64, car_id: i64 },

    /// Customer has no car to return
    #[error("Customer {customer_id} has no rented car")]
    NoActiveRental { customer_id: i64 },

    /// Car is held by another customer
    #[error("Car {car_id} is not available")]
    CarUnavailable { car_id: i64 },
}

impl CarshareError {
    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        match self {
            CarshareError::StorageInit { .. } => ExErrorKind::StorageInit,
            CarshareError::StorageWrite { .. } => ExErrorKind::StorageWrite,
            CarshareError::StorageRead { .. } => ExErrorKind::StorageRead,
            CarshareError::DuplicateName { .. } => ExErrorKind::DuplicateName,
            CarshareError::ForeignKey { .. } => ExErrorKind::ForeignKey,
            CarshareError::Validation { .. } => ExErrorKind::Validation,
            CarshareError::NotFound { .. } => ExErrorKind::NotFound,
            CarshareError::AlreadyRenting { .. } => ExErrorKind::AlreadyRenting,
            CarshareError::NoActiveRental { .. } => ExErrorKind::NoActiveRental,
            CarshareError::CarUnavailable { .. } => ExErrorKind::CarUnavailable,
        }
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind().code()
    }

    /// Whether the operation can simply be retried with different input
    pub fn is_recoverable(&self) -> bool {
        self.kind().is_recoverable()
    }

    /// Attach the offending name to a `DuplicateName`
    ///
    /// The store only learns the table from SQLite, not the value.
    pub fn with_name(self, name: &str) -> Self {
        match self {
            CarshareError::DuplicateName { entity, .. } => CarshareError::DuplicateName {
                entity,
                name: name.to_string(),
            },
            other => other,
        }
    }

    /// Attach the contested car id to a `CarUnavailable`
    pub fn with_car_id(self, car_id: i64) -> Self {
        match self {
            CarshareError::CarUnavailable { .. } => CarshareError::CarUnavailable { car_id },
            other => other,
        }
    }

    /// Replace the reason of a `ForeignKey` with one naming the missing row
    pub fn with_missing(self, entity: EntityKind, id: i64) -> Self {
        match self {
            CarshareError::ForeignKey { .. } => CarshareError::ForeignKey {
                reason: format!("{} {} does not exist", entity, id),
            },
            other => other,
        }
    }
}
