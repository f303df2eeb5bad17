//! Canonical logging macros
//!
//! These macros provide a structured, consistent way to log operations.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use carshare_core::log_op_start;
/// log_op_start!("company_create");
/// log_op_start!("car_create", company_id = 3);
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::logging_facility::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::logging_facility::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use carshare_core::log_op_end;
/// log_op_end!("company_create", duration_ms = 42);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::logging_facility::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::logging_facility::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an operation error
///
/// Recoverable errors are logged at warn, storage failures at error.
///
/// # Example
///
/// ```
/// # use carshare_core::{log_op_error, CarshareError};
/// let err = CarshareError::NoActiveRental { customer_id: 1 };
/// log_op_error!("car_return", &err, duration_ms = 10);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        let err: &$crate::errors::CarshareError = $err;
        if err.is_recoverable() {
            tracing::warn!(
                component = module_path!(),
                op = $op,
                event = $crate::logging_facility::schema::EVENT_END_ERROR,
                duration_ms = $duration,
                err_kind = ?err.kind(),
                err_code = err.code(),
            );
        } else {
            tracing::error!(
                component = module_path!(),
                op = $op,
                event = $crate::logging_facility::schema::EVENT_END_ERROR,
                duration_ms = $duration,
                err_kind = ?err.kind(),
                err_code = err.code(),
                error = %err,
            );
        }
    }};
}
