//! Command handlers with boundary logging.
//!
//! ## Logging Ownership
//!
//! Handlers here own lifecycle logging:
//! - `log_op_start!` at entry
//! - `log_op_end!` on success
//! - `log_op_error!` on failure
//!
//! Lower layers (store, core) use only `tracing::debug!()` for internal details.

/// Log the end or error of `op`, begun at `start`, and pass the result through
///
/// A macro so the events carry the calling handler's module as `component`,
/// matching its `log_op_start!`.
macro_rules! finish {
    ($op:expr, $start:expr, $result:expr $(,)?) => {{
        let result = $result;
        let duration_ms = $start.elapsed().as_millis() as u64;
        match &result {
            Ok(_) => {
                carshare_core::log_op_end!($op, duration_ms = duration_ms);
            }
            Err(e) => {
                carshare_core::log_op_error!($op, e, duration_ms = duration_ms);
            }
        }
        result
    }};
}

pub mod car;
pub mod company;
pub mod customer;
pub mod rental;
