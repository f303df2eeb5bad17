//! Structured logging facility for the car-sharing store
//!
//! This module provides:
//! - Single initialization point via `init(profile)`
//! - Structured logging macros (`log_op_start!`, `log_op_end!`, `log_op_error!`)
//! - Canonical field keys and event names in `schema`
//! - Test capture mode for deterministic assertions
//!
//! # Usage
//!
//! ```rust
//! use carshare_core::logging_facility::{init, Profile};
//!
//! // Initialize once at application startup
//! init(Profile::Interactive);
//! ```
//!
//! # Logging Macros
//!
//! - `log_op_start!(op, ...)` - Log operation start
//! - `log_op_end!(op, duration_ms = ...)` - Log operation end
//! - `log_op_error!(op, err, duration_ms = ...)` - Log operation error

pub mod init;
pub mod macros;
pub mod schema;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
