//! Carshare Engine - command handlers over the repository
//!
//! The CLI calls these instead of the repository directly. Each handler
//! validates input, applies the rental policy where relevant and owns the
//! lifecycle logging for its operation.

pub mod commands;
