//! Logging utilities.
//!
//! Centralizes logger initialization. The crate logs through the standard
//! `log` facade; `env_logger` is wired up here.

mod init;

pub use init::{init_logging, LoggingConfig};
