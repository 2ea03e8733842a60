//! Logging utilities.
//!
//! Centralizes logger initialization behind the standard `log` facade; the
//! backend is `env_logger` and nothing else in the workspace knows that.

mod init;

pub use init::{init, init_with_filter};
