//! Logging setup.
//!
//! The library itself only talks to the `log` facade. Binaries call
//! [`init_logging`] early in `main` to install `env_logger` as the backend.

mod init;

pub use init::{init_logging, LoggingConfig};
