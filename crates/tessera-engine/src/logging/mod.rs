//! Logger setup for hosts.
//!
//! Library code only uses the `log` macros; a binary calls [`init_logging`]
//! once to install `env_logger` as the backend.

mod init;

pub use init::{LoggingConfig, init_logging};
