//! Logging setup for the label tooling.
//!
//! Configuration lives in [`LoggerConfig`], which can be built in code,
//! deserialized, or read from `LABELS_LOG_*` environment variables.

mod config;
mod error;
mod init;
mod object;

pub use config::{
    ENV_LOG_FORMAT, ENV_LOG_LEVEL, ENV_LOG_OUTPUT, ENV_LOG_TZ, ENV_NO_COLOR, LoggerConfig,
};
pub use error::{LoggerError, LoggerResult};
pub use init::init_logger;
pub use object::{LoggerFormat, LoggerLevel, LoggerOutput, LoggerRfc3339, LoggerTimeZone};
