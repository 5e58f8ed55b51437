use std::env;

use serde::{Deserialize, Serialize};

use crate::{LoggerError, LoggerFormat, LoggerLevel, LoggerOutput, LoggerTimeZone};

/// Output format variable, `text|json|journald`.
pub const ENV_LOG_FORMAT: &str = "LABELS_LOG_FORMAT";
/// Filter expression variable, e.g. `labels_model=debug,info`.
pub const ENV_LOG_LEVEL: &str = "LABELS_LOG_LEVEL";
/// Timestamp timezone variable, `utc|local`.
pub const ENV_LOG_TZ: &str = "LABELS_LOG_TZ";
/// Log stream variable, `stdout|stderr`.
pub const ENV_LOG_OUTPUT: &str = "LABELS_LOG_OUTPUT";
/// Any non-empty value disables ANSI colors.
pub const ENV_NO_COLOR: &str = "NO_COLOR";

/// Logger configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Output format.
    pub format: LoggerFormat,
    /// Filter expression (e.g. `"info"`, `"labels_model=debug,info"`).
    pub level: LoggerLevel,
    /// Timezone for timestamps.
    pub tz: LoggerTimeZone,
    /// Stream for text and JSON output. Journald ignores it.
    pub output: LoggerOutput,
    /// Include module/target names in log output.
    pub with_targets: bool,
    /// Colored output; only honored when the output stream is a terminal.
    pub use_color: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            format: LoggerFormat::default(),
            level: LoggerLevel::default(),
            tz: LoggerTimeZone::default(),
            output: LoggerOutput::default(),
            with_targets: true,
            use_color: true,
        }
    }
}

impl LoggerConfig {
    /// Builds a config from the process environment, see [`LoggerConfig::from_env_with`].
    pub fn from_env() -> Result<Self, LoggerError> {
        Self::from_env_with(|key| env::var(key).ok())
    }

    /// Builds a config from `LABELS_LOG_FORMAT`, `LABELS_LOG_LEVEL`,
    /// `LABELS_LOG_TZ`, `LABELS_LOG_OUTPUT` and `NO_COLOR` as returned by `lookup`.
    ///
    /// Unset or empty variables keep their defaults; invalid values are errors.
    pub fn from_env_with<F>(lookup: F) -> Result<Self, LoggerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut cfg = Self::default();

        if let Some(format) = var(ENV_LOG_FORMAT) {
            cfg.format = format.parse()?;
        }
        if let Some(level) = var(ENV_LOG_LEVEL) {
            cfg.level = LoggerLevel::new(level)?;
        }
        if let Some(tz) = var(ENV_LOG_TZ) {
            cfg.tz = tz.parse()?;
        }
        if let Some(output) = var(ENV_LOG_OUTPUT) {
            cfg.output = output.parse()?;
        }
        if var(ENV_NO_COLOR).is_some() {
            cfg.use_color = false;
        }
        Ok(cfg)
    }

    /// Color is used only if enabled in config and the output stream is a terminal.
    ///
    /// Call at logger initialization, not at config parsing.
    pub fn should_use_color(&self) -> bool {
        self.use_color && self.output.is_terminal()
    }
}
