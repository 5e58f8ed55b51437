mod format;
pub use format::LoggerFormat;

mod level;
pub use level::LoggerLevel;

mod output;
pub use output::LoggerOutput;

mod timezone;
pub use timezone::LoggerTimeZone;

mod timer;
pub use timer::LoggerRfc3339;
