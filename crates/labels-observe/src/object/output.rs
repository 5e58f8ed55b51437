use std::{
    fmt,
    io::{self, IsTerminal},
    str::FromStr,
};

use serde::{Deserialize, Serialize};
use tracing_subscriber::fmt::writer::BoxMakeWriter;

use crate::LoggerError;

/// Stream the text and JSON formats write to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoggerOutput {
    #[default]
    Stdout,
    /// Keeps stdout free for program output.
    Stderr,
}

impl LoggerOutput {
    pub fn is_terminal(&self) -> bool {
        match self {
            LoggerOutput::Stdout => io::stdout().is_terminal(),
            LoggerOutput::Stderr => io::stderr().is_terminal(),
        }
    }

    pub(crate) fn make_writer(&self) -> BoxMakeWriter {
        match self {
            LoggerOutput::Stdout => BoxMakeWriter::new(io::stdout),
            LoggerOutput::Stderr => BoxMakeWriter::new(io::stderr),
        }
    }
}

impl FromStr for LoggerOutput {
    type Err = LoggerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stdout" => Ok(Self::Stdout),
            "stderr" => Ok(Self::Stderr),
            _ => Err(LoggerError::InvalidOutput(s.to_string())),
        }
    }
}

impl fmt::Display for LoggerOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LoggerOutput::Stdout => "stdout",
            LoggerOutput::Stderr => "stderr",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_stdout() {
        assert_eq!(LoggerOutput::default(), LoggerOutput::Stdout);
    }

    #[test]
    fn parses_case_insensitive() {
        assert_eq!("STDERR".parse::<LoggerOutput>().unwrap(), LoggerOutput::Stderr);
        assert_eq!(" stdout ".parse::<LoggerOutput>().unwrap(), LoggerOutput::Stdout);
        assert!(matches!(
            "file".parse::<LoggerOutput>(),
            Err(LoggerError::InvalidOutput(_))
        ));
    }

    #[test]
    fn serde_lowercase_names() {
        assert_eq!(serde_json::to_string(&LoggerOutput::Stderr).unwrap(), r#""stderr""#);
        let out: LoggerOutput = serde_json::from_str(r#""stdout""#).unwrap();
        assert_eq!(out, LoggerOutput::Stdout);
    }
}
