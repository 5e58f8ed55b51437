use std::fmt;

use time::{OffsetDateTime, UtcOffset, format_description::well_known::Rfc3339};
use tracing_subscriber::fmt::{format::Writer, time::FormatTime};

use crate::LoggerTimeZone;

/// RFC3339 timestamps at a fixed offset.
#[derive(Debug, Clone, Copy)]
pub struct LoggerRfc3339 {
    offset: UtcOffset,
}

impl LoggerRfc3339 {
    pub fn new(offset: UtcOffset) -> Self {
        Self { offset }
    }

    pub fn for_tz(tz: LoggerTimeZone) -> Self {
        Self::new(tz.resolve_offset())
    }

    fn format_at(&self, at: OffsetDateTime) -> Option<String> {
        at.to_offset(self.offset).format(&Rfc3339).ok()
    }
}

impl Default for LoggerRfc3339 {
    fn default() -> Self {
        Self::new(UtcOffset::UTC)
    }
}

impl FormatTime for LoggerRfc3339 {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        match self.format_at(OffsetDateTime::now_utc()) {
            Some(ts) => write!(w, "{ts} "),
            None => write!(w, "<invalid-time> "),
        }
    }
}
