//! Parsing of `key=value,key=value` label strings.
//!
//! The default mode is lossy: malformed segments are dropped and the parse
//! never fails. [`parse_labels_strict`] rejects them instead, and
//! [`parse_labels_report`] returns both the labels and what was dropped.

use tracing::debug;

use crate::{CustomLabels, KEY_VALUE_SEPARATOR, LabelError, LabelResult, SEGMENT_SEPARATOR};

/// A non-empty segment that carried no `=` and was left out of the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedSegment {
    /// Zero-based position among the comma-separated raw segments.
    pub index: usize,
    /// Segment text after trimming.
    pub segment: String,
}

/// Outcome of a lossy parse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseReport {
    labels: CustomLabels,
    dropped: Vec<DroppedSegment>,
}

impl ParseReport {
    /// Parsed labels, in input order.
    pub fn labels(&self) -> &CustomLabels {
        &self.labels
    }

    /// Segments dropped as malformed, in input order.
    pub fn dropped(&self) -> &[DroppedSegment] {
        &self.dropped
    }

    /// Returns `true` if every non-empty segment produced a label.
    pub fn is_clean(&self) -> bool {
        self.dropped.is_empty()
    }

    /// Drop the report and keep the labels.
    pub fn into_labels(self) -> CustomLabels {
        self.labels
    }

    /// Fails on the first dropped segment.
    pub fn into_strict(self) -> LabelResult<CustomLabels> {
        match self.dropped.into_iter().next() {
            None => Ok(self.labels),
            Some(DroppedSegment { index, segment }) => {
                Err(LabelError::MissingSeparator { index, segment })
            }
        }
    }
}

/// Parses `raw` into labels, silently skipping malformed segments.
///
/// - segments are split on `,` and trimmed; empty ones are skipped,
/// - each segment is split on the first `=` only, key and value are trimmed,
/// - a segment without `=` is dropped, a leading `=` keeps an empty key.
///
/// Empty or whitespace-only input yields an empty list.
pub fn parse_labels(raw: &str) -> CustomLabels {
    parse_labels_report(raw).into_labels()
}

/// Same as [`parse_labels`], but a segment without `=` is an error.
///
/// Empty segments (`"a=1,,b=2"`, trailing commas) are still tolerated.
pub fn parse_labels_strict(raw: &str) -> LabelResult<CustomLabels> {
    parse_labels_report(raw).into_strict()
}

/// Lossy parse that also reports which segments were dropped.
pub fn parse_labels_report(raw: &str) -> ParseReport {
    let mut report = ParseReport::default();

    for (index, segment) in raw.split(SEGMENT_SEPARATOR).enumerate() {
        let segment = segment.trim();
        if segment.is_empty() {
            continue;
        }

        match segment.split_once(KEY_VALUE_SEPARATOR) {
            Some((key, value)) => report.labels.push(key.trim(), value.trim()),
            None => {
                debug!(index, segment, "dropping label segment without '='");
                report.dropped.push(DroppedSegment {
                    index,
                    segment: segment.to_string(),
                });
            }
        }
    }

    report
}
