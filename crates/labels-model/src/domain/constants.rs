//! Well-known names and delimiters of the label format.

/// Environment variable the labels are conventionally read from.
///
/// Format: `key1=value1,key2=value2,...`. Unset is the same as empty.
pub const CUSTOM_LABELS_ENV: &str = "CUSTOM_LABELS";

/// Delimiter between label segments.
pub const SEGMENT_SEPARATOR: char = ',';

/// Delimiter between a key and its value. Only the first occurrence splits.
pub const KEY_VALUE_SEPARATOR: char = '=';
