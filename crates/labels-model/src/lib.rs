//! Custom label ingestion.
//!
//! Turns a raw `key=value,key=value` string (usually the `CUSTOM_LABELS`
//! environment variable) into an ordered list of [`LabelConfig`] records.
//!
//! ## Example
//! ```rust
//! use labels_model::{LabelConfig, parse_labels};
//!
//! let labels = parse_labels("environment=production, invalid ,team=platform");
//! assert_eq!(labels.len(), 2);
//! assert_eq!(labels.get("team"), Some("platform"));
//! assert_eq!(
//!     labels.into_vec(),
//!     vec![
//!         LabelConfig::new("environment", "production"),
//!         LabelConfig::new("team", "platform"),
//!     ]
//! );
//! ```

mod domain;
pub use domain::{CUSTOM_LABELS_ENV, KEY_VALUE_SEPARATOR, SEGMENT_SEPARATOR};
pub use domain::{CustomLabels, LabelConfig};

mod error;
pub use error::{LabelError, LabelResult};

mod parse;
pub use parse::{
    DroppedSegment, ParseReport, parse_labels, parse_labels_report, parse_labels_strict,
};

mod source;
pub use source::{
    labels_from_env, labels_from_env_with, parse_custom_labels, read_label_var, read_label_var_with,
};
