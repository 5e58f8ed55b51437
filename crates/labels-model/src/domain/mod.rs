mod label;
pub use label::LabelConfig;

mod labels;
pub use labels::CustomLabels;

mod constants;
pub use constants::{CUSTOM_LABELS_ENV, KEY_VALUE_SEPARATOR, SEGMENT_SEPARATOR};
