//! Sourcing the raw label string from the environment.

use std::env::{self, VarError};

use tracing::warn;

use crate::{CUSTOM_LABELS_ENV, CustomLabels, LabelError, LabelResult, parse_labels};

/// Reads [`CUSTOM_LABELS_ENV`] from the process environment and parses it.
///
/// Unset is treated as empty. Never fails.
pub fn parse_custom_labels() -> CustomLabels {
    labels_from_env(CUSTOM_LABELS_ENV)
}

/// Reads the variable `name` from the process environment and parses it.
///
/// A value that is not valid UTF-8 is logged and treated as empty.
pub fn labels_from_env(name: &str) -> CustomLabels {
    match read_label_var(name) {
        Ok(raw) => parse_labels(&raw),
        Err(err) => {
            warn!(var = name, error = %err, "ignoring label variable");
            CustomLabels::new()
        }
    }
}

/// Parses the value `lookup` returns for `name`; `None` is treated as empty.
pub fn labels_from_env_with<F>(name: &str, lookup: F) -> CustomLabels
where
    F: FnOnce(&str) -> Option<String>,
{
    let raw = lookup(name).unwrap_or_default();
    parse_labels(&raw)
}

/// Raw value of the process variable `name`, see [`read_label_var_with`].
pub fn read_label_var(name: &str) -> LabelResult<String> {
    read_label_var_with(name, |key| env::var(key))
}

/// Raw value of `name` as returned by an `env::var`-shaped `lookup`.
///
/// Unset is the empty string; a non-UTF-8 value is [`LabelError::NotUnicode`].
pub fn read_label_var_with<F>(name: &str, lookup: F) -> LabelResult<String>
where
    F: FnOnce(&str) -> Result<String, VarError>,
{
    match lookup(name) {
        Ok(raw) => Ok(raw),
        Err(VarError::NotPresent) => Ok(String::new()),
        Err(VarError::NotUnicode(_)) => Err(LabelError::NotUnicode {
            var: name.to_string(),
        }),
    }
}
