use std::fmt;

use serde::{Deserialize, Serialize};

/// A single parsed label.
///
/// Both fields are plain UTF-8 strings. The key may be empty (`"=value"`),
/// no other validation is applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelConfig {
    /// Label name, e.g. `app.kubernetes.io/name`.
    key: String,
    /// Label value. May itself contain `=`.
    value: String,
}

impl LabelConfig {
    /// Create a new label.
    pub fn new<K, V>(key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Get the key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Get the value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Split into `(key, value)`.
    pub fn into_parts(self) -> (String, String) {
        (self.key, self.value)
    }
}

impl fmt::Display for LabelConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

impl From<(String, String)> for LabelConfig {
    fn from((key, value): (String, String)) -> Self {
        Self { key, value }
    }
}

impl From<(&str, &str)> for LabelConfig {
    fn from((key, value): (&str, &str)) -> Self {
        Self::new(key, value)
    }
}
