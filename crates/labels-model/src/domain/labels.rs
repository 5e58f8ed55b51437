use std::{convert::Infallible, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::LabelConfig;

/// Ordered list of labels, in the order they appeared in the input.
///
/// Duplicate keys are kept as separate entries. Lookups via [`CustomLabels::get`]
/// resolve to the last one.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomLabels(Vec<LabelConfig>);

impl CustomLabels {
    /// Create an empty list.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Number of labels, duplicates included.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no labels are present.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate in input order.
    pub fn iter(&self) -> std::slice::Iter<'_, LabelConfig> {
        self.0.iter()
    }

    /// Get the value for a key, returning the last matching entry.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .rev()
            .find(|label| label.key() == key)
            .map(|label| label.value())
    }

    /// Append a label at the end.
    pub fn push<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.0.push(LabelConfig::new(key, value));
    }

    /// Borrow the labels as a slice, in input order.
    pub fn as_slice(&self) -> &[LabelConfig] {
        &self.0
    }

    /// Unwrap into the underlying vector.
    pub fn into_vec(self) -> Vec<LabelConfig> {
        self.0
    }
}

/// Renders the canonical `k1=v1,k2=v2` form.
impl fmt::Display for CustomLabels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, label) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{label}")?;
        }
        Ok(())
    }
}

/// Lossy parse, see [`crate::parse_labels`].
impl FromStr for CustomLabels {
    type Err = Infallible;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(crate::parse_labels(s))
    }
}

impl From<Vec<LabelConfig>> for CustomLabels {
    fn from(v: Vec<LabelConfig>) -> Self {
        Self(v)
    }
}

impl FromIterator<LabelConfig> for CustomLabels {
    fn from_iter<I: IntoIterator<Item = LabelConfig>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<LabelConfig> for CustomLabels {
    fn extend<I: IntoIterator<Item = LabelConfig>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl IntoIterator for CustomLabels {
    type Item = LabelConfig;
    type IntoIter = std::vec::IntoIter<LabelConfig>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a CustomLabels {
    type Item = &'a LabelConfig;
    type IntoIter = std::slice::Iter<'a, LabelConfig>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
