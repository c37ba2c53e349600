use std::fmt;

use serde::{Deserialize, Serialize};

#[cfg(feature = "schema")]
use schemars::JsonSchema;

use crate::domain::FieldValue;

/// Ascending set of unique field values.
///
/// Every constructor and mutation keeps the values sorted and de-duplicated.
/// An empty selection means "any value" (cron wildcard).
///
/// Mutating operations return a new selection instead of changing `self`:
/// the value is owned by the caller and only ever replaced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(from = "Vec<FieldValue>", into = "Vec<FieldValue>")]
pub struct Selection(Vec<FieldValue>);

impl Selection {
    /// The empty (wildcard) selection.
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, value: FieldValue) -> bool {
        self.0.binary_search(&value).is_ok()
    }

    /// Lowest selected value.
    pub fn first(&self) -> Option<FieldValue> {
        self.0.first().copied()
    }

    /// Highest selected value.
    pub fn last(&self) -> Option<FieldValue> {
        self.0.last().copied()
    }

    pub fn as_slice(&self) -> &[FieldValue] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = FieldValue> + '_ {
        self.0.iter().copied()
    }

    /// Returns a copy with `value` removed if present, or inserted otherwise.
    pub fn toggled(&self, value: FieldValue) -> Self {
        let mut values = self.0.clone();
        match values.binary_search(&value) {
            Ok(idx) => {
                values.remove(idx);
            }
            Err(idx) => values.insert(idx, value),
        }
        Self(values)
    }

    /// Returns a copy with every value passed through `f`, re-sorted.
    pub fn map_values<F>(&self, f: F) -> Self
    where
        F: FnMut(FieldValue) -> FieldValue,
    {
        self.iter().map(f).collect()
    }

    pub fn into_vec(self) -> Vec<FieldValue> {
        self.0
    }
}

impl From<Vec<FieldValue>> for Selection {
    fn from(mut values: Vec<FieldValue>) -> Self {
        values.sort_unstable();
        values.dedup();
        Self(values)
    }
}

impl From<Selection> for Vec<FieldValue> {
    fn from(s: Selection) -> Self {
        s.0
    }
}

impl<const N: usize> From<[FieldValue; N]> for Selection {
    fn from(values: [FieldValue; N]) -> Self {
        Self::from(values.to_vec())
    }
}

impl FromIterator<FieldValue> for Selection {
    fn from_iter<I: IntoIterator<Item = FieldValue>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("*");
        }
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}
