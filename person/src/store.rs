// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Raw multi-valued parameter store backing a calendar user.
//!
//! The store is the interchange surface with the document parser and
//! serializer: one entry per parameter name, each holding the raw (already
//! unquoted) values in the order they appeared.

use indexmap::IndexMap;

/// Ordered mapping from parameter name to raw string values.
///
/// Names are stored as given and matched ASCII case-insensitively, so `cn`
/// and `CN` address the same entry. Insertion order of names is preserved.
///
/// Building a store from external input ([`FromIterator`], [`Extend`],
/// deserialization, `TryFrom<&serde_json::Value>`) never drops raw values:
/// names differing only in case are merged into the first spelling, with
/// the later values appended. Only [`RawPropertyStore::insert`] replaces.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        from = "IndexMap<String, Vec<String>>",
        into = "IndexMap<String, Vec<String>>"
    )
)]
pub struct RawPropertyStore {
    entries: IndexMap<String, Vec<String>>,
}

impl RawPropertyStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Exact match first, then a linear case-insensitive scan, so a lookup
    /// is O(n) in the number of names.
    fn index_of(&self, name: &str) -> Option<usize> {
        self.entries.get_index_of(name).or_else(|| {
            self.entries
                .keys()
                .position(|k| k.eq_ignore_ascii_case(name))
        })
    }

    /// Raw values of a parameter, `None` if the name is absent.
    ///
    /// A present name may still hold an empty sequence.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.index_of(name)
            .and_then(|i| self.entries.get_index(i))
            .map(|(_, values)| values.as_slice())
    }

    /// Mutable access to the raw values of a parameter
    #[must_use]
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Vec<String>> {
        self.index_of(name)
            .and_then(|i| self.entries.get_index_mut(i))
            .map(|(_, values)| values)
    }

    /// Whether the name is present, regardless of how many values it holds
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index_of(name).is_some()
    }

    /// Replace the values of a parameter, returning the previous ones.
    ///
    /// An existing entry keeps its position and original spelling.
    pub fn insert(&mut self, name: impl Into<String>, values: Vec<String>) -> Option<Vec<String>> {
        let name = name.into();
        match self.index_of(&name) {
            Some(i) => self
                .entries
                .get_index_mut(i)
                .map(|(_, old)| std::mem::replace(old, values)),
            None => {
                self.entries.insert(name, values);
                None
            }
        }
    }

    /// Add values to a parameter, keeping those already present.
    ///
    /// An existing entry keeps its position and original spelling. Appending
    /// an empty sequence still makes the name present.
    pub fn append(&mut self, name: impl Into<String>, values: Vec<String>) {
        let name = name.into();
        match self.index_of(&name) {
            Some(i) => {
                if let Some((existing, old)) = self.entries.get_index_mut(i) {
                    tracing::debug!(
                        name = %name,
                        existing = %existing,
                        count = values.len(),
                        "merging parameter values spelled differently"
                    );
                    old.extend(values);
                }
            }
            None => {
                self.entries.insert(name, values);
            }
        }
    }

    /// Remove a parameter, returning its values if it was present
    pub fn remove(&mut self, name: &str) -> Option<Vec<String>> {
        self.index_of(name)
            .and_then(|i| self.entries.shift_remove_index(i))
            .map(|(_, values)| values)
    }

    /// Number of parameter names in the store
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no parameter names at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(name, values)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }

    /// Parse a store from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`PersonError::InvalidStore`](crate::PersonError::InvalidStore)
    /// if the text is not JSON or not an object of string arrays.
    #[cfg(feature = "serde")]
    pub fn from_json_str(s: &str) -> Result<Self, crate::PersonError> {
        let value: serde_json::Value =
            serde_json::from_str(s).map_err(|e| crate::PersonError::InvalidStore {
                reason: e.to_string(),
            })?;
        Self::try_from(&value)
    }
}

impl From<IndexMap<String, Vec<String>>> for RawPropertyStore {
    fn from(entries: IndexMap<String, Vec<String>>) -> Self {
        entries.into_iter().collect()
    }
}

impl From<RawPropertyStore> for IndexMap<String, Vec<String>> {
    fn from(store: RawPropertyStore) -> Self {
        store.entries
    }
}

impl<K: Into<String>> FromIterator<(K, Vec<String>)> for RawPropertyStore {
    fn from_iter<I: IntoIterator<Item = (K, Vec<String>)>>(iter: I) -> Self {
        let mut store = Self::new();
        store.extend(iter);
        store
    }
}

impl<K: Into<String>> Extend<(K, Vec<String>)> for RawPropertyStore {
    fn extend<I: IntoIterator<Item = (K, Vec<String>)>>(&mut self, iter: I) {
        for (name, values) in iter {
            self.append(name, values);
        }
    }
}

impl IntoIterator for RawPropertyStore {
    type Item = (String, Vec<String>);
    type IntoIter = indexmap::map::IntoIter<String, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(feature = "serde")]
impl TryFrom<&serde_json::Value> for RawPropertyStore {
    type Error = crate::PersonError;

    fn try_from(value: &serde_json::Value) -> Result<Self, Self::Error> {
        use serde_json::Value;

        fn kind(value: &Value) -> &'static str {
            match value {
                Value::Null => "null",
                Value::Bool(_) => "a boolean",
                Value::Number(_) => "a number",
                Value::String(_) => "a string",
                Value::Array(_) => "an array",
                Value::Object(_) => "an object",
            }
        }

        let invalid = |reason: String| crate::PersonError::InvalidStore { reason };

        let Value::Object(map) = value else {
            return Err(invalid(format!("expected an object, got {}", kind(value))));
        };

        let mut store = Self::new();
        for (name, values) in map {
            let Value::Array(items) = values else {
                return Err(invalid(format!(
                    "expected an array of strings for '{name}', got {}",
                    kind(values)
                )));
            };

            let mut raw = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    Value::String(s) => raw.push(s.clone()),
                    other => {
                        return Err(invalid(format!(
                            "expected a string in '{name}', got {}",
                            kind(other)
                        )));
                    }
                }
            }
            store.append(name.as_str(), raw);
        }

        tracing::debug!(len = store.len(), "raw property store built from JSON");
        Ok(store)
    }
}
