use indexmap::IndexMap;
use serde::Serialize;

use crate::config::{FLAG_VALUE, POSITIONAL_KEY};

/// Parsed arguments: option name to the values given for it, in order.
///
/// Keys keep the order in which they first received a value. Positional
/// arguments live under [`POSITIONAL_KEY`].
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct ResultDictionary {
    entries: IndexMap<String, Vec<String>>,
}

impl ResultDictionary {
    pub(crate) fn push(&mut self, key: &str, value: &str) {
        self.entries
            .entry(key.to_string())
            .or_default()
            .push(value.to_string());
    }

    pub(crate) fn extend(&mut self, key: &str, values: &[&str]) {
        let entry = self.entries.entry(key.to_string()).or_default();
        entry.extend(values.iter().map(|value| (*value).to_string()));
    }

    /// Marks `key` as present unless it already holds values.
    pub(crate) fn flag(&mut self, key: &str) {
        if !self.entries.contains_key(key) {
            self.push(key, FLAG_VALUE);
        }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    #[must_use]
    pub fn first(&self, key: &str) -> Option<&str> {
        self.entries
            .get(key)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Whether `key` was given as a bare flag, i.e. its first value is
    /// [`FLAG_VALUE`]. Use [`contains`](Self::contains) for mere presence.
    #[must_use]
    pub fn is_flag(&self, key: &str) -> bool {
        self.first(key) == Some(FLAG_VALUE)
    }

    /// Positional arguments, empty when there were none.
    #[must_use]
    pub fn positional(&self) -> &[String] {
        self.get(POSITIONAL_KEY).unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(key, values)| (key.as_str(), values.as_slice()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn into_inner(self) -> IndexMap<String, Vec<String>> {
        self.entries
    }
}
