use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Labels attached to an entity: each key holds a set of string values.
/// Keys are unique; value sets collapse duplicates and are unordered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Labels(BTreeMap<String, BTreeSet<String>>);

impl Labels {
    pub fn new() -> Self {
        Labels::default()
    }

    pub fn get(&self, key: &str) -> Option<&BTreeSet<String>> {
        self.0.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Unions `values` into the set stored under `key` and returns the
    /// resulting full value set. Adding already-present values changes
    /// nothing.
    pub fn union(&mut self, key: &str, values: impl IntoIterator<Item = String>) -> BTreeSet<String> {
        let set = self.0.entry(key.to_string()).or_default();
        set.extend(values);
        set.clone()
    }

    /// Removes `values` from the set stored under `key` and returns the
    /// resulting set. Deleting absent values changes nothing. A drained key
    /// is removed entirely; labels are absent, never empty.
    pub fn subtract(&mut self, key: &str, values: &BTreeSet<String>) -> BTreeSet<String> {
        let Some(set) = self.0.get_mut(key) else {
            return BTreeSet::new();
        };
        set.retain(|v| !values.contains(v));
        if set.is_empty() {
            self.0.remove(key);
            return BTreeSet::new();
        }
        set.clone()
    }

    /// Whether this label set satisfies a single filter: the values stored
    /// under the filter's key must intersect the filter's value set.
    pub fn matches(&self, filter: &LabelFilter) -> bool {
        match self.0.get(&filter.key) {
            Some(values) => values.intersection(&filter.values).next().is_some(),
            None => false,
        }
    }

    /// Whether this label set satisfies every filter in the list (AND across
    /// filters, OR within one filter's values).
    pub fn matches_all(&self, filters: &[LabelFilter]) -> bool {
        filters.iter().all(|f| self.matches(f))
    }
}

impl FromIterator<(String, BTreeSet<String>)> for Labels {
    fn from_iter<I: IntoIterator<Item = (String, BTreeSet<String>)>>(iter: I) -> Self {
        Labels(iter.into_iter().collect())
    }
}

/// Annotations attached to an entity: each key holds exactly one value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Annotations(BTreeMap<String, String>);

impl Annotations {
    pub fn new() -> Self {
        Annotations::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sets `key` to `value`, overwriting any prior value, and returns the
    /// value now stored.
    pub fn set(&mut self, key: &str, value: String) -> String {
        self.0.insert(key.to_string(), value.clone());
        value
    }

    /// Removes `key`, returning the prior value, or `None` if the key was
    /// absent. Absence is a result, not an error.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.remove(key)
    }
}

impl FromIterator<(String, String)> for Annotations {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Annotations(iter.into_iter().collect())
    }
}

/// A single list-query filter: matches records whose label values under
/// `key` intersect `values`. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelFilter {
    pub key: String,
    pub values: BTreeSet<String>,
}

impl LabelFilter {
    pub fn new(key: impl Into<String>, values: impl IntoIterator<Item = String>) -> Self {
        LabelFilter {
            key: key.into(),
            values: values.into_iter().collect(),
        }
    }
}
