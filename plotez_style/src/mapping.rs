// Copyright 2025 the plotez Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Caller-supplied attribute overrides.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::StyleValue;

/// A mapping from attribute key (label or field name) to override value.
///
/// Merging a mapping onto a style is right-biased: every key present here replaces the
/// style's value. See [`crate::merge_style`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct OverrideMapping {
    entries: HashMap<String, StyleValue>,
}

impl OverrideMapping {
    /// Creates an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an override, returning the previous value for `key`.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<StyleValue>,
    ) -> Option<StyleValue> {
        self.entries.insert(key.into(), value.into())
    }

    /// Builder-style [`OverrideMapping::insert`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Returns the override for `key`.
    pub fn get(&self, key: &str) -> Option<&StyleValue> {
        self.entries.get(key)
    }

    /// Removes and returns the override for `key`.
    pub fn remove(&mut self, key: &str) -> Option<StyleValue> {
        self.entries.remove(key)
    }

    /// Returns `true` if `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of overrides.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no overrides.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(key, value)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns the `(key, value)` pairs sorted by key.
    pub fn sorted(&self) -> Vec<(&str, &StyleValue)> {
        let mut out: Vec<_> = self.iter().collect();
        out.sort_unstable_by(|a, b| a.0.cmp(b.0));
        out
    }
}

impl<K: Into<String>, V: Into<StyleValue>> FromIterator<(K, V)> for OverrideMapping {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<K: Into<String>, V: Into<StyleValue>> Extend<(K, V)> for OverrideMapping {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.entries
            .extend(iter.into_iter().map(|(k, v)| (k.into(), v.into())));
    }
}

impl IntoIterator for OverrideMapping {
    type Item = (String, StyleValue);
    type IntoIter = hashbrown::hash_map::IntoIter<String, StyleValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
