// Copyright 2025 the plotez Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The style parameter trait and the override merge.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt::Debug;
use core::hash::Hash;

use crate::{
    Attribute, ConfigurationError, OverrideMapping, StyleValue, attribute::find_attribute,
};

/// A bag of named style attributes with documented defaults.
///
/// Implementors expose a static attribute table and per-attribute slots. Everything else
/// (population from a mapping, dictionary views, merging) is derived from those.
pub trait StyleParams: Clone + Debug + Default + PartialEq + Eq + Hash {
    /// Type name used in error messages.
    const KIND: &'static str;

    /// Attribute table, in canonical order.
    fn attributes() -> &'static [Attribute];

    /// Returns the slot for the attribute with label `label`.
    ///
    /// `label` is always a label from [`StyleParams::attributes`].
    fn slot(&self, label: &str) -> Option<&Option<StyleValue>>;

    /// Mutable variant of [`StyleParams::slot`].
    fn slot_mut(&mut self, label: &str) -> Option<&mut Option<StyleValue>>;

    /// Returns the value of the attribute named by `key` (label or field name).
    fn get(&self, key: &str) -> Option<&StyleValue> {
        let attr = find_attribute(Self::attributes(), key)?;
        self.slot(attr.label)?.as_ref()
    }

    /// Sets the attribute named by `key` (label or field name).
    ///
    /// Fails if the key is unknown or the value has the wrong kind.
    fn set(&mut self, key: &str, value: StyleValue) -> Result<(), ConfigurationError> {
        let Some(attr) = find_attribute(Self::attributes(), key) else {
            return Err(ConfigurationError::UnknownAttribute {
                kind: Self::KIND,
                keys: alloc::vec![key.to_string()],
            });
        };
        let rendered = value.to_string();
        let Some(value) = attr.kind.normalize(value) else {
            return Err(ConfigurationError::InvalidValue {
                kind: Self::KIND,
                key: attr.label,
                value: rendered,
                expected: attr.kind.expected(),
            });
        };
        if let Some(slot) = self.slot_mut(attr.label) {
            *slot = Some(value);
        }
        Ok(())
    }

    /// Clears the attribute named by `key`, returning its previous value.
    fn unset(&mut self, key: &str) -> Option<StyleValue> {
        let attr = find_attribute(Self::attributes(), key)?;
        self.slot_mut(attr.label)?.take()
    }

    /// Builds a style from its defaults and `mapping`.
    fn populate(mapping: &OverrideMapping) -> Result<Self, ConfigurationError> {
        merge_style(&Self::default(), Some(mapping))
    }

    /// Every attribute, set or not, keyed by label in table order.
    fn to_dict(&self) -> Vec<(&'static str, Option<StyleValue>)> {
        Self::attributes()
            .iter()
            .map(|attr| (attr.label, self.slot(attr.label).cloned().flatten()))
            .collect()
    }

    /// Only the set attributes, keyed by label.
    fn get_dict(&self) -> OverrideMapping {
        Self::attributes()
            .iter()
            .filter_map(|attr| {
                let value = self.slot(attr.label)?.as_ref()?;
                Some((attr.label, value.clone()))
            })
            .collect()
    }
}

fn is_label<S: StyleParams>(key: &str) -> bool {
    S::attributes().iter().any(|attr| attr.label == key)
}

/// Merges `overrides` onto `defaults`.
///
/// Every key in the mapping replaces the matching attribute; all other attributes keep their
/// default value. Keys are matched exactly against labels and field names. When both name the
/// same attribute, the label's value is kept. Unknown keys are all reported together (sorted),
/// before any value is checked.
pub fn merge_style<S: StyleParams>(
    defaults: &S,
    overrides: Option<&OverrideMapping>,
) -> Result<S, ConfigurationError> {
    let mut merged = defaults.clone();
    let Some(overrides) = overrides else {
        return Ok(merged);
    };

    let mut entries = overrides.sorted();
    let unknown: Vec<String> = entries
        .iter()
        .filter(|(key, _)| find_attribute(S::attributes(), key).is_none())
        .map(|(key, _)| (*key).to_string())
        .collect();
    if !unknown.is_empty() {
        return Err(ConfigurationError::UnknownAttribute {
            kind: S::KIND,
            keys: unknown,
        });
    }

    // Field names first: a label given alongside its field name wins.
    entries.sort_by_key(|(key, _)| is_label::<S>(key));
    for (key, value) in entries {
        merged.set(key, value.clone())?;
    }
    log::debug!("merged {} override(s) into {}", overrides.len(), S::KIND);
    Ok(merged)
}

/// Returns the effective attribute mapping for a plotting call.
///
/// Starts from `style` (or the type's defaults when `None`), applies `overrides`, and
/// returns only the set attributes keyed by label.
pub fn plot_dictionary_handler<S: StyleParams>(
    style: Option<&S>,
    overrides: Option<&OverrideMapping>,
) -> Result<OverrideMapping, ConfigurationError> {
    let merged = match style {
        Some(style) => merge_style(style, overrides)?,
        None => merge_style(&S::default(), overrides)?,
    };
    Ok(merged.get_dict())
}
