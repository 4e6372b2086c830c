// Copyright 2025 the plotez Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Splitting a two-series style into two single-series styles.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::attribute::find_attribute;
use crate::{ConfigurationError, DataMismatchError, StyleError, StyleParams, StyleValue};

/// Which of two series an attribute is assigned to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SeriesSlot {
    /// The first (primary) series.
    First,
    /// The second (secondary) series.
    Second,
}

/// Splits `style` positionally into two styles of the same type.
///
/// A list value gives its first entry to the first style and its second entry to the
/// second style; a one-entry list and any scalar are shared by both. Unset attributes stay
/// at the type's default in both outputs.
pub fn split_dictionary<S: StyleParams>(style: &S) -> Result<(S, S), StyleError> {
    let defaults = S::default();
    let mut first = S::default();
    let mut second = S::default();
    for attr in S::attributes() {
        let Some(value) = style.get(attr.label) else {
            continue;
        };
        if let StyleValue::List(items) = value {
            match items.len() {
                0 => return Err(DataMismatchError::EmptyList { key: attr.label }.into()),
                1 | 2 => {}
                // Untouched defaults such as the color cycle.
                _ if defaults.get(attr.label) == Some(value) => {}
                n => log::warn!(
                    "{}: `{}` has {n} entries, only the first two are used",
                    S::KIND,
                    attr.label
                ),
            }
        }
        let (Some(a), Some(b)) = (value.series(0), value.series(1)) else {
            continue;
        };
        first.set(attr.label, a.clone())?;
        second.set(attr.label, b.clone())?;
    }
    Ok((first, second))
}

/// Splits `style` into two styles by an explicit key-to-series assignment.
///
/// An assigned key is copied whole into its series only; the other series keeps the type's
/// default for it. Set attributes that are not assigned are shared by both series.
/// Assigning a key that is not an attribute of `S` is a configuration error.
pub fn split_by_assignment<S: StyleParams>(
    style: &S,
    assignment: &[(&str, SeriesSlot)],
) -> Result<(S, S), ConfigurationError> {
    let mut unknown: Vec<String> = Vec::new();
    let mut slots: Vec<(&'static str, SeriesSlot)> = Vec::with_capacity(assignment.len());
    for (key, slot) in assignment {
        match find_attribute(S::attributes(), key) {
            Some(attr) => slots.push((attr.label, *slot)),
            None => unknown.push((*key).to_string()),
        }
    }
    if !unknown.is_empty() {
        unknown.sort_unstable();
        return Err(ConfigurationError::UnknownAttribute {
            kind: S::KIND,
            keys: unknown,
        });
    }

    let mut first = style.clone();
    let mut second = style.clone();
    for (label, slot) in slots {
        let default = S::default().get(label).cloned();
        let target = match slot {
            SeriesSlot::First => &mut second,
            SeriesSlot::Second => &mut first,
        };
        // The series that does not own the key falls back to the default.
        if let Some(cell) = target.slot_mut(label) {
            *cell = default;
        }
    }
    Ok((first, second))
}
