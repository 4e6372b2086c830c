// Copyright 2025 the plotez Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dynamically typed style attribute values.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::hash::{Hash, Hasher};

/// A single style attribute value.
///
/// Most attributes hold either a scalar (shared by every series) or a [`StyleValue::List`]
/// with one entry per series.
///
/// Equality and hashing are structural. Floats are compared by bit pattern after folding
/// `-0.0` into `0.0` and every NaN into a single canonical NaN, so `Eq` and `Hash` agree.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum StyleValue {
    /// A boolean flag (e.g. axis sharing).
    Bool(bool),
    /// A number (widths, sizes, alphas).
    Number(f64),
    /// A text token (colors, line styles, markers, colormap names).
    Text(String),
    /// Per-series values.
    List(Vec<StyleValue>),
    /// A `(width, height)` pair (figure size).
    ///
    /// Declared after `List`: untagged input arrays always deserialize as lists, and
    /// [`crate::AttributeKind::Size`] accepts a two-number list.
    Pair(f64, f64),
}

impl StyleValue {
    /// Builds a [`StyleValue::List`] from anything convertible into values.
    pub fn list<T: Into<Self>>(items: impl IntoIterator<Item = T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    /// Returns the value used for series `index`.
    ///
    /// Lists cycle (`index % len`); scalars are shared by every series. Returns `None` only
    /// for an empty list.
    pub fn series(&self, index: usize) -> Option<&Self> {
        match self {
            Self::List(items) if items.is_empty() => None,
            Self::List(items) => items.get(index % items.len()),
            other => Some(other),
        }
    }

    /// Returns `true` for [`StyleValue::List`].
    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    /// Returns the text payload, if this is a [`StyleValue::Text`].
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the numeric payload, if this is a [`StyleValue::Number`].
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the flag payload, if this is a [`StyleValue::Bool`].
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the pair payload, if this is a [`StyleValue::Pair`].
    pub fn as_pair(&self) -> Option<(f64, f64)> {
        match self {
            Self::Pair(w, h) => Some((*w, *h)),
            _ => None,
        }
    }
}

fn canonical_bits(x: f64) -> u64 {
    if x.is_nan() {
        f64::NAN.to_bits()
    } else if x == 0.0 {
        0.0_f64.to_bits()
    } else {
        x.to_bits()
    }
}

impl PartialEq for StyleValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => canonical_bits(*a) == canonical_bits(*b),
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Pair(a0, a1), Self::Pair(b0, b1)) => {
                canonical_bits(*a0) == canonical_bits(*b0)
                    && canonical_bits(*a1) == canonical_bits(*b1)
            }
            (Self::List(a), Self::List(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for StyleValue {}

impl Hash for StyleValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        core::mem::discriminant(self).hash(state);
        match self {
            Self::Bool(b) => b.hash(state),
            Self::Number(n) => canonical_bits(*n).hash(state),
            Self::Text(s) => s.hash(state),
            Self::Pair(w, h) => {
                canonical_bits(*w).hash(state);
                canonical_bits(*h).hash(state);
            }
            // Hashed as an ordered sequence (length-prefixed by `Vec`'s impl).
            Self::List(items) => items.hash(state),
        }
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s:?}"),
            Self::Pair(w, h) => write!(f, "({w}, {h})"),
            Self::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
        }
    }
}

impl From<bool> for StyleValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<f32> for StyleValue {
    fn from(value: f32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<i32> for StyleValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        Self::Text(value.into())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<(f64, f64)> for StyleValue {
    fn from((w, h): (f64, f64)) -> Self {
        Self::Pair(w, h)
    }
}

impl<T: Into<Self>> From<Vec<T>> for StyleValue {
    fn from(items: Vec<T>) -> Self {
        Self::list(items)
    }
}
