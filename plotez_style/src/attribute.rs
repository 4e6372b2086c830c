// Copyright 2025 the plotez Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Static attribute tables for style parameter types.

use crate::StyleValue;

/// The value kind an attribute accepts.
///
/// [`AttributeKind::Text`] and [`AttributeKind::Number`] also accept a [`StyleValue::List`]
/// whose elements are all of that kind, one per series.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AttributeKind {
    /// Text tokens: colors, line styles, markers, colormap names.
    Text,
    /// Numbers: widths, sizes, alphas.
    Number,
    /// A single boolean. Figure-wide switches have no per-series form.
    Flag,
    /// A `(width, height)` pair. A two-number list is accepted and normalized to a pair.
    Size,
}

impl AttributeKind {
    /// Returns a human-readable description of what this kind accepts.
    pub fn expected(self) -> &'static str {
        match self {
            Self::Text => "text or a list of text",
            Self::Number => "a number or a list of numbers",
            Self::Flag => "a boolean",
            Self::Size => "a (width, height) pair",
        }
    }

    /// Checks `value` against this kind, returning the normalized value.
    pub fn normalize(self, value: StyleValue) -> Option<StyleValue> {
        match (self, value) {
            (Self::Size, StyleValue::Pair(w, h)) => Some(StyleValue::Pair(w, h)),
            (Self::Size, StyleValue::List(items)) => match items.as_slice() {
                [StyleValue::Number(w), StyleValue::Number(h)] => Some(StyleValue::Pair(*w, *h)),
                _ => None,
            },
            (Self::Size, _) => None,
            (Self::Flag, StyleValue::Bool(b)) => Some(StyleValue::Bool(b)),
            (Self::Flag, _) => None,
            (kind, StyleValue::List(items)) => {
                if items.iter().all(|item| kind.accepts_scalar(item)) {
                    Some(StyleValue::List(items))
                } else {
                    None
                }
            }
            (kind, scalar) => kind.accepts_scalar(&scalar).then_some(scalar),
        }
    }

    fn accepts_scalar(self, value: &StyleValue) -> bool {
        matches!(
            (self, value),
            (Self::Text, StyleValue::Text(_)) | (Self::Number, StyleValue::Number(_))
        )
    }
}

/// One entry of a style type's attribute table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Attribute {
    /// Short plotting keyword (e.g. `ls`). This is the key used by `get_dict`.
    pub label: &'static str,
    /// Long field name (e.g. `line_style`).
    pub name: &'static str,
    /// Accepted value kind.
    pub kind: AttributeKind,
}

impl Attribute {
    pub(crate) const fn new(label: &'static str, name: &'static str, kind: AttributeKind) -> Self {
        Self { label, name, kind }
    }

    /// Returns `true` if `key` names this attribute, by label or by field name.
    ///
    /// Matching is exact and case-sensitive.
    pub fn matches(&self, key: &str) -> bool {
        self.label == key || self.name == key
    }
}

/// Finds the attribute named by `key` in `table`.
pub fn find_attribute(table: &'static [Attribute], key: &str) -> Option<&'static Attribute> {
    table.iter().find(|attr| attr.matches(key))
}
