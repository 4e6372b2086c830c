// Copyright 2025 the plotez Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error bar plot parameters.
//!
//! [`ErrorBarStyle`] extends [`LineStyle`] by composition: it embeds a line style for the
//! data line and markers, and adds the bar-specific attributes. Its attribute table is the
//! line table followed by the bar table, and merges see the combined set.

use crate::attribute::{Attribute, AttributeKind};
use crate::line::LINE_ATTRIBUTES;
use crate::{LineStyle, StyleParams, StyleValue};

const BAR_ATTRIBUTES: [Attribute; 4] = [
    Attribute::new("capsize", "capsize", AttributeKind::Number),
    Attribute::new("elinewidth", "elinewidth", AttributeKind::Number),
    Attribute::new("ecolor", "ecolor", AttributeKind::Text),
    Attribute::new("capthick", "capthick", AttributeKind::Number),
];

const fn concat_attributes<const N: usize>(a: &[Attribute], b: &[Attribute]) -> [Attribute; N] {
    let mut out = [Attribute::new("", "", AttributeKind::Text); N];
    let mut i = 0;
    while i < a.len() {
        out[i] = a[i];
        i += 1;
    }
    let mut j = 0;
    while j < b.len() {
        out[a.len() + j] = b[j];
        j += 1;
    }
    out
}

static ERROR_BAR_ATTRIBUTES: [Attribute; 13] =
    concat_attributes(LINE_ATTRIBUTES, &BAR_ATTRIBUTES);

/// Parameters for an error bar series.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ErrorBarStyle {
    /// Data line and marker styling.
    pub line: LineStyle,
    /// `capsize`: length of the caps in points.
    pub capsize: Option<StyleValue>,
    /// `elinewidth`: width of the error bar lines in points.
    pub elinewidth: Option<StyleValue>,
    /// `ecolor`: color of the error bar lines.
    pub ecolor: Option<StyleValue>,
    /// `capthick`: thickness of the caps in points.
    pub capthick: Option<StyleValue>,
}

impl ErrorBarStyle {
    /// Wraps an existing line style, leaving the bar attributes unset.
    pub fn from_line(line: LineStyle) -> Self {
        Self {
            line,
            ..Self::default()
        }
    }

    /// Sets the cap size.
    pub fn with_capsize(mut self, value: impl Into<StyleValue>) -> Self {
        self.capsize = Some(value.into());
        self
    }

    /// Sets the error bar line width.
    pub fn with_elinewidth(mut self, value: impl Into<StyleValue>) -> Self {
        self.elinewidth = Some(value.into());
        self
    }

    /// Sets the error bar color.
    pub fn with_ecolor(mut self, value: impl Into<StyleValue>) -> Self {
        self.ecolor = Some(value.into());
        self
    }

    /// Sets the cap thickness.
    pub fn with_capthick(mut self, value: impl Into<StyleValue>) -> Self {
        self.capthick = Some(value.into());
        self
    }
}

impl From<LineStyle> for ErrorBarStyle {
    fn from(line: LineStyle) -> Self {
        Self::from_line(line)
    }
}

impl StyleParams for ErrorBarStyle {
    const KIND: &'static str = "ErrorBarStyle";

    fn attributes() -> &'static [Attribute] {
        &ERROR_BAR_ATTRIBUTES
    }

    fn slot(&self, label: &str) -> Option<&Option<StyleValue>> {
        match label {
            "capsize" => Some(&self.capsize),
            "elinewidth" => Some(&self.elinewidth),
            "ecolor" => Some(&self.ecolor),
            "capthick" => Some(&self.capthick),
            other => self.line.slot(other),
        }
    }

    fn slot_mut(&mut self, label: &str) -> Option<&mut Option<StyleValue>> {
        match label {
            "capsize" => Some(&mut self.capsize),
            "elinewidth" => Some(&mut self.elinewidth),
            "ecolor" => Some(&mut self.ecolor),
            "capthick" => Some(&mut self.capthick),
            other => self.line.slot_mut(other),
        }
    }
}
