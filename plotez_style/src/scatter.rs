// Copyright 2025 the plotez Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scatter plot parameters.

use crate::attribute::{Attribute, AttributeKind};
use crate::{StyleParams, StyleValue, default_color_value};

const SCATTER_ATTRIBUTES: &[Attribute] = &[
    Attribute::new("c", "color", AttributeKind::Text),
    Attribute::new("alpha", "alpha", AttributeKind::Number),
    Attribute::new("marker", "marker", AttributeKind::Text),
    Attribute::new("s", "size", AttributeKind::Number),
    Attribute::new("cmap", "cmap", AttributeKind::Text),
    Attribute::new("fc", "face_color", AttributeKind::Text),
];

/// Parameters for (one or two) scatter series.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ScatterStyle {
    /// `c`: marker color.
    pub color: Option<StyleValue>,
    /// `alpha`: opacity in `[0, 1]`.
    pub alpha: Option<StyleValue>,
    /// `marker`: marker token.
    pub marker: Option<StyleValue>,
    /// `s`: marker area in points squared.
    pub size: Option<StyleValue>,
    /// `cmap`: colormap name. Recorded but not interpreted.
    pub cmap: Option<StyleValue>,
    /// `fc`: marker face color.
    pub face_color: Option<StyleValue>,
}

impl Default for ScatterStyle {
    fn default() -> Self {
        Self {
            color: Some(default_color_value()),
            alpha: None,
            marker: None,
            size: None,
            cmap: None,
            face_color: None,
        }
    }
}

impl ScatterStyle {
    /// Sets the color.
    pub fn with_color(mut self, value: impl Into<StyleValue>) -> Self {
        self.color = Some(value.into());
        self
    }

    /// Sets the marker.
    pub fn with_marker(mut self, value: impl Into<StyleValue>) -> Self {
        self.marker = Some(value.into());
        self
    }

    /// Sets the marker area.
    pub fn with_size(mut self, value: impl Into<StyleValue>) -> Self {
        self.size = Some(value.into());
        self
    }
}

impl StyleParams for ScatterStyle {
    const KIND: &'static str = "ScatterStyle";

    fn attributes() -> &'static [Attribute] {
        SCATTER_ATTRIBUTES
    }

    fn slot(&self, label: &str) -> Option<&Option<StyleValue>> {
        Some(match label {
            "c" => &self.color,
            "alpha" => &self.alpha,
            "marker" => &self.marker,
            "s" => &self.size,
            "cmap" => &self.cmap,
            "fc" => &self.face_color,
            _ => return None,
        })
    }

    fn slot_mut(&mut self, label: &str) -> Option<&mut Option<StyleValue>> {
        Some(match label {
            "c" => &mut self.color,
            "alpha" => &mut self.alpha,
            "marker" => &mut self.marker,
            "s" => &mut self.size,
            "cmap" => &mut self.cmap,
            "fc" => &mut self.face_color,
            _ => return None,
        })
    }
}
