// Copyright 2025 the plotez Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Line plot parameters.

use crate::attribute::{Attribute, AttributeKind};
use crate::{StyleParams, StyleValue, default_color_value};

/// Attribute table shared by [`LineStyle`] and the line part of [`crate::ErrorBarStyle`].
pub(crate) const LINE_ATTRIBUTES: &[Attribute] = &[
    Attribute::new("ls", "line_style", AttributeKind::Text),
    Attribute::new("lw", "line_width", AttributeKind::Number),
    Attribute::new("color", "color", AttributeKind::Text),
    Attribute::new("alpha", "alpha", AttributeKind::Number),
    Attribute::new("marker", "marker", AttributeKind::Text),
    Attribute::new("ms", "marker_size", AttributeKind::Number),
    Attribute::new("mec", "marker_edge_color", AttributeKind::Text),
    Attribute::new("mfc", "marker_face_color", AttributeKind::Text),
    Attribute::new("mew", "marker_edge_width", AttributeKind::Number),
];

/// Parameters for (one or two) line series.
///
/// Each attribute is unset, a scalar shared by every series, or a list with one entry per
/// series. The default colors are the default color cycle; everything else is unset.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LineStyle {
    /// `ls`: line style token (`-`, `--`, `:`, `-.`).
    pub line_style: Option<StyleValue>,
    /// `lw`: line width in points.
    pub line_width: Option<StyleValue>,
    /// `color`: line color.
    pub color: Option<StyleValue>,
    /// `alpha`: opacity in `[0, 1]`.
    pub alpha: Option<StyleValue>,
    /// `marker`: marker token (`o`, `s`, `^`, ...).
    pub marker: Option<StyleValue>,
    /// `ms`: marker size in points.
    pub marker_size: Option<StyleValue>,
    /// `mec`: marker edge color.
    pub marker_edge_color: Option<StyleValue>,
    /// `mfc`: marker face color.
    pub marker_face_color: Option<StyleValue>,
    /// `mew`: marker edge width in points.
    pub marker_edge_width: Option<StyleValue>,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            line_style: None,
            line_width: None,
            color: Some(default_color_value()),
            alpha: None,
            marker: None,
            marker_size: None,
            marker_edge_color: None,
            marker_face_color: None,
            marker_edge_width: None,
        }
    }
}

impl LineStyle {
    /// Sets the line style.
    pub fn with_line_style(mut self, value: impl Into<StyleValue>) -> Self {
        self.line_style = Some(value.into());
        self
    }

    /// Sets the line width.
    pub fn with_line_width(mut self, value: impl Into<StyleValue>) -> Self {
        self.line_width = Some(value.into());
        self
    }

    /// Sets the color.
    pub fn with_color(mut self, value: impl Into<StyleValue>) -> Self {
        self.color = Some(value.into());
        self
    }

    /// Sets the opacity.
    pub fn with_alpha(mut self, value: impl Into<StyleValue>) -> Self {
        self.alpha = Some(value.into());
        self
    }

    /// Sets the marker.
    pub fn with_marker(mut self, value: impl Into<StyleValue>) -> Self {
        self.marker = Some(value.into());
        self
    }

    /// Sets the marker size.
    pub fn with_marker_size(mut self, value: impl Into<StyleValue>) -> Self {
        self.marker_size = Some(value.into());
        self
    }
}

impl StyleParams for LineStyle {
    const KIND: &'static str = "LineStyle";

    fn attributes() -> &'static [Attribute] {
        LINE_ATTRIBUTES
    }

    fn slot(&self, label: &str) -> Option<&Option<StyleValue>> {
        Some(match label {
            "ls" => &self.line_style,
            "lw" => &self.line_width,
            "color" => &self.color,
            "alpha" => &self.alpha,
            "marker" => &self.marker,
            "ms" => &self.marker_size,
            "mec" => &self.marker_edge_color,
            "mfc" => &self.marker_face_color,
            "mew" => &self.marker_edge_width,
            _ => return None,
        })
    }

    fn slot_mut(&mut self, label: &str) -> Option<&mut Option<StyleValue>> {
        Some(match label {
            "ls" => &mut self.line_style,
            "lw" => &mut self.line_width,
            "color" => &mut self.color,
            "alpha" => &mut self.alpha,
            "marker" => &mut self.marker,
            "ms" => &mut self.marker_size,
            "mec" => &mut self.marker_edge_color,
            "mfc" => &mut self.marker_face_color,
            "mew" => &mut self.marker_edge_width,
            _ => return None,
        })
    }
}

#[cfg(test)]
mod tests {
    extern crate alloc;

    use super::*;
    use crate::{ConfigurationError, OverrideMapping, merge_style};

    #[test]
    fn default_has_color_cycle_only() {
        let style = LineStyle::default();
        assert!(style.color.as_ref().is_some_and(StyleValue::is_list), "cycle");
        let set: alloc::vec::Vec<_> = style
            .to_dict()
            .into_iter()
            .filter(|(_, v)| v.is_some())
            .map(|(k, _)| k)
            .collect();
        assert_eq!(set, ["color"], "only color is set");
    }

    #[test]
    fn merging_color_only_changes_color() {
        let overrides = OverrideMapping::new().with("color", "red");
        let merged = merge_style(&LineStyle::default(), Some(&overrides)).expect("valid key");
        let expected = LineStyle {
            color: Some("red".into()),
            ..LineStyle::default()
        };
        assert_eq!(merged, expected, "only color replaced");
    }

    #[test]
    fn populate_accepts_labels_and_field_names() {
        let mapping = OverrideMapping::new()
            .with("ls", "--")
            .with("line_width", 2)
            .with("color", "red");
        let style = LineStyle::populate(&mapping).expect("valid keys");
        assert_eq!(style.line_style, Some("--".into()), "label key");
        assert_eq!(style.line_width, Some(2.0.into()), "field-name key");
        assert_eq!(style.get("lw"), Some(&StyleValue::from(2.0)), "get by label");
    }

    #[test]
    fn wrong_kind_is_rejected() {
        let mapping = OverrideMapping::new().with("lw", "thick");
        let err = LineStyle::populate(&mapping).expect_err("text width");
        assert!(
            matches!(err, ConfigurationError::InvalidValue { key: "lw", .. }),
            "got {err:?}"
        );
    }

    #[test]
    fn get_dict_skips_unset_attributes() {
        let style = LineStyle::default().with_line_style(StyleValue::list(["-"]));
        let dict = style.get_dict();
        assert!(dict.contains_key("ls"), "ls set");
        assert!(!dict.contains_key("lw"), "lw unset");
        assert_eq!(dict.len(), 2, "ls and color");
    }
}
