// Copyright 2025 the plotez Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Subplot layout parameters.

use crate::attribute::{Attribute, AttributeKind};
use crate::{StyleParams, StyleValue};

/// Default figure size in inches.
pub const DEFAULT_FIG_SIZE: (f64, f64) = (6.4, 4.8);

const SUBPLOT_ATTRIBUTES: &[Attribute] = &[
    Attribute::new("sharex", "share_x", AttributeKind::Flag),
    Attribute::new("sharey", "share_y", AttributeKind::Flag),
    Attribute::new("figsize", "fig_size", AttributeKind::Size),
];

/// Figure-level options for subplot grids.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SubplotStyle {
    /// `sharex`: share the x-axis across subplots.
    pub share_x: Option<StyleValue>,
    /// `sharey`: share the y-axis across subplots.
    pub share_y: Option<StyleValue>,
    /// `figsize`: figure size in inches.
    pub fig_size: Option<StyleValue>,
}

impl Default for SubplotStyle {
    fn default() -> Self {
        Self {
            share_x: None,
            share_y: None,
            fig_size: Some(DEFAULT_FIG_SIZE.into()),
        }
    }
}

impl SubplotStyle {
    /// Sets x-axis sharing.
    pub fn with_share_x(mut self, share: bool) -> Self {
        self.share_x = Some(share.into());
        self
    }

    /// Sets y-axis sharing.
    pub fn with_share_y(mut self, share: bool) -> Self {
        self.share_y = Some(share.into());
        self
    }

    /// Sets the figure size in inches.
    pub fn with_fig_size(mut self, width: f64, height: f64) -> Self {
        self.fig_size = Some(StyleValue::Pair(width, height));
        self
    }

    /// Effective x sharing; unset means `false`.
    pub fn shares_x(&self) -> bool {
        self.share_x
            .as_ref()
            .and_then(StyleValue::as_bool)
            .unwrap_or(false)
    }

    /// Effective y sharing; unset means `false`.
    pub fn shares_y(&self) -> bool {
        self.share_y
            .as_ref()
            .and_then(StyleValue::as_bool)
            .unwrap_or(false)
    }

    /// Effective figure size in inches.
    pub fn fig_size_inches(&self) -> (f64, f64) {
        self.fig_size
            .as_ref()
            .and_then(StyleValue::as_pair)
            .unwrap_or(DEFAULT_FIG_SIZE)
    }
}

impl StyleParams for SubplotStyle {
    const KIND: &'static str = "SubplotStyle";

    fn attributes() -> &'static [Attribute] {
        SUBPLOT_ATTRIBUTES
    }

    fn slot(&self, label: &str) -> Option<&Option<StyleValue>> {
        Some(match label {
            "sharex" => &self.share_x,
            "sharey" => &self.share_y,
            "figsize" => &self.fig_size,
            _ => return None,
        })
    }

    fn slot_mut(&mut self, label: &str) -> Option<&mut Option<StyleValue>> {
        Some(match label {
            "sharex" => &mut self.share_x,
            "sharey" => &mut self.share_y,
            "figsize" => &mut self.fig_size,
            _ => return None,
        })
    }
}
