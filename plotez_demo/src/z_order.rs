// Copyright 2025 the plotez Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Paint order for lowered figure marks.
//!
//! Marks are sorted by `(z, insertion order)` before they are written out.

/// Plot background and frame.
pub(crate) const PLOT_BACKGROUND: i32 = -100;

/// Error bars and caps, drawn under their line.
pub(crate) const SERIES_ERRORS: i32 = 0;
/// Series lines.
pub(crate) const SERIES_STROKE: i32 = 10;
/// Markers drawn above lines.
pub(crate) const SERIES_POINTS: i32 = 20;

/// Axis lines and tick marks.
pub(crate) const AXIS_RULES: i32 = 30;
/// Tick labels.
pub(crate) const AXIS_LABELS: i32 = 40;
/// Axis labels.
pub(crate) const AXIS_TITLES: i32 = 50;

/// Legend frame and swatches.
pub(crate) const LEGEND_SWATCHES: i32 = 60;
/// Legend text.
pub(crate) const LEGEND_LABELS: i32 = 70;
/// Axes titles and the figure title.
pub(crate) const TITLES: i32 = 80;
