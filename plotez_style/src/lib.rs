// Copyright 2025 the plotez Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Style parameters and input validation for `plotez`.
//!
//! This crate holds everything that is independent of drawing:
//! - **Style parameter types** ([`LineStyle`], [`ScatterStyle`], [`ErrorBarStyle`],
//!   [`SubplotStyle`]) with documented defaults, structural equality and hashing.
//! - **Override merging** ([`merge_style`], [`StyleParams::populate`],
//!   [`plot_dictionary_handler`]): right-biased, with unknown keys rejected.
//! - **Splitting** a two-series style into two single-series styles
//!   ([`split_dictionary`], [`split_by_assignment`]).
//! - **Dual-axis validation and labels** ([`dual_axes_data_validation`],
//!   [`validate_dual_axes`], [`dual_axes_label_management`], [`series_labels`]).
//!
//! Keys are matched exactly and case-sensitively against both the short plotting keyword
//! (e.g. `ls`) and the long field name (e.g. `line_style`).

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod attribute;
mod color_cycle;
mod dual_axes;
mod error;
mod error_bar;
mod line;
mod mapping;
mod orientation;
mod params;
mod scatter;
mod split;
mod subplot;
mod value;

#[cfg(test)]
mod merge_tests;

pub use attribute::{Attribute, AttributeKind, find_attribute};
pub use color_cycle::{DEFAULT_COLOR_CYCLE, default_color_value, get_color};
pub use dual_axes::{
    DualAxesData, DualAxesLabelInput, DualAxesLabels, auto_series_labels, check_lengths,
    dual_axes_data_validation, dual_axes_label_management, series_labels, validate_dual_axes,
};
pub use error::{ConfigurationError, DataMismatchError, OrientationError, StyleError};
pub use error_bar::ErrorBarStyle;
pub use line::LineStyle;
pub use mapping::OverrideMapping;
pub use orientation::Orientation;
pub use params::{StyleParams, merge_style, plot_dictionary_handler};
pub use scatter::ScatterStyle;
pub use split::{SeriesSlot, split_by_assignment, split_dictionary};
pub use subplot::{DEFAULT_FIG_SIZE, SubplotStyle};
pub use value::StyleValue;
