// Copyright 2025 the plotez Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quick two-dimensional plots with validated styles.
//!
//! `plotez` wraps a small retained figure model with one-call helpers:
//! - [`plot_xy`], [`plot_xyy`] and [`plot_with_dual_axes`] for single and dual-axis plots,
//! - [`n_plotter`] and [`two_subplots`] for grids of subplots,
//! - [`plot_errorbar`] for error bars,
//! - [`plot_two_column_file`] for delimited text files.
//!
//! Styles come from [`plotez_style`] and are merged with caller overrides before anything
//! is drawn; every helper validates its inputs and returns an [`Error`] instead of drawing a
//! partial figure. Each helper has an `_on` form that draws onto an existing [`Figure`].
//!
//! A [`Figure`] records series, labels and legends. [`Figure::layout`] and the scale
//! accessors turn that into pixel geometry for a renderer.

mod config;
mod error;
mod figure;
mod file;
mod layout;
mod plot;
#[cfg(test)]
mod plot_tests;
mod resolve;
mod scale;
mod symbol;

pub use config::PlotConfig;
pub use error::{Error, Result};
pub use figure::{
    Axes, AxesId, ErrorSpec, Figure, FigureLayout, Legend, LegendEntry, Series, SeriesDraw,
    SeriesKind, SharedAxis,
};
pub use file::{read_two_column_file, read_two_columns};
pub use layout::{AxesLayout, AxesLayoutSpec, Size, grid_cells};
pub use plot::{
    DrawOptions, DualAxes, DualAxesOptions, ErrorBarOptions, FileOptions, GridOptions,
    SeriesStyle, XyOptions, XyyOptions, n_plotter, n_plotter_on, plot_errorbar,
    plot_errorbar_on, plot_or_scatter, plot_two_column_file, plot_two_column_file_on,
    plot_with_dual_axes, plot_with_dual_axes_on, plot_xy, plot_xy_on, plot_xyy, plot_xyy_on,
    two_subplots,
};
pub use resolve::{
    Dash, ErrorBarDraw, LineDraw, MarkerStyle, ScatterDraw, StrokeStyle, parse_color,
    resolve_error_bar, resolve_line, resolve_scatter,
};
pub use scale::{ScaleLinear, infer_domain, nice_ticks};
pub use symbol::Marker;

pub use plotez_style;
