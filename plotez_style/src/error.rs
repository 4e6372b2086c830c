// Copyright 2025 the plotez Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for style handling and input validation.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

/// A style attribute or style selection was invalid.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigurationError {
    /// One or more keys are not attributes of the target style type.
    ///
    /// Keys are reported in sorted order.
    #[error("unknown {kind} attribute(s): {}", keys.join(", "))]
    UnknownAttribute {
        /// Style type name (e.g. `LineStyle`).
        kind: &'static str,
        /// The offending keys.
        keys: Vec<String>,
    },
    /// A value has the wrong kind for its attribute.
    #[error("invalid value {value} for {kind} attribute `{key}`: expected {expected}")]
    InvalidValue {
        /// Style type name.
        kind: &'static str,
        /// Attribute label.
        key: &'static str,
        /// Rendered offending value.
        value: String,
        /// What the attribute accepts.
        expected: &'static str,
    },
    /// A style token could not be interpreted (e.g. an unknown color or marker).
    #[error("unrecognized {key} token {token:?}")]
    InvalidToken {
        /// Attribute label.
        key: &'static str,
        /// The token as given.
        token: String,
    },
    /// The style type does not fit the requested drawing primitive.
    #[error("{found} cannot style a {primitive} plot")]
    StyleMismatch {
        /// Style type name that was supplied.
        found: &'static str,
        /// Drawing primitive (`line` or `scatter`).
        primitive: &'static str,
    },
    /// A subplot grid with no cells was requested.
    #[error("subplot grid must have at least one row and one column, got {rows}x{cols}")]
    EmptyGrid {
        /// Requested rows.
        rows: usize,
        /// Requested columns.
        cols: usize,
    },
}

/// Labels and data (or paired data sequences) disagree in shape.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DataMismatchError {
    /// Number of labels differs from number of datasets.
    #[error("{labels} label(s) given for {datasets} dataset(s)")]
    LabelCount {
        /// Number of labels.
        labels: usize,
        /// Number of datasets.
        datasets: usize,
    },
    /// Dual-axis plots need exactly three axis labels.
    #[error("axis labels must have exactly 3 entries, got {found}")]
    AxisLabelCount {
        /// Number of entries given.
        found: usize,
    },
    /// Primary x or y data is empty.
    #[error("primary x or y data is empty")]
    EmptyPrimary,
    /// A dual y-axis plot was requested together with secondary x data.
    #[error("dual y-axis plot requested but secondary x data given")]
    UnexpectedSecondaryX,
    /// A dual x-axis plot was requested together with secondary y data.
    #[error("dual x-axis plot requested but secondary y data given")]
    UnexpectedSecondaryY,
    /// Two sequences that are plotted against each other differ in length.
    #[error("{what}: lengths differ ({left} vs {right})")]
    LengthMismatch {
        /// Which pair of sequences.
        what: &'static str,
        /// Length of the first sequence.
        left: usize,
        /// Length of the second sequence.
        right: usize,
    },
    /// The number of datasets does not fill the subplot grid.
    #[error("{found} dataset(s) given for a grid of {cells} subplot(s)")]
    GridSize {
        /// Number of grid cells.
        cells: usize,
        /// Number of datasets.
        found: usize,
    },
    /// A list-valued attribute had no entries to split.
    #[error("attribute `{key}` is an empty list")]
    EmptyList {
        /// Attribute label.
        key: &'static str,
    },
    /// A data row did not hold the expected number of fields.
    #[error("line {line}: expected {expected} column(s), found {found}")]
    ColumnCount {
        /// 1-based line number.
        line: usize,
        /// Expected columns.
        expected: usize,
        /// Columns found.
        found: usize,
    },
    /// A data source held no rows.
    #[error("no data rows found")]
    NoRows,
}

/// An orientation token was not one of the accepted values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("orientation must be one of {expected:?}, got {found:?}")]
pub struct OrientationError {
    /// The token as given.
    pub found: String,
    /// Accepted tokens.
    pub expected: &'static [&'static str],
}

/// Any error raised by this crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StyleError {
    /// See [`ConfigurationError`].
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    /// See [`DataMismatchError`].
    #[error(transparent)]
    DataMismatch(#[from] DataMismatchError),
    /// See [`OrientationError`].
    #[error(transparent)]
    Orientation(#[from] OrientationError),
}
