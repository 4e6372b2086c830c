// Copyright 2025 the plotez Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The error type returned by every plotting helper.

use plotez_style::{ConfigurationError, DataMismatchError, OrientationError, StyleError};

use crate::AxesId;

/// Errors raised while validating inputs, reading data or drawing onto a [`crate::Figure`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid style, mismatched labels or data, or a bad orientation.
    #[error(transparent)]
    Style(#[from] StyleError),
    /// A data file field could not be read as a number.
    #[error("line {line}, column {column}: cannot parse {token:?} as a number")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// 1-based column number.
        column: usize,
        /// The offending field, trimmed.
        token: String,
    },
    /// An axes handle that does not belong to the figure.
    #[error("figure has no axes {0:?}")]
    UnknownAxes(AxesId),
    /// Reading a data or configuration file failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// A configuration document was malformed.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl From<ConfigurationError> for Error {
    fn from(value: ConfigurationError) -> Self {
        Self::Style(value.into())
    }
}

impl From<DataMismatchError> for Error {
    fn from(value: DataMismatchError) -> Self {
        Self::Style(value.into())
    }
}

impl From<OrientationError> for Error {
    fn from(value: OrientationError) -> Self {
        Self::Style(value.into())
    }
}

impl Error {
    /// Returns the configuration error, if this is one.
    pub fn as_configuration(&self) -> Option<&ConfigurationError> {
        match self {
            Self::Style(StyleError::Configuration(e)) => Some(e),
            _ => None,
        }
    }

    /// Returns the data mismatch error, if this is one.
    pub fn as_data_mismatch(&self) -> Option<&DataMismatchError> {
        match self {
            Self::Style(StyleError::DataMismatch(e)) => Some(e),
            _ => None,
        }
    }

    /// Returns the orientation error, if this is one.
    pub fn as_orientation(&self) -> Option<&OrientationError> {
        match self {
            Self::Style(StyleError::Orientation(e)) => Some(e),
            _ => None,
        }
    }
}

/// Result alias for this crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;
