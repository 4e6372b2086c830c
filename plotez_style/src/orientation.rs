// Copyright 2025 the plotez Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-subplot orientation tokens.

extern crate alloc;

use alloc::string::ToString;
use core::str::FromStr;

use crate::OrientationError;

/// Arrangement of a two-subplot figure.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Side by side (`"h"`): one row, two columns.
    #[default]
    Horizontal,
    /// Stacked (`"v"`): two rows, one column.
    Vertical,
}

impl Orientation {
    /// Accepted tokens.
    pub const TOKENS: &'static [&'static str] = &["h", "v"];

    /// Grid shape as `(rows, cols)`.
    pub fn grid(self) -> (usize, usize) {
        match self {
            Self::Horizontal => (1, 2),
            Self::Vertical => (2, 1),
        }
    }
}

impl FromStr for Orientation {
    type Err = OrientationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "h" => Ok(Self::Horizontal),
            "v" => Ok(Self::Vertical),
            other => Err(OrientationError {
                found: other.to_string(),
                expected: Self::TOKENS,
            }),
        }
    }
}
