// Copyright 2025 the plotez Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The default series color cycle.

extern crate alloc;

use alloc::vec::Vec;

use crate::StyleValue;

/// The default color cycle (the "tab10" palette), as hex codes.
///
/// `C0`..`C9` color references index into this table.
pub const DEFAULT_COLOR_CYCLE: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

/// Returns `n` colors from the default cycle, repeating it as needed.
pub fn get_color(n: usize) -> Vec<&'static str> {
    DEFAULT_COLOR_CYCLE.iter().copied().cycle().take(n).collect()
}

/// The default cycle as a per-series [`StyleValue::List`].
pub fn default_color_value() -> StyleValue {
    StyleValue::list(DEFAULT_COLOR_CYCLE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_color_repeats_the_cycle() {
        let colors = get_color(12);
        assert_eq!(colors.len(), 12, "count");
        assert_eq!(colors[10], colors[0], "wraps around");
        assert!(colors.iter().all(|c| c.starts_with('#')), "hex codes");
    }
}
