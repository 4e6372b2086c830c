// Copyright 2025 the plotez Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Figure-wide defaults.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::Result;

/// Defaults applied when a style leaves an attribute unset.
///
/// Widths and sizes are in points; `dpi` converts inches to pixels. Missing fields in a JSON
/// document take the defaults below.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    /// Pixels per inch.
    pub dpi: f64,
    /// Default line width.
    pub line_width: f64,
    /// Default line marker size.
    pub marker_size: f64,
    /// Default scatter marker area, in points squared.
    pub scatter_size: f64,
    /// Default error bar cap length.
    pub cap_size: f64,
    /// Title font size.
    pub title_font_size: f64,
    /// Axis label and tick label font size.
    pub label_font_size: f64,
    /// Approximate number of ticks per axis.
    pub tick_count: usize,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            dpi: 100.0,
            line_width: 1.5,
            marker_size: 6.0,
            scatter_size: 36.0,
            cap_size: 3.0,
            title_font_size: 12.0,
            label_font_size: 10.0,
            tick_count: 5,
        }
    }
}

impl PlotConfig {
    /// Parses a configuration from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads a configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let config: Self = serde_json::from_reader(reader)?;
        Ok(config)
    }

    /// Sets the resolution.
    pub fn with_dpi(mut self, dpi: f64) -> Self {
        self.dpi = dpi;
        self
    }

    /// Converts a length in points to pixels.
    pub fn points_to_px(&self, points: f64) -> f64 {
        points * self.dpi / 72.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let config = PlotConfig::from_json_str(r#"{ "dpi": 200, "tick_count": 7 }"#)
            .expect("valid json");
        assert_eq!(config.dpi, 200.0, "dpi");
        assert_eq!(config.tick_count, 7, "tick count");
        assert_eq!(config.line_width, 1.5, "default line width");
        assert_eq!(config.scatter_size, 36.0, "default scatter size");
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = PlotConfig::from_json_str("{ dpi: }").expect_err("invalid");
        assert!(matches!(err, crate::Error::Json(_)), "json error: {err}");
    }

    #[test]
    fn load_reads_a_file() {
        let path = std::env::temp_dir().join("plotez_config_load_test.json");
        std::fs::write(&path, r#"{ "label_font_size": 14 }"#).expect("write temp file");
        let config = PlotConfig::load(&path).expect("readable");
        std::fs::remove_file(&path).ok();
        assert_eq!(config.label_font_size, 14.0, "override");
        assert_eq!(config.dpi, 100.0, "default");
    }

    #[test]
    fn points_scale_with_dpi() {
        let config = PlotConfig::default().with_dpi(144.0);
        assert_eq!(config.points_to_px(72.0), 144.0, "one inch");
    }
}
