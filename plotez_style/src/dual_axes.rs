// Copyright 2025 the plotez Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Label management and data validation for dual-axis plots.
//!
//! A dual y-axis plot (`use_twin_x`) draws `x1 vs y1` and `x1 vs y2` against a shared x
//! axis; a dual x-axis plot draws `x1 vs y1` and `x2 vs y1` against a shared y axis.

extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::DataMismatchError;

/// Checks that `labels` and `data` have the same number of entries.
///
/// On success the inputs are returned unchanged.
pub fn dual_axes_data_validation<'a, L, D>(
    labels: &'a [L],
    data: &'a [D],
) -> Result<(&'a [L], &'a [D]), DataMismatchError> {
    if labels.len() != data.len() {
        return Err(DataMismatchError::LabelCount {
            labels: labels.len(),
            datasets: data.len(),
        });
    }
    Ok((labels, data))
}

/// Positional default labels: `"Data 1"`, `"Data 2"`, ...
pub fn auto_series_labels(count: usize) -> Vec<String> {
    (1..=count).map(|i| format!("Data {i}")).collect()
}

/// Resolves per-series labels for `count` datasets.
///
/// Explicit labels must match `count`. Without labels, `auto_label` generates positional
/// defaults and otherwise every label is empty.
pub fn series_labels(
    labels: Option<Vec<String>>,
    count: usize,
    auto_label: bool,
) -> Result<Vec<String>, DataMismatchError> {
    match labels {
        Some(labels) => {
            if labels.len() != count {
                return Err(DataMismatchError::LabelCount {
                    labels: labels.len(),
                    datasets: count,
                });
            }
            Ok(labels)
        }
        None if auto_label => Ok(auto_series_labels(count)),
        None => Ok(alloc::vec![String::new(); count]),
    }
}

/// Borrowed data for a (possibly) dual-axis plot.
#[derive(Clone, Copy, Debug, Default)]
pub struct DualAxesData<'a> {
    /// Primary x data.
    pub x1: &'a [f64],
    /// Primary y data.
    pub y1: &'a [f64],
    /// Secondary x data (dual x-axis plots only).
    pub x2: Option<&'a [f64]>,
    /// Secondary y data (dual y-axis plots only).
    pub y2: Option<&'a [f64]>,
}

impl<'a> DualAxesData<'a> {
    /// Single-series data.
    pub fn new(x1: &'a [f64], y1: &'a [f64]) -> Self {
        Self {
            x1,
            y1,
            x2: None,
            y2: None,
        }
    }

    /// Adds secondary y data.
    pub fn with_y2(mut self, y2: &'a [f64]) -> Self {
        self.y2 = Some(y2);
        self
    }

    /// Adds secondary x data.
    pub fn with_x2(mut self, x2: &'a [f64]) -> Self {
        self.x2 = Some(x2);
        self
    }
}

/// Validates data and axis labels for a dual-axis plot.
///
/// Requires exactly three axis labels, non-empty primary data, no secondary data for the
/// other direction, and equal lengths for every pair that is plotted together.
pub fn validate_dual_axes(
    data: &DualAxesData<'_>,
    use_twin_x: bool,
    axis_labels: &[String],
) -> Result<(), DataMismatchError> {
    if axis_labels.len() != 3 {
        return Err(DataMismatchError::AxisLabelCount {
            found: axis_labels.len(),
        });
    }
    if data.x1.is_empty() || data.y1.is_empty() {
        return Err(DataMismatchError::EmptyPrimary);
    }
    if use_twin_x && data.x2.is_some() {
        return Err(DataMismatchError::UnexpectedSecondaryX);
    }
    if !use_twin_x && data.y2.is_some() {
        return Err(DataMismatchError::UnexpectedSecondaryY);
    }
    check_lengths("x1 vs y1", data.x1, data.y1)?;
    if let Some(y2) = data.y2 {
        check_lengths("x1 vs y2", data.x1, y2)?;
    }
    if let Some(x2) = data.x2 {
        check_lengths("x2 vs y1", x2, data.y1)?;
    }
    Ok(())
}

/// Checks that two sequences plotted against each other have equal lengths.
pub fn check_lengths(
    what: &'static str,
    left: &[f64],
    right: &[f64],
) -> Result<(), DataMismatchError> {
    if left.len() == right.len() {
        Ok(())
    } else {
        Err(DataMismatchError::LengthMismatch {
            what,
            left: left.len(),
            right: right.len(),
        })
    }
}

/// Caller-supplied labels for a dual-axis plot; `None` means "not given".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DualAxesLabelInput {
    /// Label for `x1 vs y1`.
    pub x1y1: Option<String>,
    /// Label for `x1 vs y2` (dual y-axis).
    pub x1y2: Option<String>,
    /// Label for `x2 vs y1` (dual x-axis).
    pub x2y1: Option<String>,
    /// Axis labels: primary x, primary y, secondary axis. Individual entries may be missing.
    pub axis_labels: Option<Vec<Option<String>>>,
    /// Plot title.
    pub plot_title: Option<String>,
}

/// Finalized labels for a dual-axis plot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DualAxesLabels {
    /// Label for `x1 vs y1`.
    pub x1y1: String,
    /// Label for `x1 vs y2`.
    pub x1y2: String,
    /// Label for `x2 vs y1`.
    pub x2y1: String,
    /// Plot title.
    pub plot_title: String,
    /// Axis labels (normally three entries; see [`validate_dual_axes`]).
    pub axis_labels: Vec<String>,
}

impl DualAxesLabels {
    /// Returns `true` if any series label is non-empty, i.e. a legend is warranted.
    pub fn has_series_labels(&self) -> bool {
        !(self.x1y1.is_empty() && self.x1y2.is_empty() && self.x2y1.is_empty())
    }
}

/// Fills in missing labels for a dual-axis plot.
///
/// With `auto_label`, missing labels take these defaults:
///
/// | | dual y-axis | dual x-axis |
/// |---|---|---|
/// | axis labels | `X`, `Y1`, `Y2` | `X1`, `Y`, `X2` |
/// | series labels | `X1 vs Y1`, `X1 vs Y2` | `Y vs X1`, `Y vs X2` |
/// | title | `Plot` | `Plot` |
///
/// Axis labels are filled per entry. Without `auto_label`, missing labels become empty
/// strings.
pub fn dual_axes_label_management(
    input: DualAxesLabelInput,
    auto_label: bool,
    use_twin_x: bool,
) -> DualAxesLabels {
    let (default_axes, default_series): ([&str; 3], [&str; 2]) = if use_twin_x {
        (["X", "Y1", "Y2"], ["X1 vs Y1", "X1 vs Y2"])
    } else {
        (["X1", "Y", "X2"], ["Y vs X1", "Y vs X2"])
    };
    let or_default = |given: Option<String>, default: &str| match given {
        Some(s) if !s.is_empty() => s,
        _ if auto_label => default.into(),
        _ => String::new(),
    };

    let axis_labels = match input.axis_labels {
        Some(given) => given
            .into_iter()
            .enumerate()
            .map(|(i, label)| or_default(label, default_axes.get(i).copied().unwrap_or("")))
            .collect(),
        None => default_axes.iter().map(|d| or_default(None, *d)).collect(),
    };

    let x1y1 = or_default(input.x1y1, default_series[0]);
    let (x1y2, x2y1) = if use_twin_x {
        (or_default(input.x1y2, default_series[1]), or_default(input.x2y1, ""))
    } else {
        (or_default(input.x1y2, ""), or_default(input.x2y1, default_series[1]))
    };

    DualAxesLabels {
        x1y1,
        x1y2,
        x2y1,
        plot_title: or_default(input.plot_title, "Plot"),
        axis_labels,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn one_label_for_two_datasets_fails() {
        let labels = ["a"];
        let data = [vec![1.0, 2.0], vec![3.0, 4.0]];
        let err = dual_axes_data_validation(&labels, &data).expect_err("1 vs 2");
        assert_eq!(
            err,
            DataMismatchError::LabelCount {
                labels: 1,
                datasets: 2
            },
            "error"
        );
    }

    #[test]
    fn matching_counts_return_inputs_unchanged() {
        let labels = ["a", "b"];
        let data = [vec![1.0], vec![2.0]];
        let (l, d) = dual_axes_data_validation(&labels, &data).expect("2 vs 2");
        assert_eq!(l, &labels[..], "labels");
        assert_eq!(d, &data[..], "data");
    }

    #[test]
    fn auto_labels_follow_the_pattern() {
        let labels = series_labels(None, 3, true).expect("generated");
        assert_eq!(labels, ["Data 1", "Data 2", "Data 3"], "pattern");
        let blank = series_labels(None, 2, false).expect("blank");
        assert_eq!(blank, ["", ""], "blank labels");
        let err = series_labels(Some(vec!["only".into()]), 2, true).expect_err("count");
        assert!(matches!(err, DataMismatchError::LabelCount { .. }), "got {err:?}");
    }

    #[test]
    fn validation_rules() {
        let x = [1.0, 2.0, 3.0];
        let y = [4.0, 5.0, 6.0];
        let three: Vec<String> = vec!["X".into(), "Y1".into(), "Y2".into()];

        let dual_y = DualAxesData::new(&x, &y).with_y2(&y);
        assert!(validate_dual_axes(&dual_y, true, &three).is_ok(), "dual y ok");

        let dual_x = DualAxesData::new(&x, &y).with_x2(&x);
        assert!(validate_dual_axes(&dual_x, false, &three).is_ok(), "dual x ok");

        assert_eq!(
            validate_dual_axes(&dual_x, true, &three),
            Err(DataMismatchError::UnexpectedSecondaryX),
            "x2 with twin x"
        );
        assert_eq!(
            validate_dual_axes(&dual_y, false, &three),
            Err(DataMismatchError::UnexpectedSecondaryY),
            "y2 without twin x"
        );
        assert_eq!(
            validate_dual_axes(&dual_y, true, &three[..2]),
            Err(DataMismatchError::AxisLabelCount { found: 2 }),
            "two axis labels"
        );
        assert_eq!(
            validate_dual_axes(&DualAxesData::new(&[], &y), true, &three),
            Err(DataMismatchError::EmptyPrimary),
            "empty x"
        );
        let short = [1.0];
        assert!(
            matches!(
                validate_dual_axes(&DualAxesData::new(&x, &y).with_y2(&short), true, &three),
                Err(DataMismatchError::LengthMismatch { what: "x1 vs y2", .. })
            ),
            "short y2"
        );
    }

    #[test]
    fn auto_labels_for_dual_y() {
        let labels = dual_axes_label_management(DualAxesLabelInput::default(), true, true);
        assert_eq!(labels.axis_labels, ["X", "Y1", "Y2"], "axes");
        assert_eq!(labels.x1y1, "X1 vs Y1", "first series");
        assert_eq!(labels.x1y2, "X1 vs Y2", "second series");
        assert_eq!(labels.x2y1, "", "unused series");
        assert_eq!(labels.plot_title, "Plot", "title");
    }

    #[test]
    fn auto_labels_for_dual_x_keep_given_values() {
        let input = DualAxesLabelInput {
            x1y1: Some("mine".into()),
            axis_labels: Some(vec![Some("time".into()), None, None]),
            ..DualAxesLabelInput::default()
        };
        let labels = dual_axes_label_management(input, true, false);
        assert_eq!(labels.axis_labels, ["time", "Y", "X2"], "filled per entry");
        assert_eq!(labels.x1y1, "mine", "given label kept");
        assert_eq!(labels.x2y1, "Y vs X2", "secondary series");
        assert_eq!(labels.x1y2, "", "unused series");
    }

    #[test]
    fn without_auto_label_missing_labels_are_blank() {
        let labels = dual_axes_label_management(DualAxesLabelInput::default(), false, true);
        assert_eq!(labels.axis_labels, ["", "", ""], "blank axes");
        assert_eq!(labels.plot_title, "", "blank title");
        assert!(!labels.has_series_labels(), "no legend");
    }
}
