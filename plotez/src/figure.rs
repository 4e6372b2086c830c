// Copyright 2025 the plotez Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The retained figure model.
//!
//! A [`Figure`] is a grid of [`Axes`]. Each axes records its series, labels, title and
//! legend; nothing is rasterized. Twin axes share one axis with their parent and occupy the
//! same grid cell. Layout and scales are computed on demand from the recorded data.

use kurbo::Rect;
use plotez_style::{ConfigurationError, DataMismatchError, SubplotStyle, check_lengths};
use smallvec::SmallVec;

use crate::layout::{AxesLayout, AxesLayoutSpec, Size, grid_cells};
use crate::resolve::{ErrorBarDraw, LineDraw, ScatterDraw};
use crate::scale::{ScaleLinear, infer_domain};
use crate::{Error, PlotConfig, Result};

/// Handle to an [`Axes`] within its [`Figure`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AxesId(pub usize);

/// The axis a twin shares with its parent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SharedAxis {
    /// Shares the x axis; the twin has its own y axis on the right.
    X,
    /// Shares the y axis; the twin has its own x axis on the top.
    Y,
}

/// The drawing primitive of a series.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SeriesKind {
    /// Connected line, optionally with markers.
    Line,
    /// Unconnected markers.
    Scatter,
}

/// Error extents for one direction.
#[derive(Clone, Debug, PartialEq)]
pub enum ErrorSpec {
    /// The same error below and above each point.
    Symmetric(Vec<f64>),
    /// Separate lower and upper errors.
    Asymmetric {
        /// Error below each point.
        lower: Vec<f64>,
        /// Error above each point.
        upper: Vec<f64>,
    },
}

impl ErrorSpec {
    /// Checks that every error sequence has `len` entries.
    pub fn check_len(&self, what: &'static str, len: usize) -> Result<(), DataMismatchError> {
        let lens: SmallVec<[usize; 2]> = match self {
            Self::Symmetric(err) => smallvec::smallvec![err.len()],
            Self::Asymmetric { lower, upper } => smallvec::smallvec![lower.len(), upper.len()],
        };
        match lens.iter().find(|&&n| n != len) {
            Some(&n) => Err(DataMismatchError::LengthMismatch {
                what,
                left: len,
                right: n,
            }),
            None => Ok(()),
        }
    }

    /// The `(value - lower, value + upper)` interval at `index`.
    pub fn interval(&self, index: usize, value: f64) -> Option<(f64, f64)> {
        match self {
            Self::Symmetric(err) => err.get(index).map(|e| (value - e, value + e)),
            Self::Asymmetric { lower, upper } => {
                Some((value - lower.get(index)?, value + upper.get(index)?))
            }
        }
    }

    fn bounds(&self, values: &[f64]) -> Vec<f64> {
        values
            .iter()
            .enumerate()
            .filter_map(|(i, &v)| self.interval(i, v))
            .flat_map(|(lo, hi)| [lo, hi])
            .collect()
    }
}

/// The resolved style a series is drawn with.
#[derive(Clone, Debug, PartialEq)]
pub enum SeriesDraw {
    /// A line series.
    Line(LineDraw),
    /// A scatter series.
    Scatter(ScatterDraw),
    /// A line series with error bars.
    ErrorBar(ErrorBarDraw),
}

/// One recorded series.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    /// X values.
    pub x: Vec<f64>,
    /// Y values.
    pub y: Vec<f64>,
    /// Legend label; empty for none.
    pub label: String,
    /// Drawable style.
    pub draw: SeriesDraw,
    /// X errors, for error bar series.
    pub x_err: Option<ErrorSpec>,
    /// Y errors, for error bar series.
    pub y_err: Option<ErrorSpec>,
}

impl Series {
    /// The drawing primitive.
    pub fn kind(&self) -> SeriesKind {
        match self.draw {
            SeriesDraw::Scatter(_) => SeriesKind::Scatter,
            SeriesDraw::Line(_) | SeriesDraw::ErrorBar(_) => SeriesKind::Line,
        }
    }

    /// Returns `true` if the series belongs in a legend.
    pub fn has_legend_label(&self) -> bool {
        !self.label.is_empty() && !self.label.starts_with('_')
    }

    fn x_extent_values(&self) -> Vec<f64> {
        self.x_err
            .as_ref()
            .map(|e| e.bounds(&self.x))
            .unwrap_or_default()
    }

    fn y_extent_values(&self) -> Vec<f64> {
        self.y_err
            .as_ref()
            .map(|e| e.bounds(&self.y))
            .unwrap_or_default()
    }
}

/// A legend entry, pointing at a series.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LegendEntry {
    /// Axes holding the series.
    pub axes: AxesId,
    /// Index into that axes' series.
    pub series: usize,
    /// The label shown.
    pub label: String,
}

/// A legend, placed at the best location inside the plot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Legend {
    /// Entries in drawing order.
    pub entries: Vec<LegendEntry>,
}

/// One plotting area: series plus axis labels, title and legend.
#[derive(Clone, Debug, PartialEq)]
pub struct Axes {
    id: AxesId,
    cell: usize,
    twin_of: Option<(AxesId, SharedAxis)>,
    twins: SmallVec<[AxesId; 2]>,
    /// X axis label.
    pub x_label: String,
    /// Y axis label.
    pub y_label: String,
    /// Axes title.
    pub title: String,
    /// Recorded series in drawing order.
    pub series: Vec<Series>,
    /// Legend, if one was requested.
    pub legend: Option<Legend>,
}

impl Axes {
    fn new(id: AxesId, cell: usize, twin_of: Option<(AxesId, SharedAxis)>) -> Self {
        Self {
            id,
            cell,
            twin_of,
            twins: SmallVec::new(),
            x_label: String::new(),
            y_label: String::new(),
            title: String::new(),
            series: Vec::new(),
            legend: None,
        }
    }

    /// This axes' handle.
    pub fn id(&self) -> AxesId {
        self.id
    }

    /// Row-major grid cell index.
    pub fn cell(&self) -> usize {
        self.cell
    }

    /// Parent axes and shared axis, for twins.
    pub fn twin_of(&self) -> Option<(AxesId, SharedAxis)> {
        self.twin_of
    }

    /// Twins created from this axes.
    pub fn twins(&self) -> &[AxesId] {
        &self.twins
    }

    /// Records a line series and returns its index.
    pub fn plot(&mut self, x: &[f64], y: &[f64], label: &str, draw: LineDraw) -> Result<usize> {
        self.push(x, y, label, SeriesDraw::Line(draw), None, None)
    }

    /// Records a scatter series and returns its index.
    pub fn scatter(
        &mut self,
        x: &[f64],
        y: &[f64],
        label: &str,
        draw: ScatterDraw,
    ) -> Result<usize> {
        self.push(x, y, label, SeriesDraw::Scatter(draw), None, None)
    }

    /// Records an error bar series and returns its index.
    pub fn errorbar(
        &mut self,
        x: &[f64],
        y: &[f64],
        x_err: Option<ErrorSpec>,
        y_err: Option<ErrorSpec>,
        label: &str,
        draw: ErrorBarDraw,
    ) -> Result<usize> {
        if let Some(err) = &x_err {
            err.check_len("x errors", x.len())?;
        }
        if let Some(err) = &y_err {
            err.check_len("y errors", y.len())?;
        }
        self.push(x, y, label, SeriesDraw::ErrorBar(draw), x_err, y_err)
    }

    fn push(
        &mut self,
        x: &[f64],
        y: &[f64],
        label: &str,
        draw: SeriesDraw,
        x_err: Option<ErrorSpec>,
        y_err: Option<ErrorSpec>,
    ) -> Result<usize> {
        check_lengths("x vs y", x, y)?;
        self.series.push(Series {
            x: x.to_vec(),
            y: y.to_vec(),
            label: label.into(),
            draw,
            x_err,
            y_err,
        });
        let index = self.series.len() - 1;
        log::debug!("axes {:?}: recorded series {index} ({} points)", self.id, x.len());
        Ok(index)
    }

    /// Sets the x axis label.
    pub fn set_x_label(&mut self, label: impl Into<String>) {
        self.x_label = label.into();
    }

    /// Sets the y axis label.
    pub fn set_y_label(&mut self, label: impl Into<String>) {
        self.y_label = label.into();
    }

    /// Sets the title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Adds a legend over this axes' labeled series.
    pub fn add_legend(&mut self) {
        let entries = self.legend_entries();
        self.legend = Some(Legend { entries });
    }

    fn legend_entries(&self) -> Vec<LegendEntry> {
        self.series
            .iter()
            .enumerate()
            .filter(|(_, s)| s.has_legend_label())
            .map(|(i, s)| LegendEntry {
                axes: self.id,
                series: i,
                label: s.label.clone(),
            })
            .collect()
    }
}

/// Placement of every part of a figure, in pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct FigureLayout {
    /// The whole figure.
    pub view: Rect,
    /// Figure title band, if any.
    pub suptitle: Option<Rect>,
    /// Per-axes layout; twins share their parent's.
    pub axes: Vec<(AxesId, AxesLayout)>,
}

/// A grid of axes with figure-level title, size and defaults.
#[derive(Clone, Debug, PartialEq)]
pub struct Figure {
    config: PlotConfig,
    size: (f64, f64),
    rows: usize,
    cols: usize,
    share_x: bool,
    share_y: bool,
    axes: Vec<Axes>,
    suptitle: Option<String>,
}

impl Figure {
    /// Creates a figure with a single axes.
    pub fn new(style: &SubplotStyle, config: PlotConfig) -> Self {
        Self::build(1, 1, style, config)
    }

    /// Creates a figure with an `rows` by `cols` grid of axes.
    pub fn subplots(
        rows: usize,
        cols: usize,
        style: &SubplotStyle,
        config: PlotConfig,
    ) -> Result<Self, ConfigurationError> {
        if rows == 0 || cols == 0 {
            return Err(ConfigurationError::EmptyGrid { rows, cols });
        }
        Ok(Self::build(rows, cols, style, config))
    }

    fn build(rows: usize, cols: usize, style: &SubplotStyle, config: PlotConfig) -> Self {
        let axes = (0..rows * cols)
            .map(|cell| Axes::new(AxesId(cell), cell, None))
            .collect();
        let size = style.fig_size_inches();
        log::debug!(
            "created {rows}x{cols} figure ({} x {} in, sharex={}, sharey={})",
            size.0,
            size.1,
            style.shares_x(),
            style.shares_y()
        );
        Self {
            config,
            size,
            rows,
            cols,
            share_x: style.shares_x(),
            share_y: style.shares_y(),
            axes,
            suptitle: None,
        }
    }

    /// Figure-wide defaults.
    pub fn config(&self) -> &PlotConfig {
        &self.config
    }

    /// Grid shape as `(rows, cols)`.
    pub fn grid(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// The grid axes in row-major order (twins excluded).
    pub fn grid_axes(&self) -> Vec<AxesId> {
        (0..self.rows * self.cols).map(AxesId).collect()
    }

    /// Whether grid axes share their x axis.
    pub fn shares_x(&self) -> bool {
        self.share_x
    }

    /// Whether grid axes share their y axis.
    pub fn shares_y(&self) -> bool {
        self.share_y
    }

    /// Figure size in inches.
    pub fn size_inches(&self) -> (f64, f64) {
        self.size
    }

    /// Figure size in pixels.
    pub fn size_px(&self) -> Size {
        Size::new(self.size.0 * self.config.dpi, self.size.1 * self.config.dpi)
    }

    /// Figure title.
    pub fn suptitle(&self) -> Option<&str> {
        self.suptitle.as_deref()
    }

    /// Sets or clears the figure title.
    pub fn set_suptitle(&mut self, title: Option<String>) {
        self.suptitle = title.filter(|t| !t.is_empty());
    }

    /// All axes, twins included.
    pub fn iter_axes(&self) -> impl Iterator<Item = &Axes> {
        self.axes.iter()
    }

    /// Returns the axes for `id`.
    pub fn axes(&self, id: AxesId) -> Result<&Axes> {
        self.axes.get(id.0).ok_or(Error::UnknownAxes(id))
    }

    /// Returns the axes for `id`, mutably.
    pub fn axes_mut(&mut self, id: AxesId) -> Result<&mut Axes> {
        self.axes.get_mut(id.0).ok_or(Error::UnknownAxes(id))
    }

    /// Creates an axes sharing the x axis of `id`, with its own y axis.
    pub fn twin_x(&mut self, id: AxesId) -> Result<AxesId> {
        self.twin(id, SharedAxis::X)
    }

    /// Creates an axes sharing the y axis of `id`, with its own x axis.
    pub fn twin_y(&mut self, id: AxesId) -> Result<AxesId> {
        self.twin(id, SharedAxis::Y)
    }

    fn twin(&mut self, parent: AxesId, shared: SharedAxis) -> Result<AxesId> {
        let cell = self.axes(parent)?.cell;
        let id = AxesId(self.axes.len());
        self.axes.push(Axes::new(id, cell, Some((parent, shared))));
        self.axes_mut(parent)?.twins.push(id);
        log::debug!("created twin {id:?} of {parent:?} sharing {shared:?}");
        Ok(id)
    }

    /// Puts one legend on `id` covering its series and those of its twins.
    pub fn combined_legend(&mut self, id: AxesId) -> Result<()> {
        let axes = self.axes(id)?;
        let mut entries = axes.legend_entries();
        for twin in axes.twins.clone() {
            entries.extend(self.axes(twin)?.legend_entries());
        }
        self.axes_mut(id)?.legend = Some(Legend { entries });
        Ok(())
    }

    /// Axes whose data share the given axis with `id`.
    fn axis_group(&self, id: AxesId, axis: SharedAxis) -> Result<Vec<AxesId>> {
        let axes = self.axes(id)?;
        let root = match axes.twin_of {
            Some((parent, shared)) if shared == axis => parent,
            Some(_) => return Ok(vec![id]),
            None => id,
        };
        let shared_grid = match axis {
            SharedAxis::X => self.share_x,
            SharedAxis::Y => self.share_y,
        };
        let roots = if shared_grid { self.grid_axes() } else { vec![root] };
        let mut group = Vec::new();
        for root in roots {
            group.push(root);
            group.extend(
                self.axes(root)?
                    .twins
                    .iter()
                    .copied()
                    .filter(|t| self.axes[t.0].twin_of.is_some_and(|(_, s)| s == axis)),
            );
        }
        Ok(group)
    }

    /// Data extent along `axis` for `id`, including shared axes and error bars.
    pub fn domain(&self, id: AxesId, axis: SharedAxis) -> Result<Option<(f64, f64)>> {
        let group = self.axis_group(id, axis)?;
        let mut extra: Vec<Vec<f64>> = Vec::new();
        let mut columns: Vec<&[f64]> = Vec::new();
        for member in &group {
            for series in &self.axes[member.0].series {
                match axis {
                    SharedAxis::X => {
                        columns.push(&series.x);
                        extra.push(series.x_extent_values());
                    }
                    SharedAxis::Y => {
                        columns.push(&series.y);
                        extra.push(series.y_extent_values());
                    }
                }
            }
        }
        Ok(infer_domain(columns.into_iter().chain(extra.iter().map(Vec::as_slice))))
    }

    /// Linear x scale for `id` mapping onto `range`, or `None` without data.
    pub fn x_scale(&self, id: AxesId, range: (f64, f64)) -> Result<Option<ScaleLinear>> {
        Ok(self
            .domain(id, SharedAxis::X)?
            .map(|d| ScaleLinear::nice(d, range, self.config.tick_count)))
    }

    /// Linear y scale for `id` mapping onto `range`, or `None` without data.
    pub fn y_scale(&self, id: AxesId, range: (f64, f64)) -> Result<Option<ScaleLinear>> {
        Ok(self
            .domain(id, SharedAxis::Y)?
            .map(|d| ScaleLinear::nice(d, range, self.config.tick_count)))
    }

    /// Places every axes in figure pixels.
    pub fn layout(&self) -> FigureLayout {
        let view = self.size_px().to_rect();
        let title_px = self.config.points_to_px(self.config.title_font_size);
        let label_px = self.config.points_to_px(self.config.label_font_size);
        let padding = 0.5 * label_px;

        let suptitle = self.suptitle.as_ref().map(|_| {
            let top = view.y0 + padding;
            Rect::new(view.x0, top, view.x1, top + 1.8 * title_px)
        });
        let grid_area = Rect::new(
            view.x0,
            suptitle.map_or(view.y0, |r| r.y1),
            view.x1,
            view.y1,
        );
        let cells = grid_cells(grid_area, self.rows, self.cols);

        let tick_band = 1.8 * label_px;
        let tick_band_y = 3.5 * label_px;
        let label_band = |label: &str| if label.is_empty() { 0.0 } else { 1.6 * label_px };

        let mut axes = Vec::with_capacity(self.axes.len());
        for (cell, rect) in cells.into_iter().enumerate() {
            let primary = &self.axes[cell];
            let mut spec = AxesLayoutSpec {
                title_top: (!primary.title.is_empty()).then_some(1.8 * title_px),
                axis_left: Some(tick_band_y + label_band(&primary.y_label)),
                axis_bottom: Some(tick_band + label_band(&primary.x_label)),
                outer_padding: padding,
                ..AxesLayoutSpec::default()
            };
            for twin in primary.twins.iter().map(|t| &self.axes[t.0]) {
                match twin.twin_of {
                    Some((_, SharedAxis::X)) => {
                        spec.axis_right = Some(tick_band_y + label_band(&twin.y_label));
                    }
                    Some((_, SharedAxis::Y)) => {
                        spec.axis_top = Some(tick_band + label_band(&twin.x_label));
                    }
                    None => {}
                }
            }
            spec.legend = primary.legend.as_ref().map(|legend| {
                let longest = legend
                    .entries
                    .iter()
                    .map(|e| e.label.chars().count())
                    .max()
                    .unwrap_or(0);
                Size::new(
                    2.5 * label_px + 0.6 * label_px * longest as f64,
                    0.5 * label_px + 1.5 * label_px * legend.entries.len() as f64,
                )
            });
            let arranged = AxesLayout::arrange(rect, &spec);
            axes.push((primary.id, arranged));
            for twin in &primary.twins {
                axes.push((*twin, arranged));
            }
        }

        FigureLayout {
            view,
            suptitle,
            axes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::resolve_line;
    use plotez_style::LineStyle;

    fn line() -> LineDraw {
        resolve_line(&LineStyle::default(), 0, &PlotConfig::default()).expect("defaults")
    }

    #[test]
    fn zero_grid_is_rejected() {
        let err = Figure::subplots(0, 3, &SubplotStyle::default(), PlotConfig::default())
            .expect_err("empty grid");
        assert_eq!(err, ConfigurationError::EmptyGrid { rows: 0, cols: 3 }, "error");
    }

    #[test]
    fn size_in_pixels_follows_dpi() {
        let style = SubplotStyle::default().with_fig_size(4.0, 3.0);
        let fig = Figure::new(&style, PlotConfig::default().with_dpi(50.0));
        assert_eq!(fig.size_px(), Size::new(200.0, 150.0), "inches times dpi");
    }

    #[test]
    fn series_lengths_are_checked() {
        let mut fig = Figure::new(&SubplotStyle::default(), PlotConfig::default());
        let axes = fig.axes_mut(AxesId(0)).expect("first axes");
        let err = axes.plot(&[1.0, 2.0], &[1.0], "", line()).expect_err("mismatch");
        assert!(err.as_data_mismatch().is_some(), "data mismatch: {err}");
    }

    #[test]
    fn twin_x_shares_the_x_domain_only() {
        let mut fig = Figure::new(&SubplotStyle::default(), PlotConfig::default());
        let primary = AxesId(0);
        let twin = fig.twin_x(primary).expect("twin");
        fig.axes_mut(primary)
            .and_then(|a| a.plot(&[0.0, 1.0], &[0.0, 10.0], "a", line()))
            .expect("primary series");
        fig.axes_mut(twin)
            .and_then(|a| a.plot(&[-1.0, 3.0], &[100.0, 200.0], "b", line()))
            .expect("twin series");

        let domain = |id, axis| fig.domain(id, axis).ok().flatten();
        assert_eq!(domain(primary, SharedAxis::X), Some((-1.0, 3.0)), "shared x");
        assert_eq!(domain(twin, SharedAxis::X), Some((-1.0, 3.0)), "shared x");
        assert_eq!(domain(primary, SharedAxis::Y), Some((0.0, 10.0)), "own y");
        assert_eq!(domain(twin, SharedAxis::Y), Some((100.0, 200.0)), "own y");
    }

    #[test]
    fn combined_legend_collects_twin_entries() {
        let mut fig = Figure::new(&SubplotStyle::default(), PlotConfig::default());
        let primary = AxesId(0);
        let twin = fig.twin_y(primary).expect("twin");
        fig.axes_mut(primary)
            .and_then(|a| a.plot(&[0.0], &[0.0], "first", line()))
            .expect("series");
        fig.axes_mut(twin)
            .and_then(|a| a.plot(&[0.0], &[0.0], "", line()))
            .expect("series");
        fig.axes_mut(twin)
            .and_then(|a| a.plot(&[0.0], &[0.0], "second", line()))
            .expect("series");
        fig.combined_legend(primary).expect("legend");

        let legend = fig.axes(primary).expect("axes").legend.clone().expect("legend");
        let labels: Vec<_> = legend.entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, ["first", "second"], "unlabeled series skipped");
        assert_eq!(legend.entries[1].axes, twin, "entry points at the twin");
    }

    #[test]
    fn error_bars_widen_the_domain() {
        let mut fig = Figure::new(&SubplotStyle::default(), PlotConfig::default());
        let draw = crate::resolve::resolve_error_bar(
            &plotez_style::ErrorBarStyle::default(),
            0,
            &PlotConfig::default(),
        )
        .expect("defaults");
        fig.axes_mut(AxesId(0))
            .and_then(|a| {
                a.errorbar(
                    &[1.0, 2.0],
                    &[5.0, 6.0],
                    None,
                    Some(ErrorSpec::Asymmetric {
                        lower: vec![1.0, 1.0],
                        upper: vec![0.5, 2.0],
                    }),
                    "",
                    draw,
                )
            })
            .expect("series");
        assert_eq!(
            fig.domain(AxesId(0), SharedAxis::Y).ok().flatten(),
            Some((4.0, 8.0)),
            "errors included"
        );
    }

    #[test]
    fn layout_places_twins_with_their_parent() {
        let mut fig = Figure::subplots(1, 2, &SubplotStyle::default(), PlotConfig::default())
            .expect("grid");
        fig.set_suptitle(Some("Figure".into()));
        let twin = fig.twin_x(AxesId(1)).expect("twin");
        let layout = fig.layout();
        assert_eq!(layout.axes.len(), 3, "two cells plus a twin");
        let suptitle = layout.suptitle.expect("suptitle band");
        let plot_of = |id| layout.axes.iter().find(|(a, _)| *a == id).map(|(_, l)| l.plot);
        assert_eq!(plot_of(twin), plot_of(AxesId(1)), "same plot rect");
        let left = plot_of(AxesId(0)).expect("left");
        assert!(left.y0 > suptitle.y1, "below the figure title");
        assert!(left.x1 <= plot_of(AxesId(1)).expect("right").x0, "side by side");
    }
}
