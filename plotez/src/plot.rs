// Copyright 2025 the plotez Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The plotting helpers.
//!
//! Every helper comes in two forms: one that creates a new [`Figure`] and returns it with
//! the axes it drew on, and an `_on` form that draws onto an existing figure.

use std::path::Path;
use std::str::FromStr;

use plotez_style::{
    ConfigurationError, DataMismatchError, DualAxesData, DualAxesLabelInput, ErrorBarStyle,
    LineStyle, Orientation, OverrideMapping, ScatterStyle, StyleParams, SubplotStyle,
    check_lengths, dual_axes_label_management, merge_style, series_labels, split_dictionary,
    validate_dual_axes,
};

use crate::figure::{Axes, AxesId, ErrorSpec, Figure, SeriesKind};
use crate::file::read_two_column_file;
use crate::resolve::{resolve_error_bar, resolve_line, resolve_scatter};
use crate::{PlotConfig, Result};

/// A style for one plotting call.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SeriesStyle {
    /// Line styling.
    Line(LineStyle),
    /// Scatter styling.
    Scatter(ScatterStyle),
    /// Error bar styling; its line part also styles plain lines.
    ErrorBar(ErrorBarStyle),
}

impl SeriesStyle {
    /// Name of the wrapped style type.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Line(_) => LineStyle::KIND,
            Self::Scatter(_) => ScatterStyle::KIND,
            Self::ErrorBar(_) => ErrorBarStyle::KIND,
        }
    }
}

impl From<LineStyle> for SeriesStyle {
    fn from(value: LineStyle) -> Self {
        Self::Line(value)
    }
}

impl From<ScatterStyle> for SeriesStyle {
    fn from(value: ScatterStyle) -> Self {
        Self::Scatter(value)
    }
}

impl From<ErrorBarStyle> for SeriesStyle {
    fn from(value: ErrorBarStyle) -> Self {
        Self::ErrorBar(value)
    }
}

/// Selects the drawing primitive and checks that `style` fits it.
///
/// Scatter plots accept a [`ScatterStyle`] or no style. Line plots accept a [`LineStyle`],
/// an [`ErrorBarStyle`] or no style.
pub fn plot_or_scatter(
    is_scatter: bool,
    style: Option<&SeriesStyle>,
) -> Result<SeriesKind, ConfigurationError> {
    match (is_scatter, style) {
        (true, None | Some(SeriesStyle::Scatter(_))) => Ok(SeriesKind::Scatter),
        (false, None | Some(SeriesStyle::Line(_) | SeriesStyle::ErrorBar(_))) => {
            Ok(SeriesKind::Line)
        }
        (true, Some(other)) => Err(ConfigurationError::StyleMismatch {
            found: other.kind_name(),
            primitive: "scatter",
        }),
        (false, Some(other)) => Err(ConfigurationError::StyleMismatch {
            found: other.kind_name(),
            primitive: "line",
        }),
    }
}

/// Styling and figure options shared by every helper.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DrawOptions {
    /// Draw markers only instead of lines.
    pub is_scatter: bool,
    /// Base style; `None` uses the defaults of the primitive's style type.
    pub style: Option<SeriesStyle>,
    /// Overrides merged onto the base style.
    pub overrides: Option<OverrideMapping>,
    /// Figure options for helpers that create a figure.
    pub subplot: Option<SubplotStyle>,
    /// Defaults for helpers that create a figure.
    pub config: Option<PlotConfig>,
}

impl DrawOptions {
    /// Draws markers only.
    pub fn with_scatter(mut self, is_scatter: bool) -> Self {
        self.is_scatter = is_scatter;
        self
    }

    /// Sets the base style.
    pub fn with_style(mut self, style: impl Into<SeriesStyle>) -> Self {
        self.style = Some(style.into());
        self
    }

    /// Sets the overrides.
    pub fn with_overrides(mut self, overrides: OverrideMapping) -> Self {
        self.overrides = Some(overrides);
        self
    }

    /// Sets the figure options.
    pub fn with_subplot(mut self, subplot: SubplotStyle) -> Self {
        self.subplot = Some(subplot);
        self
    }

    /// Sets the figure defaults.
    pub fn with_config(mut self, config: PlotConfig) -> Self {
        self.config = Some(config);
        self
    }

    fn subplot_style(&self) -> SubplotStyle {
        self.subplot.clone().unwrap_or_default()
    }

    fn new_figure(&self) -> Figure {
        Figure::new(&self.subplot_style(), self.config.unwrap_or_default())
    }

    fn effective(&self) -> Result<EffectiveStyle> {
        let style = self.style.as_ref();
        let overrides = self.overrides.as_ref();
        Ok(match plot_or_scatter(self.is_scatter, style)? {
            SeriesKind::Scatter => {
                let base = match style {
                    Some(SeriesStyle::Scatter(s)) => s.clone(),
                    _ => ScatterStyle::default(),
                };
                EffectiveStyle::Scatter(merge_style(&base, overrides)?)
            }
            SeriesKind::Line => {
                let base = match style {
                    Some(SeriesStyle::Line(l)) => l.clone(),
                    Some(SeriesStyle::ErrorBar(e)) => e.line.clone(),
                    _ => LineStyle::default(),
                };
                EffectiveStyle::Line(merge_style(&base, overrides)?)
            }
        })
    }

    fn effective_error_bar(&self) -> Result<ErrorBarStyle> {
        let base = match &self.style {
            None => ErrorBarStyle::default(),
            Some(SeriesStyle::Line(l)) => ErrorBarStyle::from_line(l.clone()),
            Some(SeriesStyle::ErrorBar(e)) => e.clone(),
            Some(other) => {
                return Err(ConfigurationError::StyleMismatch {
                    found: other.kind_name(),
                    primitive: "error bar",
                }
                .into());
            }
        };
        Ok(merge_style(&base, self.overrides.as_ref())?)
    }
}

/// A merged style, ready to resolve per series.
#[derive(Clone, Debug)]
enum EffectiveStyle {
    Line(LineStyle),
    Scatter(ScatterStyle),
}

impl EffectiveStyle {
    fn split(&self) -> Result<(Self, Self)> {
        Ok(match self {
            Self::Line(s) => {
                let (a, b) = split_dictionary(s)?;
                (Self::Line(a), Self::Line(b))
            }
            Self::Scatter(s) => {
                let (a, b) = split_dictionary(s)?;
                (Self::Scatter(a), Self::Scatter(b))
            }
        })
    }

    /// Resolves series `index` and records it on `axes`.
    fn draw(
        &self,
        axes: &mut Axes,
        x: &[f64],
        y: &[f64],
        label: &str,
        index: usize,
        config: &PlotConfig,
    ) -> Result<usize> {
        match self {
            Self::Line(s) => axes.plot(x, y, label, resolve_line(s, index, config)?),
            Self::Scatter(s) => axes.scatter(x, y, label, resolve_scatter(s, index, config)?),
        }
    }
}

/// The axes a dual-axis helper drew on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DualAxes {
    /// The axes holding the first series.
    pub primary: AxesId,
    /// The twin axes, if one was created.
    pub secondary: Option<AxesId>,
}

/// Options for [`plot_with_dual_axes`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DualAxesOptions {
    /// Series, axis and title labels; missing entries are filled in.
    pub labels: DualAxesLabelInput,
    /// `true` for a dual y-axis plot (shared x); `false` for a dual x-axis plot.
    pub use_twin_x: bool,
    /// Fill missing labels with defaults.
    pub auto_label: bool,
    /// Styling and figure options.
    pub draw: DrawOptions,
}

/// Plots `x1 vs y1` and, optionally, a second series against a twin axis on a new figure.
pub fn plot_with_dual_axes(
    data: DualAxesData<'_>,
    options: &DualAxesOptions,
) -> Result<(Figure, DualAxes)> {
    let mut figure = options.draw.new_figure();
    let axes = plot_with_dual_axes_on(&mut figure, AxesId(0), data, options)?;
    Ok((figure, axes))
}

/// Like [`plot_with_dual_axes`], drawing onto `axes` of an existing figure.
///
/// A dual y-axis plot always creates a twin sharing x and draws `x1 vs y2` on it when `y2`
/// is given. A dual x-axis plot creates a twin sharing y only when `x2` is given.
pub fn plot_with_dual_axes_on(
    figure: &mut Figure,
    axes: AxesId,
    data: DualAxesData<'_>,
    options: &DualAxesOptions,
) -> Result<DualAxes> {
    let use_twin_x = options.use_twin_x;
    let labels = dual_axes_label_management(options.labels.clone(), options.auto_label, use_twin_x);
    validate_dual_axes(&data, use_twin_x, &labels.axis_labels)?;
    // Checked above: exactly three entries.
    let [x_label, y_label, secondary_label] = [0, 1, 2].map(|i| labels.axis_labels[i].clone());

    figure.axes(axes)?;
    let effective = options.draw.effective()?;
    let config = *figure.config();
    let has_second = if use_twin_x {
        data.y2.is_some()
    } else {
        data.x2.is_some()
    };
    let (first, second) = if has_second {
        let (a, b) = effective.split()?;
        (a, Some(b))
    } else {
        (effective, None)
    };

    let primary = figure.axes_mut(axes)?;
    first.draw(primary, data.x1, data.y1, &labels.x1y1, 0, &config)?;
    primary.set_x_label(x_label);
    primary.set_y_label(y_label);
    if !labels.plot_title.is_empty() {
        primary.set_title(labels.plot_title.clone());
    }

    let secondary = if use_twin_x {
        let twin = figure.twin_x(axes)?;
        if let (Some(y2), Some(style)) = (data.y2, &second) {
            let twin_axes = figure.axes_mut(twin)?;
            style.draw(twin_axes, data.x1, y2, &labels.x1y2, 0, &config)?;
            twin_axes.set_y_label(secondary_label);
        }
        Some(twin)
    } else if let (Some(x2), Some(style)) = (data.x2, &second) {
        let twin = figure.twin_y(axes)?;
        let twin_axes = figure.axes_mut(twin)?;
        style.draw(twin_axes, x2, data.y1, &labels.x2y1, 0, &config)?;
        twin_axes.set_x_label(secondary_label);
        Some(twin)
    } else {
        None
    };

    if labels.has_series_labels() {
        figure.combined_legend(axes)?;
    }
    log::debug!(
        "dual-axes plot on {axes:?}: twin_x={use_twin_x}, secondary={secondary:?}"
    );
    Ok(DualAxes {
        primary: axes,
        secondary,
    })
}

/// Options for [`plot_xy`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct XyOptions {
    /// X axis label.
    pub x_label: Option<String>,
    /// Y axis label.
    pub y_label: Option<String>,
    /// Title.
    pub plot_title: Option<String>,
    /// Legend label of the series.
    pub data_label: Option<String>,
    /// Replace all labels with `X`, `Y`, `Plot` and `X vs Y`.
    pub auto_label: bool,
    /// Styling and figure options.
    pub draw: DrawOptions,
}

impl XyOptions {
    /// Sets the axis labels.
    pub fn with_axis_labels(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.x_label = Some(x.into());
        self.y_label = Some(y.into());
        self
    }

    /// Sets the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.plot_title = Some(title.into());
        self
    }

    /// Sets the series label.
    pub fn with_data_label(mut self, label: impl Into<String>) -> Self {
        self.data_label = Some(label.into());
        self
    }

    /// Enables automatic labels.
    pub fn with_auto_label(mut self, auto_label: bool) -> Self {
        self.auto_label = auto_label;
        self
    }

    /// Sets the styling and figure options.
    pub fn with_draw(mut self, draw: DrawOptions) -> Self {
        self.draw = draw;
        self
    }

    fn to_dual(&self) -> DualAxesOptions {
        let (x, y, title, data) = if self.auto_label {
            (
                Some("X".into()),
                Some("Y".into()),
                Some("Plot".into()),
                Some("X vs Y".into()),
            )
        } else {
            (
                self.x_label.clone(),
                self.y_label.clone(),
                self.plot_title.clone(),
                self.data_label.clone(),
            )
        };
        DualAxesOptions {
            labels: DualAxesLabelInput {
                x1y1: data,
                axis_labels: Some(vec![x, y, None]),
                plot_title: title,
                ..DualAxesLabelInput::default()
            },
            use_twin_x: false,
            auto_label: self.auto_label,
            draw: self.draw.clone(),
        }
    }
}

/// Plots `y` against `x` on a new figure.
pub fn plot_xy(x: &[f64], y: &[f64], options: &XyOptions) -> Result<(Figure, DualAxes)> {
    let mut figure = options.draw.new_figure();
    let axes = plot_xy_on(&mut figure, AxesId(0), x, y, options)?;
    Ok((figure, axes))
}

/// Like [`plot_xy`], drawing onto `axes` of an existing figure.
pub fn plot_xy_on(
    figure: &mut Figure,
    axes: AxesId,
    x: &[f64],
    y: &[f64],
    options: &XyOptions,
) -> Result<DualAxes> {
    plot_with_dual_axes_on(figure, axes, DualAxesData::new(x, y), &options.to_dual())
}

/// Options for [`plot_xyy`].
#[derive(Clone, Debug, PartialEq)]
pub struct XyyOptions {
    /// X axis label.
    pub x_label: Option<String>,
    /// Label of the first y axis.
    pub y1_label: Option<String>,
    /// Label of the second y axis.
    pub y2_label: Option<String>,
    /// Title.
    pub plot_title: Option<String>,
    /// Legend labels of the two series.
    pub data_labels: [Option<String>; 2],
    /// Put the second series on a twin y axis (the default).
    ///
    /// Turning this off asks for a dual-x plot, which cannot take a second y series, so
    /// [`plot_xyy`] then fails with [`DataMismatchError::UnexpectedSecondaryY`].
    pub use_twin_x: bool,
    /// Replace all labels with `X`, `Y1`, `Y2`, `XYY plot`, `X vs Y1` and `X vs Y2`.
    pub auto_label: bool,
    /// Styling and figure options.
    pub draw: DrawOptions,
}

impl Default for XyyOptions {
    fn default() -> Self {
        Self {
            x_label: None,
            y1_label: None,
            y2_label: None,
            plot_title: None,
            data_labels: [None, None],
            use_twin_x: true,
            auto_label: false,
            draw: DrawOptions::default(),
        }
    }
}

impl XyyOptions {
    /// Sets the axis labels.
    pub fn with_axis_labels(
        mut self,
        x: impl Into<String>,
        y1: impl Into<String>,
        y2: impl Into<String>,
    ) -> Self {
        self.x_label = Some(x.into());
        self.y1_label = Some(y1.into());
        self.y2_label = Some(y2.into());
        self
    }

    /// Sets the series labels.
    pub fn with_data_labels(mut self, first: impl Into<String>, second: impl Into<String>) -> Self {
        self.data_labels = [Some(first.into()), Some(second.into())];
        self
    }

    /// Chooses whether the second series goes on a twin y axis.
    pub fn with_twin_x(mut self, use_twin_x: bool) -> Self {
        self.use_twin_x = use_twin_x;
        self
    }

    /// Enables automatic labels.
    pub fn with_auto_label(mut self, auto_label: bool) -> Self {
        self.auto_label = auto_label;
        self
    }

    /// Sets the styling and figure options.
    pub fn with_draw(mut self, draw: DrawOptions) -> Self {
        self.draw = draw;
        self
    }

    fn to_dual(&self) -> DualAxesOptions {
        let labels = if self.auto_label {
            DualAxesLabelInput {
                x1y1: Some("X vs Y1".into()),
                x1y2: Some("X vs Y2".into()),
                x2y1: None,
                axis_labels: Some(vec![
                    Some("X".into()),
                    Some("Y1".into()),
                    Some("Y2".into()),
                ]),
                plot_title: Some("XYY plot".into()),
            }
        } else {
            let [x1y1, x1y2] = self.data_labels.clone();
            DualAxesLabelInput {
                x1y1,
                x1y2,
                x2y1: None,
                axis_labels: Some(vec![
                    self.x_label.clone(),
                    self.y1_label.clone(),
                    self.y2_label.clone(),
                ]),
                plot_title: self.plot_title.clone(),
            }
        };
        DualAxesOptions {
            labels,
            use_twin_x: self.use_twin_x,
            auto_label: self.auto_label,
            draw: self.draw.clone(),
        }
    }
}

/// Plots two y series against one x on a new figure.
pub fn plot_xyy(
    x: &[f64],
    y1: &[f64],
    y2: &[f64],
    options: &XyyOptions,
) -> Result<(Figure, DualAxes)> {
    let mut figure = options.draw.new_figure();
    let axes = plot_xyy_on(&mut figure, AxesId(0), x, y1, y2, options)?;
    Ok((figure, axes))
}

/// Like [`plot_xyy`], drawing onto `axes` of an existing figure.
pub fn plot_xyy_on(
    figure: &mut Figure,
    axes: AxesId,
    x: &[f64],
    y1: &[f64],
    y2: &[f64],
    options: &XyyOptions,
) -> Result<DualAxes> {
    plot_with_dual_axes_on(
        figure,
        axes,
        DualAxesData::new(x, y1).with_y2(y2),
        &options.to_dual(),
    )
}

/// Options for [`plot_two_column_file`].
#[derive(Clone, Debug, PartialEq)]
pub struct FileOptions {
    /// Field delimiter.
    pub delimiter: char,
    /// Skip the first line.
    pub skip_header: bool,
    /// Labels, styling and figure options, as for [`plot_xy`].
    pub xy: XyOptions,
}

impl Default for FileOptions {
    fn default() -> Self {
        Self {
            delimiter: ',',
            skip_header: false,
            xy: XyOptions::default(),
        }
    }
}

impl FileOptions {
    /// Sets the delimiter.
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Skips the first line.
    pub fn with_skip_header(mut self, skip_header: bool) -> Self {
        self.skip_header = skip_header;
        self
    }

    /// Sets the plot options.
    pub fn with_xy(mut self, xy: XyOptions) -> Self {
        self.xy = xy;
        self
    }
}

/// Reads a two-column file and plots it like [`plot_xy`] on a new figure.
pub fn plot_two_column_file(
    path: impl AsRef<Path>,
    options: &FileOptions,
) -> Result<(Figure, DualAxes)> {
    let mut figure = options.xy.draw.new_figure();
    let axes = plot_two_column_file_on(&mut figure, AxesId(0), path, options)?;
    Ok((figure, axes))
}

/// Like [`plot_two_column_file`], drawing onto `axes` of an existing figure.
pub fn plot_two_column_file_on(
    figure: &mut Figure,
    axes: AxesId,
    path: impl AsRef<Path>,
    options: &FileOptions,
) -> Result<DualAxes> {
    let (x, y) = read_two_column_file(path, options.delimiter, options.skip_header)?;
    plot_xy_on(figure, axes, &x, &y, &options.xy)
}

/// Options for [`n_plotter`] and [`two_subplots`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GridOptions {
    /// One x axis label per subplot.
    pub x_labels: Option<Vec<String>>,
    /// One y axis label per subplot.
    pub y_labels: Option<Vec<String>>,
    /// One legend label per subplot.
    pub data_labels: Option<Vec<String>>,
    /// One title per subplot.
    pub subplot_titles: Option<Vec<String>>,
    /// Figure title.
    pub plot_title: Option<String>,
    /// Replace all labels with generated ones.
    pub auto_label: bool,
    /// Styling and figure options.
    pub draw: DrawOptions,
}

impl GridOptions {
    /// Sets the axis labels.
    pub fn with_axis_labels(mut self, x: Vec<String>, y: Vec<String>) -> Self {
        self.x_labels = Some(x);
        self.y_labels = Some(y);
        self
    }

    /// Sets the series labels.
    pub fn with_data_labels(mut self, labels: Vec<String>) -> Self {
        self.data_labels = Some(labels);
        self
    }

    /// Sets the subplot titles.
    pub fn with_subplot_titles(mut self, titles: Vec<String>) -> Self {
        self.subplot_titles = Some(titles);
        self
    }

    /// Sets the figure title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.plot_title = Some(title.into());
        self
    }

    /// Enables automatic labels.
    pub fn with_auto_label(mut self, auto_label: bool) -> Self {
        self.auto_label = auto_label;
        self
    }

    /// Sets the styling and figure options.
    pub fn with_draw(mut self, draw: DrawOptions) -> Self {
        self.draw = draw;
        self
    }
}

/// Labels for every cell of a grid.
struct GridLabels {
    x: Vec<String>,
    y: Vec<String>,
    data: Vec<String>,
    titles: Vec<String>,
    suptitle: Option<String>,
}

impl GridLabels {
    fn new(options: &GridOptions, cells: usize) -> Result<Self, DataMismatchError> {
        if options.auto_label {
            return Ok(Self {
                x: (1..=cells).map(|i| format!("X{i}")).collect(),
                y: (1..=cells).map(|i| format!("Y{i}")).collect(),
                data: (1..=cells).map(|i| format!("X{i} vs Y{i}")).collect(),
                titles: (0..cells).map(|i| format!("Subplot {i}")).collect(),
                suptitle: Some(format!("{cells} Plotter")),
            });
        }
        Ok(Self {
            x: series_labels(options.x_labels.clone(), cells, false)?,
            y: series_labels(options.y_labels.clone(), cells, false)?,
            data: series_labels(options.data_labels.clone(), cells, false)?,
            titles: series_labels(options.subplot_titles.clone(), cells, false)?,
            suptitle: options.plot_title.clone(),
        })
    }
}

/// Plots one dataset per cell of an `n_rows` by `n_cols` grid on a new figure.
///
/// Returns the grid axes in row-major order.
pub fn n_plotter<X: AsRef<[f64]>, Y: AsRef<[f64]>>(
    xs: &[X],
    ys: &[Y],
    n_rows: usize,
    n_cols: usize,
    options: &GridOptions,
) -> Result<(Figure, Vec<AxesId>)> {
    let mut figure = Figure::subplots(
        n_rows,
        n_cols,
        &options.draw.subplot_style(),
        options.draw.config.unwrap_or_default(),
    )?;
    let axes = n_plotter_on(&mut figure, xs, ys, options)?;
    Ok((figure, axes))
}

/// Like [`n_plotter`], drawing onto the grid of an existing figure.
///
/// Subplot `i` uses style entry `i` (cycling). With shared x only the bottom row gets x
/// labels; with shared y only the first column gets y labels.
pub fn n_plotter_on<X: AsRef<[f64]>, Y: AsRef<[f64]>>(
    figure: &mut Figure,
    xs: &[X],
    ys: &[Y],
    options: &GridOptions,
) -> Result<Vec<AxesId>> {
    let (rows, cols) = figure.grid();
    let cells = rows * cols;
    for found in [xs.len(), ys.len()] {
        if found != cells {
            return Err(DataMismatchError::GridSize { cells, found }.into());
        }
    }
    let labels = GridLabels::new(options, cells)?;
    for (x, y) in xs.iter().zip(ys) {
        check_lengths("x vs y", x.as_ref(), y.as_ref())?;
    }

    let effective = options.draw.effective()?;
    let config = *figure.config();
    let (share_x, share_y) = (figure.shares_x(), figure.shares_y());
    let grid = figure.grid_axes();
    for (index, &id) in grid.iter().enumerate() {
        let axes = figure.axes_mut(id)?;
        let label = &labels.data[index];
        effective.draw(axes, xs[index].as_ref(), ys[index].as_ref(), label, index, &config)?;
        if !share_x || index >= cells - cols {
            axes.set_x_label(labels.x[index].clone());
        }
        if !share_y || index % cols == 0 {
            axes.set_y_label(labels.y[index].clone());
        }
        if !label.is_empty() {
            axes.add_legend();
        }
        axes.set_title(labels.titles[index].clone());
    }
    figure.set_suptitle(labels.suptitle);
    log::debug!("n_plotter drew {cells} subplot(s) on a {rows}x{cols} grid");
    Ok(grid)
}

/// Plots two datasets side by side (`"h"`) or stacked (`"v"`) on a new figure.
pub fn two_subplots<X: AsRef<[f64]>, Y: AsRef<[f64]>>(
    xs: &[X],
    ys: &[Y],
    orientation: &str,
    options: &GridOptions,
) -> Result<(Figure, Vec<AxesId>)> {
    let (rows, cols) = Orientation::from_str(orientation)?.grid();
    n_plotter(xs, ys, rows, cols, options)
}

/// Options for [`plot_errorbar`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ErrorBarOptions {
    /// X errors.
    pub x_err: Option<ErrorSpec>,
    /// Y errors.
    pub y_err: Option<ErrorSpec>,
    /// Labels, as for [`plot_xy`]. The style must be a line or error bar style.
    pub xy: XyOptions,
}

impl ErrorBarOptions {
    /// Sets symmetric x errors.
    pub fn with_x_err(mut self, err: Vec<f64>) -> Self {
        self.x_err = Some(ErrorSpec::Symmetric(err));
        self
    }

    /// Sets symmetric y errors.
    pub fn with_y_err(mut self, err: Vec<f64>) -> Self {
        self.y_err = Some(ErrorSpec::Symmetric(err));
        self
    }

    /// Sets asymmetric y errors.
    pub fn with_y_err_bounds(mut self, lower: Vec<f64>, upper: Vec<f64>) -> Self {
        self.y_err = Some(ErrorSpec::Asymmetric { lower, upper });
        self
    }

    /// Sets the labels, styling and figure options.
    pub fn with_xy(mut self, xy: XyOptions) -> Self {
        self.xy = xy;
        self
    }
}

/// Plots `y` against `x` with optional error bars on a new figure.
pub fn plot_errorbar(x: &[f64], y: &[f64], options: &ErrorBarOptions) -> Result<(Figure, AxesId)> {
    let mut figure = options.xy.draw.new_figure();
    let axes = plot_errorbar_on(&mut figure, AxesId(0), x, y, options)?;
    Ok((figure, axes))
}

/// Like [`plot_errorbar`], drawing onto `axes` of an existing figure.
pub fn plot_errorbar_on(
    figure: &mut Figure,
    axes: AxesId,
    x: &[f64],
    y: &[f64],
    options: &ErrorBarOptions,
) -> Result<AxesId> {
    let labels = options.xy.to_dual().labels;
    let style = options.xy.draw.effective_error_bar()?;
    let draw = resolve_error_bar(&style, 0, figure.config())?;
    let data_label = labels.x1y1.unwrap_or_default();
    let [x_label, y_label] = labels
        .axis_labels
        .map(|l| {
            let mut it = l.into_iter();
            [it.next().flatten(), it.next().flatten()]
        })
        .unwrap_or_default();

    let target = figure.axes_mut(axes)?;
    target.errorbar(
        x,
        y,
        options.x_err.clone(),
        options.y_err.clone(),
        &data_label,
        draw,
    )?;
    target.set_x_label(x_label.unwrap_or_default());
    target.set_y_label(y_label.unwrap_or_default());
    if let Some(title) = labels.plot_title.filter(|t| !t.is_empty()) {
        target.set_title(title);
    }
    if !data_label.is_empty() {
        target.add_legend();
    }
    Ok(axes)
}
