// Copyright 2025 the plotez Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scenarios that exercise the helpers end to end: labels, twins, legends and grids.

use plotez_style::{
    ConfigurationError, DataMismatchError, LineStyle, OverrideMapping, ScatterStyle,
    StyleParams, SubplotStyle,
};

use crate::{
    AxesId, DrawOptions, DualAxesOptions, Error, ErrorBarOptions, Figure, FileOptions,
    GridOptions, PlotConfig, SeriesDraw, SeriesKind, SeriesStyle, SharedAxis, XyOptions,
    XyyOptions, n_plotter, n_plotter_on, plot_errorbar, plot_or_scatter, plot_two_column_file,
    plot_with_dual_axes, plot_xy, plot_xy_on, plot_xyy, plot_xyy_on, two_subplots,
};
use plotez_style::{DualAxesData, DualAxesLabelInput};

fn legend_labels(figure: &Figure, id: AxesId) -> Vec<String> {
    figure
        .axes(id)
        .expect("axes")
        .legend
        .as_ref()
        .map(|l| l.entries.iter().map(|e| e.label.clone()).collect())
        .unwrap_or_default()
}

fn line_brush(figure: &Figure, id: AxesId) -> peniko::Brush {
    match &figure.axes(id).expect("axes").series[0].draw {
        SeriesDraw::Line(line) => line.stroke.brush.clone(),
        other => panic!("expected a line series, got {other:?}"),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

#[test]
fn plot_xy_auto_label_fills_every_label() {
    let options = XyOptions::default()
        .with_axis_labels("ignored", "ignored")
        .with_auto_label(true);
    let (figure, axes) = plot_xy(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0], &options).expect("plot");
    assert_eq!(axes.secondary, None, "no twin for a single series");

    let primary = figure.axes(axes.primary).expect("axes");
    assert_eq!(primary.x_label, "X", "x label");
    assert_eq!(primary.y_label, "Y", "y label");
    assert_eq!(primary.title, "Plot", "title");
    assert_eq!(legend_labels(&figure, axes.primary), ["X vs Y"], "legend");
}

#[test]
fn plot_xy_without_labels_draws_no_legend() {
    let (figure, axes) = plot_xy(&[1.0, 2.0], &[3.0, 4.0], &XyOptions::default()).expect("plot");
    let primary = figure.axes(axes.primary).expect("axes");
    assert!(primary.x_label.is_empty() && primary.title.is_empty(), "labels stay empty");
    assert!(primary.legend.is_none(), "no legend without series labels");
    assert_eq!(primary.series.len(), 1, "one series");
}

#[test]
fn plot_xyy_puts_the_second_series_on_a_twin() {
    let options = XyyOptions::default()
        .with_axis_labels("time", "speed", "load")
        .with_data_labels("speed", "load");
    let (figure, axes) =
        plot_xyy(&[0.0, 1.0, 2.0], &[1.0, 2.0, 3.0], &[10.0, 20.0, 30.0], &options)
            .expect("plot");
    let twin = axes.secondary.expect("twin axes");
    assert_eq!(
        figure.axes(twin).expect("twin").twin_of(),
        Some((axes.primary, SharedAxis::X)),
        "twin shares x"
    );
    assert_eq!(figure.axes(twin).expect("twin").y_label, "load", "secondary y label");
    assert_eq!(legend_labels(&figure, axes.primary), ["speed", "load"], "combined legend");
    assert_ne!(
        line_brush(&figure, axes.primary),
        line_brush(&figure, twin),
        "the two series use different cycle colors"
    );
    assert_eq!(
        figure.domain(axes.primary, SharedAxis::Y).ok().flatten(),
        Some((1.0, 3.0)),
        "primary y domain excludes the twin"
    );
}

#[test]
fn plot_xyy_auto_label_uses_dual_y_defaults() {
    let options = XyyOptions::default().with_auto_label(true);
    let (figure, axes) = plot_xyy(&[0.0, 1.0], &[1.0, 2.0], &[3.0, 4.0], &options).expect("plot");
    let primary = figure.axes(axes.primary).expect("axes");
    assert_eq!(primary.title, "XYY plot", "title");
    assert_eq!((primary.x_label.as_str(), primary.y_label.as_str()), ("X", "Y1"), "labels");
    assert_eq!(legend_labels(&figure, axes.primary), ["X vs Y1", "X vs Y2"], "legend");
}

#[test]
fn plot_xyy_without_twin_rejects_the_second_y_series() {
    let options = XyyOptions::default()
        .with_twin_x(false)
        .with_data_labels("a", "b");
    let err = plot_xyy(&[0.0, 1.0], &[1.0, 2.0], &[3.0, 4.0], &options).expect_err("dual x");
    assert_eq!(
        err.as_data_mismatch(),
        Some(&DataMismatchError::UnexpectedSecondaryY),
        "a dual-x plot takes no y2: {err}"
    );

    let mut figure = Figure::new(&SubplotStyle::default(), PlotConfig::default());
    let err = plot_xyy_on(&mut figure, AxesId(0), &[0.0], &[1.0], &[2.0], &options)
        .expect_err("dual x on existing axes");
    assert!(
        matches!(err.as_data_mismatch(), Some(DataMismatchError::UnexpectedSecondaryY)),
        "unexpected error: {err}"
    );
    assert!(figure.axes(AxesId(0)).expect("axes").series.is_empty(), "nothing drawn");
}

#[test]
fn plot_xyy_checks_the_second_series_length() {
    let options = XyyOptions::default().with_data_labels("a", "b");
    let err = plot_xyy(&[0.0, 1.0], &[1.0, 2.0], &[3.0], &options).expect_err("short y2");
    assert!(
        matches!(
            err.as_data_mismatch(),
            Some(DataMismatchError::LengthMismatch { left: 2, right: 1, .. })
        ),
        "unexpected error: {err}"
    );
}

#[test]
fn dual_x_axis_twins_share_y() {
    let options = DualAxesOptions {
        auto_label: true,
        ..DualAxesOptions::default()
    };
    let data = DualAxesData::new(&[1.0, 2.0], &[5.0, 6.0]).with_x2(&[100.0, 200.0]);
    let (figure, axes) = plot_with_dual_axes(data, &options).expect("plot");
    let twin = axes.secondary.expect("twin");
    let twin_axes = figure.axes(twin).expect("twin");
    assert_eq!(twin_axes.twin_of(), Some((axes.primary, SharedAxis::Y)), "shares y");
    assert_eq!(twin_axes.x_label, "X2", "secondary x label");
    assert_eq!(legend_labels(&figure, axes.primary), ["Y vs X1", "Y vs X2"], "legend");
    assert_eq!(
        figure.domain(twin, SharedAxis::Y).ok().flatten(),
        Some((5.0, 6.0)),
        "shared y domain"
    );
}

#[test]
fn dual_y_axis_always_creates_a_twin() {
    let options = DualAxesOptions {
        use_twin_x: true,
        ..DualAxesOptions::default()
    };
    let (figure, axes) =
        plot_with_dual_axes(DualAxesData::new(&[1.0], &[2.0]), &options).expect("plot");
    let twin = axes.secondary.expect("twin even without y2");
    assert!(figure.axes(twin).expect("twin").series.is_empty(), "empty twin");
}

#[test]
fn dual_axes_inputs_are_validated() {
    let dual_x = DualAxesOptions::default();
    let with_y2 = DualAxesData::new(&[1.0], &[2.0]).with_y2(&[3.0]);
    let err = plot_with_dual_axes(with_y2, &dual_x).expect_err("y2 on a dual x plot");
    assert_eq!(
        err.as_data_mismatch(),
        Some(&DataMismatchError::UnexpectedSecondaryY),
        "secondary y rejected"
    );

    let two_labels = DualAxesOptions {
        labels: DualAxesLabelInput {
            axis_labels: Some(vec![Some("x".into()), Some("y".into())]),
            ..DualAxesLabelInput::default()
        },
        ..DualAxesOptions::default()
    };
    let err = plot_with_dual_axes(DualAxesData::new(&[1.0], &[2.0]), &two_labels)
        .expect_err("two axis labels");
    assert_eq!(
        err.as_data_mismatch(),
        Some(&DataMismatchError::AxisLabelCount { found: 2 }),
        "axis label count"
    );

    let err = plot_with_dual_axes(DualAxesData::new(&[], &[]), &dual_x).expect_err("empty");
    assert_eq!(err.as_data_mismatch(), Some(&DataMismatchError::EmptyPrimary), "empty data");
}

#[test]
fn two_subplots_orientation() {
    let xs = [vec![1.0, 2.0], vec![3.0, 4.0]];
    let ys = [vec![1.0, 4.0], vec![9.0, 16.0]];
    let (h, _) = two_subplots(&xs, &ys, "h", &GridOptions::default()).expect("horizontal");
    assert_eq!(h.grid(), (1, 2), "side by side");
    let (v, _) = two_subplots(&xs, &ys, "v", &GridOptions::default()).expect("vertical");
    assert_eq!(v.grid(), (2, 1), "stacked");

    let err = two_subplots(&xs, &ys, "x", &GridOptions::default()).expect_err("bad orientation");
    let orientation = err.as_orientation().expect("orientation error");
    assert_eq!(orientation.found, "x", "offending value");
}

#[test]
fn n_plotter_shared_axes_label_only_the_outer_edge() {
    let xs: Vec<Vec<f64>> = (0..4).map(|i| vec![f64::from(i), f64::from(i) + 1.0]).collect();
    let ys = xs.clone();
    let options = GridOptions::default().with_auto_label(true).with_draw(
        DrawOptions::default()
            .with_subplot(SubplotStyle::default().with_share_x(true).with_share_y(true)),
    );
    let (figure, ids) = n_plotter(&xs, &ys, 2, 2, &options).expect("grid");
    assert_eq!(ids, (0..4).map(AxesId).collect::<Vec<_>>(), "row-major axes");
    assert_eq!(figure.suptitle(), Some("4 Plotter"), "figure title");

    let axes: Vec<_> = ids.iter().map(|&id| figure.axes(id).expect("axes")).collect();
    let x_labels: Vec<_> = axes.iter().map(|a| a.x_label.as_str()).collect();
    let y_labels: Vec<_> = axes.iter().map(|a| a.y_label.as_str()).collect();
    assert_eq!(x_labels, ["", "", "X3", "X4"], "bottom row only");
    assert_eq!(y_labels, ["Y1", "", "Y3", ""], "first column only");
    assert_eq!(axes[3].title, "Subplot 3", "subplot titles");
    assert_eq!(legend_labels(&figure, ids[1]), ["X2 vs Y2"], "per-subplot legend");
    assert_eq!(
        figure.domain(ids[0], SharedAxis::X).ok().flatten(),
        Some((0.0, 4.0)),
        "shared x spans the grid"
    );
}

#[test]
fn n_plotter_cycles_list_styles() {
    let xs = [[0.0, 1.0]; 3];
    let ys = [[1.0, 0.0]; 3];
    let style = LineStyle::default().with_color(vec!["r", "g"]);
    let options = GridOptions::default().with_draw(DrawOptions::default().with_style(style));
    let (figure, ids) = n_plotter(&xs, &ys, 1, 3, &options).expect("grid");
    let brushes: Vec<_> = ids.iter().map(|&id| line_brush(&figure, id)).collect();
    assert_eq!(brushes[0], brushes[2], "third subplot wraps around");
    assert_ne!(brushes[0], brushes[1], "second subplot uses the second color");
    assert!(figure.axes(ids[0]).expect("axes").legend.is_none(), "no labels, no legend");
}

#[test]
fn n_plotter_requires_one_dataset_per_cell() {
    let xs = [[0.0]; 3];
    let err = n_plotter(&xs, &xs, 2, 2, &GridOptions::default()).expect_err("three for four");
    assert_eq!(
        err.as_data_mismatch(),
        Some(&DataMismatchError::GridSize { cells: 4, found: 3 }),
        "grid size"
    );

    let xs = [[0.0]; 4];
    let options =
        GridOptions::default().with_axis_labels(strings(&["a", "b", "c"]), strings(&["1"; 4]));
    let err = n_plotter(&xs, &xs, 2, 2, &options).expect_err("three labels for four");
    assert_eq!(
        err.as_data_mismatch(),
        Some(&DataMismatchError::LabelCount { labels: 3, datasets: 4 }),
        "label count"
    );

    let err = n_plotter(&xs, &xs, 0, 2, &GridOptions::default()).expect_err("empty grid");
    assert!(err.as_configuration().is_some(), "unexpected error: {err}");
}

#[test]
fn helpers_draw_onto_existing_figures() {
    let mut figure =
        Figure::subplots(1, 2, &SubplotStyle::default(), PlotConfig::default()).expect("grid");
    let xs = [[0.0, 1.0]; 2];
    n_plotter_on(&mut figure, &xs, &xs, &GridOptions::default()).expect("grid plot");
    plot_xy_on(&mut figure, AxesId(1), &[2.0, 3.0], &[2.0, 3.0], &XyOptions::default())
        .expect("second series");
    assert_eq!(figure.axes(AxesId(1)).expect("axes").series.len(), 2, "appended");

    let err = plot_xy_on(&mut figure, AxesId(9), &[1.0], &[1.0], &XyOptions::default())
        .expect_err("unknown axes");
    assert!(matches!(err, Error::UnknownAxes(AxesId(9))), "unexpected error: {err}");
}

#[test]
fn style_must_match_the_primitive() {
    let line = SeriesStyle::from(LineStyle::default());
    let scatter = SeriesStyle::from(ScatterStyle::default());
    assert_eq!(plot_or_scatter(false, Some(&line)), Ok(SeriesKind::Line), "line");
    assert_eq!(plot_or_scatter(true, None), Ok(SeriesKind::Scatter), "default scatter");
    assert_eq!(
        plot_or_scatter(true, Some(&line)),
        Err(ConfigurationError::StyleMismatch {
            found: LineStyle::KIND,
            primitive: "scatter"
        }),
        "line style for a scatter plot"
    );

    let options = XyOptions::default()
        .with_draw(DrawOptions::default().with_scatter(false).with_style(ScatterStyle::default()));
    let err = plot_xy(&[1.0], &[1.0], &options).expect_err("scatter style for a line plot");
    assert!(
        matches!(
            err.as_configuration(),
            Some(ConfigurationError::StyleMismatch { primitive: "line", .. })
        ),
        "unexpected error: {err}"
    );

    let err = plot_errorbar(
        &[1.0],
        &[1.0],
        &ErrorBarOptions::default().with_xy(XyOptions::default().with_draw(
            DrawOptions::default().with_style(scatter),
        )),
    )
    .expect_err("scatter style for error bars");
    assert!(
        matches!(
            err.as_configuration(),
            Some(ConfigurationError::StyleMismatch { primitive: "error bar", .. })
        ),
        "unexpected error: {err}"
    );
}

#[test]
fn scatter_plots_resolve_scatter_styles() {
    let overrides = OverrideMapping::new().with("s", 64.0).with("marker", "^");
    let options = XyOptions::default().with_draw(
        DrawOptions::default()
            .with_scatter(true)
            .with_overrides(overrides),
    );
    let (figure, axes) = plot_xy(&[1.0, 2.0], &[1.0, 2.0], &options).expect("scatter");
    let series = &figure.axes(axes.primary).expect("axes").series[0];
    assert_eq!(series.kind(), SeriesKind::Scatter, "scatter series");
    match &series.draw {
        SeriesDraw::Scatter(draw) => {
            assert!((draw.marker.size - 8.0).abs() < 1e-9, "size is sqrt(area)");
            assert_eq!(draw.marker.marker, crate::Marker::TriangleUp, "marker override");
        }
        other => panic!("expected scatter, got {other:?}"),
    }
}

#[test]
fn unknown_override_keys_abort_the_plot() {
    let overrides = OverrideMapping::new().with("linewidth", 2.0);
    let options = XyOptions::default().with_draw(DrawOptions::default().with_overrides(overrides));
    let err = plot_xy(&[1.0], &[1.0], &options).expect_err("unknown key");
    assert!(
        matches!(
            err.as_configuration(),
            Some(ConfigurationError::UnknownAttribute { keys, .. }) if keys == &["linewidth"]
        ),
        "unexpected error: {err}"
    );
}

#[test]
fn error_bars_are_checked_and_labeled() {
    let options = ErrorBarOptions::default()
        .with_y_err(vec![0.5])
        .with_xy(XyOptions::default().with_auto_label(true));
    let err = plot_errorbar(&[1.0, 2.0], &[3.0, 4.0], &options).expect_err("short errors");
    assert_eq!(
        err.as_data_mismatch(),
        Some(&DataMismatchError::LengthMismatch {
            what: "y errors",
            left: 2,
            right: 1
        }),
        "error length"
    );

    let options = ErrorBarOptions::default()
        .with_y_err_bounds(vec![0.5, 0.5], vec![1.0, 1.0])
        .with_xy(XyOptions::default().with_data_label("measured"));
    let (figure, axes) = plot_errorbar(&[1.0, 2.0], &[3.0, 4.0], &options).expect("plot");
    assert_eq!(legend_labels(&figure, axes), ["measured"], "legend");
    assert_eq!(
        figure.domain(axes, SharedAxis::Y).ok().flatten(),
        Some((2.5, 5.0)),
        "errors widen the y domain"
    );
}

#[test]
fn two_column_files_plot_like_xy() {
    let path = std::env::temp_dir().join(format!("plotez-plot-tests-{}.csv", std::process::id()));
    std::fs::write(&path, "t;v\n0;1\n1;4\n2;9\n").expect("write data file");
    let options = FileOptions::default()
        .with_delimiter(';')
        .with_skip_header(true)
        .with_xy(XyOptions::default().with_auto_label(true));
    let result = plot_two_column_file(&path, &options);
    let _ = std::fs::remove_file(&path);

    let (figure, axes) = result.expect("plot");
    let series = &figure.axes(axes.primary).expect("axes").series[0];
    assert_eq!(series.y, [1.0, 4.0, 9.0], "y column");
    assert_eq!(figure.axes(axes.primary).expect("axes").title, "Plot", "plot_xy labels");
}
