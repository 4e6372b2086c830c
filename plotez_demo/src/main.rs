// Copyright 2025 the plotez Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Runs every `plotez` helper and writes one SVG per figure.
//!
//! Usage: `plotez_demo [OUT_DIR]` (default `plotez_demo_out`). Set `PLOTEZ_CONFIG` to a JSON
//! file to override the figure defaults.

mod scene;
mod svg;
mod z_order;

use std::f64::consts::PI;
use std::path::{Path, PathBuf};

use plotez::plotez_style::{
    DualAxesData, DualAxesLabelInput, ErrorBarStyle, LineStyle, OverrideMapping, ScatterStyle,
    SubplotStyle,
};
use plotez::{
    DrawOptions, DualAxesOptions, ErrorBarOptions, Figure, FileOptions, GridOptions, PlotConfig,
    Result, XyOptions, XyyOptions, n_plotter, plot_errorbar, plot_two_column_file,
    plot_with_dual_axes, plot_xy, plot_xyy, two_subplots,
};

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .format_module_path(false)
        .init();

    let out_dir = std::env::args_os()
        .nth(1)
        .map_or_else(|| PathBuf::from("plotez_demo_out"), PathBuf::from);
    std::fs::create_dir_all(&out_dir)?;
    let config = match std::env::var_os("PLOTEZ_CONFIG") {
        Some(path) => PlotConfig::load(path)?,
        None => PlotConfig::default(),
    };
    let draw = DrawOptions::default().with_config(config);

    let data_file = out_dir.join("decay.csv");
    std::fs::write(&data_file, decay_csv())?;

    let figures = [
        ("xy", xy_demo(&draw)?),
        ("xyy", xyy_demo(&draw)?),
        ("dual_x", dual_x_demo(&draw)?),
        ("grid", grid_demo(&draw)?),
        ("two_subplots", two_subplots_demo(&draw)?),
        ("errorbar", errorbar_demo(&draw)?),
        ("file", file_demo(&draw, &data_file)?),
    ];
    for (name, figure) in &figures {
        write_svg(&out_dir, name, figure)?;
    }
    log::info!("wrote {} figures to {}", figures.len(), out_dir.display());
    Ok(())
}

fn write_svg(dir: &Path, name: &str, figure: &Figure) -> Result<()> {
    let lowered = scene::lower_figure(figure)?;
    let svg = svg::SvgScene::from_lowered(lowered).to_svg_string();
    let path = dir.join(format!("{name}.svg"));
    std::fs::write(&path, svg)?;
    log::info!("wrote {}", path.display());
    Ok(())
}

fn samples(n: i32, step: f64) -> Vec<f64> {
    (0..n).map(|i| f64::from(i) * step).collect()
}

fn xy_demo(draw: &DrawOptions) -> Result<Figure> {
    let t = samples(60, 0.1);
    let y: Vec<f64> = t.iter().map(|t| (2.0 * PI * 0.4 * t).sin()).collect();
    let style = LineStyle::default()
        .with_line_style("--")
        .with_marker("o")
        .with_marker_size(3.0);
    let options = XyOptions::default()
        .with_axis_labels("time [s]", "amplitude")
        .with_title("Sine wave")
        .with_data_label("sin(0.8 pi t)")
        .with_draw(draw.clone().with_style(style));
    Ok(plot_xy(&t, &y, &options)?.0)
}

fn xyy_demo(draw: &DrawOptions) -> Result<Figure> {
    let hours = samples(24, 1.0);
    let temperature: Vec<f64> = hours
        .iter()
        .map(|h| 12.0 + 6.0 * (2.0 * PI * (h - 9.0) / 24.0).sin())
        .collect();
    let humidity: Vec<f64> = temperature.iter().map(|t| 95.0 - 2.5 * t).collect();
    let overrides = OverrideMapping::new()
        .with("color", vec!["C3", "C0"])
        .with("lw", vec![2.0, 1.0]);
    let options = XyyOptions::default()
        .with_axis_labels("hour", "temperature [C]", "humidity [%]")
        .with_data_labels("temperature", "humidity")
        .with_draw(draw.clone().with_overrides(overrides));
    Ok(plot_xyy(&hours, &temperature, &humidity, &options)?.0)
}

fn dual_x_demo(draw: &DrawOptions) -> Result<Figure> {
    let altitude = samples(12, 1.0);
    let celsius: Vec<f64> = altitude.iter().map(|h| 15.0 - 6.5 * h).collect();
    let pressure: Vec<f64> = altitude
        .iter()
        .map(|h| 1013.25 * (1.0 - 2.2558e-2 * h).powf(5.2559))
        .collect();
    let options = DualAxesOptions {
        labels: DualAxesLabelInput {
            plot_title: Some("Standard atmosphere".into()),
            axis_labels: Some(vec![
                Some("temperature [C]".into()),
                Some("altitude [km]".into()),
                Some("pressure [hPa]".into()),
            ]),
            ..DualAxesLabelInput::default()
        },
        use_twin_x: false,
        auto_label: true,
        draw: draw.clone(),
    };
    let data = DualAxesData::new(&celsius, &altitude).with_x2(&pressure);
    Ok(plot_with_dual_axes(data, &options)?.0)
}

fn grid_demo(draw: &DrawOptions) -> Result<Figure> {
    let x = samples(40, 0.25);
    let xs = vec![x.clone(); 4];
    let ys: Vec<Vec<f64>> = (1..=4)
        .map(|k| x.iter().map(|v| (f64::from(k) * v).sin() / f64::from(k)).collect())
        .collect();
    let subplot = SubplotStyle::default()
        .with_share_x(true)
        .with_fig_size(8.0, 6.0);
    let options = GridOptions::default()
        .with_auto_label(true)
        .with_draw(draw.clone().with_subplot(subplot));
    Ok(n_plotter(&xs, &ys, 2, 2, &options)?.0)
}

fn two_subplots_demo(draw: &DrawOptions) -> Result<Figure> {
    let x = samples(30, 1.0);
    let noisy: Vec<f64> = x.iter().map(|v| v + 3.0 * (v * 1.7).sin()).collect();
    let squares: Vec<f64> = x.iter().map(|v| v * v).collect();
    let style = ScatterStyle::default()
        .with_marker(vec!["o", "s"])
        .with_size(20.0);
    let options = GridOptions::default()
        .with_axis_labels(vec!["x".into(), "x".into()], vec!["noisy".into(), "x^2".into()])
        .with_subplot_titles(vec!["Noise".into(), "Growth".into()])
        .with_title("Side by side")
        .with_draw(draw.clone().with_scatter(true).with_style(style));
    Ok(two_subplots(&[x.clone(), x], &[noisy, squares], "h", &options)?.0)
}

fn errorbar_demo(draw: &DrawOptions) -> Result<Figure> {
    let x = samples(8, 1.0);
    let y: Vec<f64> = x.iter().map(|v| 2.0 + 0.5 * v).collect();
    let y_err: Vec<f64> = x.iter().map(|v| 0.2 + 0.05 * v).collect();
    let style = ErrorBarStyle::from_line(LineStyle::default().with_marker("s"))
        .with_capsize(4.0)
        .with_ecolor("k");
    let options = ErrorBarOptions::default()
        .with_y_err(y_err)
        .with_x_err(vec![0.1; 8])
        .with_xy(
            XyOptions::default()
                .with_axis_labels("dose", "response")
                .with_data_label("measured")
                .with_draw(draw.clone().with_style(style)),
        );
    Ok(plot_errorbar(&x, &y, &options)?.0)
}

fn file_demo(draw: &DrawOptions, path: &Path) -> Result<Figure> {
    let options = FileOptions::default().with_skip_header(true).with_xy(
        XyOptions::default()
            .with_auto_label(true)
            .with_draw(draw.clone()),
    );
    Ok(plot_two_column_file(path, &options)?.0)
}

fn decay_csv() -> String {
    let mut out = String::from("time,counts\n");
    for t in samples(20, 0.5) {
        out.push_str(&format!("{t},{:.3}\n", 1000.0 * (-0.3 * t).exp()));
    }
    out
}
