// Copyright 2025 the plotez Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lowers a [`Figure`] into flat, z-ordered marks in figure pixels.

use kurbo::{BezPath, Point, Rect};
use peniko::Brush;
use peniko::color::palette::css;
use plotez::{
    AxesId, AxesLayout, ErrorBarDraw, Figure, LineDraw, MarkerStyle, PlotConfig, Result,
    ScaleLinear, Series, SeriesDraw, SharedAxis, StrokeStyle,
};

use crate::z_order;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum TextAnchor {
    Start,
    Middle,
    End,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum TextBaseline {
    Middle,
    Alphabetic,
    Hanging,
}

/// Stroke paint in pixels.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct PathStroke {
    pub(crate) brush: Brush,
    pub(crate) width: f64,
    pub(crate) dashes: Vec<f64>,
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct TextMark {
    pub(crate) pos: Point,
    pub(crate) text: String,
    pub(crate) font_size: f64,
    pub(crate) anchor: TextAnchor,
    pub(crate) baseline: TextBaseline,
    /// Rotation in degrees around `pos`.
    pub(crate) angle: f64,
    pub(crate) fill: Brush,
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Mark {
    Rect {
        rect: Rect,
        fill: Brush,
        stroke: Option<PathStroke>,
    },
    Path {
        path: BezPath,
        fill: Option<Brush>,
        stroke: Option<PathStroke>,
    },
    Text(TextMark),
}

/// A lowered figure.
#[derive(Debug)]
pub(crate) struct Lowered {
    pub(crate) view: Rect,
    pub(crate) marks: Vec<(i32, Mark)>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Side {
    Bottom,
    Left,
    Right,
    Top,
}

pub(crate) fn lower_figure(figure: &Figure) -> Result<Lowered> {
    let mut lowering = Lowering::new(figure.config());
    let layout = figure.layout();
    if let (Some(rect), Some(title)) = (layout.suptitle, figure.suptitle()) {
        let size = lowering.title_px;
        lowering.text(
            z_order::TITLES,
            rect.center(),
            title,
            size,
            (TextAnchor::Middle, TextBaseline::Middle),
            0.0,
        );
    }
    for (id, axes_layout) in &layout.axes {
        lowering.axes(figure, *id, axes_layout)?;
    }
    log::debug!("lowered figure into {} marks", lowering.marks.len());
    Ok(Lowered {
        view: layout.view,
        marks: lowering.marks,
    })
}

struct Lowering {
    /// Pixels per point.
    px: f64,
    label_px: f64,
    title_px: f64,
    tick_count: usize,
    marks: Vec<(i32, Mark)>,
}

impl Lowering {
    fn new(config: &PlotConfig) -> Self {
        Self {
            px: config.points_to_px(1.0),
            label_px: config.points_to_px(config.label_font_size),
            title_px: config.points_to_px(config.title_font_size),
            tick_count: config.tick_count,
            marks: Vec::new(),
        }
    }

    fn axes(&mut self, figure: &Figure, id: AxesId, layout: &AxesLayout) -> Result<()> {
        let axes = figure.axes(id)?;
        let plot = layout.plot;
        let x_scale = figure.x_scale(id, (plot.x0, plot.x1))?;
        let y_scale = figure.y_scale(id, (plot.y1, plot.y0))?;

        let (x_side, y_side) = match axes.twin_of() {
            None => (Some(Side::Bottom), Some(Side::Left)),
            Some((_, SharedAxis::X)) => (None, Some(Side::Right)),
            Some((_, SharedAxis::Y)) => (Some(Side::Top), None),
        };

        if axes.twin_of().is_none() {
            self.marks.push((
                z_order::PLOT_BACKGROUND,
                Mark::Rect {
                    rect: plot,
                    fill: css::WHITE.into(),
                    stroke: None,
                },
            ));
            if let (Some(band), false) = (layout.title_top, axes.title.is_empty()) {
                self.text(
                    z_order::TITLES,
                    band.center(),
                    &axes.title,
                    self.title_px,
                    (TextAnchor::Middle, TextBaseline::Middle),
                    0.0,
                );
            }
        }

        if let (Some(side), Some(scale)) = (x_side, &x_scale) {
            let band = match side {
                Side::Top => layout.axis_top,
                _ => layout.axis_bottom,
            };
            self.axis(side, scale, plot, band, &axes.x_label);
        }
        if let (Some(side), Some(scale)) = (y_side, &y_scale) {
            let band = match side {
                Side::Right => layout.axis_right,
                _ => layout.axis_left,
            };
            self.axis(side, scale, plot, band, &axes.y_label);
        }

        if let (Some(x), Some(y)) = (&x_scale, &y_scale) {
            for series in &axes.series {
                self.series(series, x, y);
            }
        }

        let legend = axes.legend.as_ref().filter(|l| !l.entries.is_empty());
        if let (Some(legend), Some(rect)) = (legend, layout.legend) {
            self.legend_frame(rect);
            let row = 1.5 * self.label_px;
            for (k, entry) in legend.entries.iter().enumerate() {
                let cy = rect.y0 + 0.25 * self.label_px + row * (k as f64 + 0.5);
                let series = figure.axes(entry.axes)?.series.get(entry.series);
                if let Some(series) = series {
                    self.swatch(series, rect.x0 + 0.4 * self.label_px, cy);
                }
                self.text(
                    z_order::LEGEND_LABELS,
                    Point::new(rect.x0 + 2.3 * self.label_px, cy),
                    &entry.label,
                    self.label_px,
                    (TextAnchor::Start, TextBaseline::Middle),
                    0.0,
                );
            }
        }
        Ok(())
    }

    fn axis(
        &mut self,
        side: Side,
        scale: &ScaleLinear,
        plot: Rect,
        band: Option<Rect>,
        label: &str,
    ) {
        let tick_len = 3.5 * self.px;
        let gap = 2.0 * self.px;
        let ticks = scale.ticks(self.tick_count);
        let step = match ticks.as_slice() {
            [a, b, ..] => b - a,
            _ => 1.0,
        };

        let mut path = BezPath::new();
        let (start, end) = match side {
            Side::Bottom => ((plot.x0, plot.y1), (plot.x1, plot.y1)),
            Side::Top => ((plot.x0, plot.y0), (plot.x1, plot.y0)),
            Side::Left => ((plot.x0, plot.y0), (plot.x0, plot.y1)),
            Side::Right => ((plot.x1, plot.y0), (plot.x1, plot.y1)),
        };
        path.move_to(start);
        path.line_to(end);

        for tick in ticks {
            let p = scale.map(tick);
            let (from, to, at, align) = match side {
                Side::Bottom => (
                    Point::new(p, plot.y1),
                    Point::new(p, plot.y1 + tick_len),
                    Point::new(p, plot.y1 + tick_len + gap),
                    (TextAnchor::Middle, TextBaseline::Hanging),
                ),
                Side::Top => (
                    Point::new(p, plot.y0),
                    Point::new(p, plot.y0 - tick_len),
                    Point::new(p, plot.y0 - tick_len - gap),
                    (TextAnchor::Middle, TextBaseline::Alphabetic),
                ),
                Side::Left => (
                    Point::new(plot.x0, p),
                    Point::new(plot.x0 - tick_len, p),
                    Point::new(plot.x0 - tick_len - gap, p),
                    (TextAnchor::End, TextBaseline::Middle),
                ),
                Side::Right => (
                    Point::new(plot.x1, p),
                    Point::new(plot.x1 + tick_len, p),
                    Point::new(plot.x1 + tick_len + gap, p),
                    (TextAnchor::Start, TextBaseline::Middle),
                ),
            };
            path.move_to(from);
            path.line_to(to);
            self.text(
                z_order::AXIS_LABELS,
                at,
                &format_tick(tick, step),
                self.label_px,
                align,
                0.0,
            );
        }
        self.stroke(z_order::AXIS_RULES, path, &StrokeStyle::solid(css::BLACK, 0.8));

        let Some(band) = band.filter(|_| !label.is_empty()) else {
            return;
        };
        let center = band.center();
        let (at, align, angle) = match side {
            Side::Bottom => (
                Point::new(center.x, band.y1),
                (TextAnchor::Middle, TextBaseline::Alphabetic),
                0.0,
            ),
            Side::Top => (
                Point::new(center.x, band.y0),
                (TextAnchor::Middle, TextBaseline::Hanging),
                0.0,
            ),
            Side::Left => (
                Point::new(band.x0, center.y),
                (TextAnchor::Middle, TextBaseline::Hanging),
                -90.0,
            ),
            Side::Right => (
                Point::new(band.x1, center.y),
                (TextAnchor::Middle, TextBaseline::Alphabetic),
                -90.0,
            ),
        };
        self.text(z_order::AXIS_TITLES, at, label, self.label_px, align, angle);
    }

    fn series(&mut self, series: &Series, x: &ScaleLinear, y: &ScaleLinear) {
        let points: Vec<Option<Point>> = series
            .x
            .iter()
            .zip(&series.y)
            .map(|(&vx, &vy)| {
                (vx.is_finite() && vy.is_finite()).then(|| Point::new(x.map(vx), y.map(vy)))
            })
            .collect();
        match &series.draw {
            SeriesDraw::Line(line) => self.line(&points, line),
            SeriesDraw::Scatter(draw) => self.markers(&points, &draw.marker),
            SeriesDraw::ErrorBar(draw) => {
                self.error_bars(series, draw, x, y);
                self.line(&points, &draw.line);
            }
        }
    }

    fn line(&mut self, points: &[Option<Point>], line: &LineDraw) {
        self.stroke(z_order::SERIES_STROKE, polyline(points), &line.stroke);
        if let Some(marker) = &line.marker {
            self.markers(points, marker);
        }
    }

    fn markers(&mut self, points: &[Option<Point>], marker: &MarkerStyle) {
        let size = marker.size * self.px;
        let mut path = BezPath::new();
        for p in points.iter().flatten() {
            path.extend(marker.marker.path(p.x, p.y, size).elements().iter().copied());
        }
        if path.elements().is_empty() {
            return;
        }
        let fill = (!marker.marker.is_stroke_only()).then(|| marker.fill.clone());
        let stroke = (!marker.stroke.is_hidden()).then(|| self.path_stroke(&marker.stroke));
        self.marks.push((z_order::SERIES_POINTS, Mark::Path { path, fill, stroke }));
    }

    fn error_bars(
        &mut self,
        series: &Series,
        draw: &ErrorBarDraw,
        x: &ScaleLinear,
        y: &ScaleLinear,
    ) {
        let half_cap = 0.5 * draw.cap_size * self.px;
        let mut bars = BezPath::new();
        let mut caps = BezPath::new();
        for (i, (&vx, &vy)) in series.x.iter().zip(&series.y).enumerate() {
            if !(vx.is_finite() && vy.is_finite()) {
                continue;
            }
            let (px, py) = (x.map(vx), y.map(vy));
            if let Some((lo, hi)) = series.y_err.as_ref().and_then(|e| e.interval(i, vy)) {
                let (y0, y1) = (y.map(lo), y.map(hi));
                bars.move_to((px, y0));
                bars.line_to((px, y1));
                if half_cap > 0.0 {
                    for end in [y0, y1] {
                        caps.move_to((px - half_cap, end));
                        caps.line_to((px + half_cap, end));
                    }
                }
            }
            if let Some((lo, hi)) = series.x_err.as_ref().and_then(|e| e.interval(i, vx)) {
                let (x0, x1) = (x.map(lo), x.map(hi));
                bars.move_to((x0, py));
                bars.line_to((x1, py));
                if half_cap > 0.0 {
                    for end in [x0, x1] {
                        caps.move_to((end, py - half_cap));
                        caps.line_to((end, py + half_cap));
                    }
                }
            }
        }
        self.stroke(z_order::SERIES_ERRORS, bars, &draw.bar);
        self.stroke(z_order::SERIES_ERRORS, caps, &draw.cap);
    }

    fn legend_frame(&mut self, rect: Rect) {
        let edge = StrokeStyle::solid(css::LIGHT_GRAY, 0.8);
        self.marks.push((
            z_order::LEGEND_SWATCHES,
            Mark::Rect {
                rect,
                fill: css::WHITE.with_alpha(0.8).into(),
                stroke: Some(self.path_stroke(&edge)),
            },
        ));
    }

    fn swatch(&mut self, series: &Series, x0: f64, cy: f64) {
        let x1 = x0 + 1.6 * self.label_px;
        let mid = [Some(Point::new(0.5 * (x0 + x1), cy))];
        let line = match &series.draw {
            SeriesDraw::Line(line) => line,
            SeriesDraw::ErrorBar(draw) => &draw.line,
            SeriesDraw::Scatter(draw) => {
                self.markers(&mid, &draw.marker);
                return;
            }
        };
        let mut path = BezPath::new();
        path.move_to((x0, cy));
        path.line_to((x1, cy));
        self.stroke(z_order::LEGEND_SWATCHES, path, &line.stroke);
        if let Some(marker) = &line.marker {
            self.markers(&mid, marker);
        }
    }

    fn path_stroke(&self, style: &StrokeStyle) -> PathStroke {
        let stroke = style.to_stroke(self.px);
        PathStroke {
            brush: style.brush.clone(),
            width: stroke.width,
            dashes: stroke.dash_pattern.to_vec(),
        }
    }

    fn stroke(&mut self, z: i32, path: BezPath, style: &StrokeStyle) {
        if style.is_hidden() || path.elements().is_empty() {
            return;
        }
        let stroke = Some(self.path_stroke(style));
        self.marks.push((
            z,
            Mark::Path {
                path,
                fill: None,
                stroke,
            },
        ));
    }

    fn text(
        &mut self,
        z: i32,
        pos: Point,
        text: &str,
        font_size: f64,
        (anchor, baseline): (TextAnchor, TextBaseline),
        angle: f64,
    ) {
        self.marks.push((
            z,
            Mark::Text(TextMark {
                pos,
                text: text.into(),
                font_size,
                anchor,
                baseline,
                angle,
                fill: css::BLACK.into(),
            }),
        ));
    }
}

/// Connects consecutive points; `None` lifts the pen.
fn polyline(points: &[Option<Point>]) -> BezPath {
    let mut path = BezPath::new();
    let mut pen_down = false;
    for p in points {
        match p {
            Some(p) if pen_down => path.line_to(*p),
            Some(p) => {
                path.move_to(*p);
                pen_down = true;
            }
            None => pen_down = false,
        }
    }
    path
}

/// Formats a tick value with as many decimals as the tick step needs.
fn format_tick(value: f64, step: f64) -> String {
    #[allow(clippy::cast_possible_truncation, reason = "clamped to a small range")]
    let decimals = if step > 0.0 && step.is_finite() {
        (-step.log10().floor()).clamp(0.0, 12.0) as usize
    } else {
        0
    };
    let text = format!("{value:.decimals$}");
    // Avoid "-0.0".
    if text.parse::<f64>().is_ok_and(|v| v == 0.0) {
        format!("{:.decimals$}", 0.0)
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::PathEl;
    use plotez::{XyOptions, plot_xy};

    #[test]
    fn tick_labels_follow_the_step() {
        assert_eq!(format_tick(2.0, 1.0), "2", "integer step");
        assert_eq!(format_tick(0.25, 0.05), "0.25", "two decimals");
        assert_eq!(format_tick(-0.0, 0.5), "0.0", "no negative zero");
        assert_eq!(format_tick(1500.0, 500.0), "1500", "large steps");
    }

    #[test]
    fn non_finite_points_break_the_line() {
        let points = [
            Some(Point::new(0.0, 0.0)),
            Some(Point::new(1.0, 1.0)),
            None,
            Some(Point::new(3.0, 3.0)),
        ];
        let moves = polyline(&points)
            .elements()
            .iter()
            .filter(|el| matches!(el, PathEl::MoveTo(_)))
            .count();
        assert_eq!(moves, 2, "two runs");
    }

    #[test]
    fn labeled_plot_lowers_to_every_layer() {
        let options = XyOptions::default().with_auto_label(true);
        let (figure, _) = plot_xy(&[0.0, 1.0, 2.0], &[1.0, 0.0, 1.0], &options).expect("plot");
        let lowered = lower_figure(&figure).expect("lowering");
        let layers: Vec<i32> = lowered.marks.iter().map(|(z, _)| *z).collect();
        for z in [
            z_order::PLOT_BACKGROUND,
            z_order::SERIES_STROKE,
            z_order::AXIS_RULES,
            z_order::AXIS_TITLES,
            z_order::LEGEND_LABELS,
            z_order::TITLES,
        ] {
            assert!(layers.contains(&z), "missing layer {z}");
        }
    }
}
