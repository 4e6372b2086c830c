// Copyright 2025 the plotez Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolution of style values into drawable paints, strokes and markers.
//!
//! A style attribute may hold one value per series; resolution picks the value for one
//! series (`index % len`) and falls back to [`PlotConfig`] for unset widths and sizes.

use kurbo::Stroke;
use peniko::color::{Srgb, palette::css};
use peniko::{Brush, Color};
use plotez_style::{
    AttributeKind, ConfigurationError, DEFAULT_COLOR_CYCLE, DataMismatchError, ErrorBarStyle,
    LineStyle, ScatterStyle, StyleError, StyleParams, StyleValue,
};
use smallvec::SmallVec;

use crate::PlotConfig;
use crate::symbol::Marker;

/// A line dash pattern, named by its plotting token.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Dash {
    /// `-` or `solid`.
    #[default]
    Solid,
    /// `--` or `dashed`.
    Dashed,
    /// `:` or `dotted`.
    Dotted,
    /// `-.` or `dashdot`.
    DashDot,
    /// `None` or `""`: no line (markers only).
    None,
}

impl Dash {
    /// Parses a line style token.
    pub fn from_token(token: &str) -> Option<Self> {
        Some(match token {
            "-" | "solid" => Self::Solid,
            "--" | "dashed" => Self::Dashed,
            ":" | "dotted" => Self::Dotted,
            "-." | "dashdot" => Self::DashDot,
            "None" | "" => Self::None,
            _ => return None,
        })
    }

    /// On/off lengths for a line of width `width`; empty for a solid line.
    pub fn pattern(self, width: f64) -> SmallVec<[f64; 4]> {
        let unit: &[f64] = match self {
            Self::Solid | Self::None => &[],
            Self::Dashed => &[3.7, 1.6],
            Self::Dotted => &[1.0, 1.65],
            Self::DashDot => &[6.4, 1.6, 1.0, 1.6],
        };
        let width = width.max(1.0);
        unit.iter().map(|len| len * width).collect()
    }
}

/// A paint, width and dash for stroked paths.
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke paint.
    pub brush: Brush,
    /// Stroke width in points.
    pub stroke_width: f64,
    /// Dash pattern.
    pub dash: Dash,
}

impl StrokeStyle {
    /// Convenience for a solid stroke.
    pub fn solid(brush: impl Into<Brush>, stroke_width: f64) -> Self {
        Self {
            brush: brush.into(),
            stroke_width,
            dash: Dash::Solid,
        }
    }

    /// Sets the dash pattern.
    pub fn with_dash(mut self, dash: Dash) -> Self {
        self.dash = dash;
        self
    }

    /// Returns `true` if nothing would be drawn.
    pub fn is_hidden(&self) -> bool {
        self.dash == Dash::None || self.stroke_width <= 0.0
    }

    /// The equivalent `kurbo` stroke, with widths multiplied by `scale` (points to pixels).
    pub fn to_stroke(&self, scale: f64) -> Stroke {
        let dashes = self.dash.pattern(self.stroke_width);
        Stroke::new(self.stroke_width * scale).with_dashes(0.0, dashes.iter().map(|d| d * scale))
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::solid(css::BLACK, 1.0)
    }
}

/// A resolved marker.
#[derive(Clone, Debug, PartialEq)]
pub struct MarkerStyle {
    /// Shape.
    pub marker: Marker,
    /// Diameter or side in points.
    pub size: f64,
    /// Face paint.
    pub fill: Brush,
    /// Edge stroke.
    pub stroke: StrokeStyle,
}

/// Drawable style of a line series.
#[derive(Clone, Debug, PartialEq)]
pub struct LineDraw {
    /// The connecting line.
    pub stroke: StrokeStyle,
    /// Markers at the data points, if any.
    pub marker: Option<MarkerStyle>,
}

/// Drawable style of a scatter series.
#[derive(Clone, Debug, PartialEq)]
pub struct ScatterDraw {
    /// The marker at each data point.
    pub marker: MarkerStyle,
    /// Marker area in points squared, as given.
    pub area: f64,
    /// Colormap name, recorded as given.
    pub colormap: Option<String>,
}

/// Drawable style of an error bar series.
#[derive(Clone, Debug, PartialEq)]
pub struct ErrorBarDraw {
    /// The data line and markers.
    pub line: LineDraw,
    /// The error bar lines.
    pub bar: StrokeStyle,
    /// Cap length in points; zero draws no caps.
    pub cap_size: f64,
    /// The cap lines.
    pub cap: StrokeStyle,
}

/// Parses a color token.
///
/// Accepts the single-letter shorthands `b g r c m y k w`, the cycle references `C0`..`C9`,
/// CSS color names and hex codes.
pub fn parse_color(key: &'static str, token: &str) -> Result<Color, ConfigurationError> {
    let shorthand = match token {
        "b" => Some(Color::from_rgb8(0, 0, 255)),
        "g" => Some(Color::from_rgb8(0, 128, 0)),
        "r" => Some(Color::from_rgb8(255, 0, 0)),
        "c" => Some(Color::from_rgb8(0, 191, 191)),
        "m" => Some(Color::from_rgb8(191, 0, 191)),
        "y" => Some(Color::from_rgb8(191, 191, 0)),
        "k" => Some(css::BLACK),
        "w" => Some(css::WHITE),
        _ => None,
    };
    if let Some(color) = shorthand {
        return Ok(color);
    }
    let cycled = token
        .strip_prefix('C')
        .and_then(|n| n.parse::<usize>().ok())
        .and_then(|n| DEFAULT_COLOR_CYCLE.get(n));
    let source = cycled.copied().unwrap_or(token);
    peniko::color::parse_color(source)
        .map(|c| c.to_alpha_color::<Srgb>())
        .map_err(|_| ConfigurationError::InvalidToken {
            key,
            token: token.into(),
        })
}

/// Picks the value of one attribute for series `index`.
struct Picker<'a, S> {
    style: &'a S,
    index: usize,
}

impl<'a, S: StyleParams> Picker<'a, S> {
    fn new(style: &'a S, index: usize) -> Self {
        Self { style, index }
    }

    fn value(&self, key: &'static str) -> Result<Option<&'a StyleValue>, StyleError> {
        let Some(value) = self.style.get(key) else {
            return Ok(None);
        };
        match value.series(self.index) {
            Some(v) => Ok(Some(v)),
            None => Err(DataMismatchError::EmptyList { key }.into()),
        }
    }

    /// Set values of the wrong kind are errors, never treated as unset.
    fn text(&self, key: &'static str) -> Result<Option<&'a str>, StyleError> {
        match self.value(key)? {
            Some(value) => match value.as_text() {
                Some(text) => Ok(Some(text)),
                None => Err(self.wrong_kind(key, value, AttributeKind::Text)),
            },
            None => Ok(None),
        }
    }

    fn number(&self, key: &'static str) -> Result<Option<f64>, StyleError> {
        match self.value(key)? {
            Some(value) => match value.as_number() {
                Some(number) => Ok(Some(number)),
                None => Err(self.wrong_kind(key, value, AttributeKind::Number)),
            },
            None => Ok(None),
        }
    }

    fn wrong_kind(
        &self,
        key: &'static str,
        value: &StyleValue,
        kind: AttributeKind,
    ) -> StyleError {
        ConfigurationError::InvalidValue {
            kind: S::KIND,
            key,
            value: value.to_string(),
            expected: kind.expected(),
        }
        .into()
    }

    fn color(&self, key: &'static str) -> Result<Option<Color>, StyleError> {
        match self.text(key)? {
            Some(token) => Ok(Some(parse_color(key, token)?)),
            None => Ok(None),
        }
    }

    fn marker(&self, key: &'static str) -> Result<Option<Marker>, StyleError> {
        match self.text(key)? {
            Some(token) => Marker::from_token(token).map(Some).ok_or_else(|| {
                ConfigurationError::InvalidToken {
                    key,
                    token: token.into(),
                }
                .into()
            }),
            None => Ok(None),
        }
    }

    fn alpha(&self) -> Result<Option<f32>, StyleError> {
        let Some(alpha) = self.number("alpha")? else {
            return Ok(None);
        };
        if !(0.0..=1.0).contains(&alpha) {
            return Err(ConfigurationError::InvalidValue {
                kind: S::KIND,
                key: "alpha",
                value: alpha.to_string(),
                expected: "a number in [0, 1]",
            }
            .into());
        }
        #[allow(
            clippy::cast_possible_truncation,
            reason = "alpha is checked to lie in [0, 1]"
        )]
        let alpha = alpha as f32;
        Ok(Some(alpha))
    }
}

fn apply_alpha(color: Color, alpha: Option<f32>) -> Color {
    match alpha {
        Some(a) => color.with_alpha(a),
        None => color,
    }
}

/// The cycle color for series `index`, used when a color attribute is unset.
fn cycle_color(index: usize) -> Color {
    let hex = DEFAULT_COLOR_CYCLE[index % DEFAULT_COLOR_CYCLE.len()];
    parse_color("color", hex).unwrap_or(css::BLACK)
}

fn resolve_line_parts<S: StyleParams>(
    picker: &Picker<'_, S>,
    config: &PlotConfig,
) -> Result<LineDraw, StyleError> {
    let alpha = picker.alpha()?;
    let color = apply_alpha(
        picker.color("color")?.unwrap_or_else(|| cycle_color(picker.index)),
        alpha,
    );
    let dash = match picker.text("ls")? {
        Some(token) => Dash::from_token(token).ok_or_else(|| ConfigurationError::InvalidToken {
            key: "ls",
            token: token.into(),
        })?,
        None => Dash::Solid,
    };
    let width = picker.number("lw")?.unwrap_or(config.line_width);
    let stroke = StrokeStyle::solid(color, width).with_dash(dash);

    let marker = match picker.marker("marker")? {
        Some(marker) => {
            let face = picker.color("mfc")?.map_or(color, |c| apply_alpha(c, alpha));
            let edge = picker.color("mec")?.map_or(color, |c| apply_alpha(c, alpha));
            let edge_width = picker.number("mew")?.unwrap_or(1.0);
            Some(MarkerStyle {
                marker,
                size: picker.number("ms")?.unwrap_or(config.marker_size),
                fill: face.into(),
                stroke: StrokeStyle::solid(edge, edge_width),
            })
        }
        None => None,
    };
    Ok(LineDraw { stroke, marker })
}

/// Resolves series `index` of a line style.
pub fn resolve_line(
    style: &LineStyle,
    index: usize,
    config: &PlotConfig,
) -> Result<LineDraw, StyleError> {
    resolve_line_parts(&Picker::new(style, index), config)
}

/// Resolves series `index` of a scatter style.
pub fn resolve_scatter(
    style: &ScatterStyle,
    index: usize,
    config: &PlotConfig,
) -> Result<ScatterDraw, StyleError> {
    let picker = Picker::new(style, index);
    let alpha = picker.alpha()?;
    let color = picker.color("c")?.unwrap_or_else(|| cycle_color(index));
    let face = apply_alpha(picker.color("fc")?.unwrap_or(color), alpha);
    let area = picker.number("s")?.unwrap_or(config.scatter_size);
    let marker = picker.marker("marker")?.unwrap_or(Marker::Circle);
    Ok(ScatterDraw {
        marker: MarkerStyle {
            marker,
            size: area.max(0.0).sqrt(),
            fill: face.into(),
            stroke: StrokeStyle::solid(face, if marker.is_stroke_only() { 1.0 } else { 0.0 }),
        },
        area,
        colormap: picker.text("cmap")?.map(str::to_owned),
    })
}

/// Resolves series `index` of an error bar style.
pub fn resolve_error_bar(
    style: &ErrorBarStyle,
    index: usize,
    config: &PlotConfig,
) -> Result<ErrorBarDraw, StyleError> {
    let picker = Picker::new(style, index);
    let line = resolve_line_parts(&picker, config)?;
    let alpha = picker.alpha()?;
    let bar_color = match picker.color("ecolor")? {
        Some(c) => apply_alpha(c, alpha),
        None => match &line.stroke.brush {
            Brush::Solid(c) => *c,
            _ => css::BLACK,
        },
    };
    let bar_width = picker.number("elinewidth")?.unwrap_or(line.stroke.stroke_width);
    let cap_width = picker.number("capthick")?.unwrap_or(bar_width);
    Ok(ErrorBarDraw {
        bar: StrokeStyle::solid(bar_color, bar_width),
        cap_size: picker.number("capsize")?.unwrap_or(config.cap_size),
        cap: StrokeStyle::solid(bar_color, cap_width),
        line,
    })
}
