// Copyright 2025 the plotez Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG writer for lowered figures.

use kurbo::{Rect, Shape};
use peniko::Brush;

use crate::scene::{Lowered, Mark, PathStroke, TextAnchor, TextBaseline};

#[derive(Debug, Default)]
pub(crate) struct SvgScene {
    marks: Vec<(i32, Mark)>,
    view_box: Option<Rect>,
}

impl SvgScene {
    pub(crate) fn from_lowered(lowered: Lowered) -> Self {
        Self {
            marks: lowered.marks,
            view_box: Some(lowered.view),
        }
    }

    pub(crate) fn to_svg_string(&self) -> String {
        let view_box = match (self.view_box, self.content_bounds()) {
            (Some(a), Some(b)) => Some(a.union(b)),
            (a, b) => a.or(b),
        };
        let view_box = view_box.unwrap_or_else(|| Rect::new(0.0, 0.0, 100.0, 100.0));
        let mut out = String::new();

        out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
        out.push_str(&format!(
            r#"viewBox="{} {} {} {}" width="{}" height="{}" font-family="sans-serif">"#,
            view_box.x0,
            view_box.y0,
            view_box.width(),
            view_box.height(),
            view_box.width(),
            view_box.height()
        ));
        out.push('\n');

        // Stable: equal z keeps insertion order.
        let mut order: Vec<usize> = (0..self.marks.len()).collect();
        order.sort_by_key(|&i| self.marks[i].0);

        for (_z, mark) in order.into_iter().map(|i| &self.marks[i]) {
            match mark {
                Mark::Rect { rect, fill, stroke } => {
                    out.push_str(&format!(
                        r#"<rect x="{}" y="{}" width="{}" height="{}""#,
                        rect.x0,
                        rect.y0,
                        rect.width(),
                        rect.height(),
                    ));
                    write_paint_attr(&mut out, "fill", fill);
                    write_stroke_attrs(&mut out, stroke.as_ref());
                    out.push_str("/>\n");
                }
                Mark::Path { path, fill, stroke } => {
                    out.push_str(&format!(r#"<path d="{}""#, path.to_svg()));
                    match fill {
                        Some(fill) => write_paint_attr(&mut out, "fill", fill),
                        None => out.push_str(r#" fill="none""#),
                    }
                    write_stroke_attrs(&mut out, stroke.as_ref());
                    out.push_str("/>\n");
                }
                Mark::Text(t) => {
                    let baseline = match t.baseline {
                        TextBaseline::Middle => "middle",
                        TextBaseline::Alphabetic => "alphabetic",
                        TextBaseline::Hanging => "hanging",
                    };
                    out.push_str(&format!(
                        r#"<text x="{}" y="{}" font-size="{}" dominant-baseline="{}""#,
                        t.pos.x, t.pos.y, t.font_size, baseline
                    ));
                    if t.angle != 0.0 {
                        out.push_str(&format!(
                            r#" transform="rotate({} {} {})""#,
                            t.angle, t.pos.x, t.pos.y
                        ));
                    }
                    out.push_str(match t.anchor {
                        TextAnchor::Start => r#" text-anchor="start""#,
                        TextAnchor::Middle => r#" text-anchor="middle""#,
                        TextAnchor::End => r#" text-anchor="end""#,
                    });
                    write_paint_attr(&mut out, "fill", &t.fill);
                    out.push('>');
                    out.push_str(&escape_xml(&t.text));
                    out.push_str("</text>\n");
                }
            }
        }

        out.push_str("</svg>\n");
        out
    }

    /// Bounds of everything drawn, so labels outside the figure are not clipped.
    fn content_bounds(&self) -> Option<Rect> {
        self.marks
            .iter()
            .filter_map(|(_z, mark)| match mark {
                Mark::Rect { rect, .. } => Some(*rect),
                Mark::Path { path, .. } => Some(path.bounding_box()),
                // Rotated labels are left to the figure margins.
                Mark::Text(t) if t.angle != 0.0 => None,
                Mark::Text(t) => Some(estimate_text_bounds(
                    t.pos.x,
                    t.pos.y,
                    t.font_size,
                    t.anchor,
                    t.baseline,
                    &t.text,
                )),
            })
            .reduce(|a, b| a.union(b))
    }
}

fn estimate_text_bounds(
    x: f64,
    y: f64,
    font_size: f64,
    anchor: TextAnchor,
    baseline: TextBaseline,
    text: &str,
) -> Rect {
    // Roughly 0.6em per glyph.
    let width = 0.6 * font_size * text.chars().count() as f64;
    let half_height = 0.5 * font_size;
    let y_midline = match baseline {
        TextBaseline::Middle => y,
        TextBaseline::Alphabetic => y - 0.3 * font_size,
        TextBaseline::Hanging => y + 0.3 * font_size,
    };
    let (x0, x1) = match anchor {
        TextAnchor::Start => (x, x + width),
        TextAnchor::Middle => (x - width / 2.0, x + width / 2.0),
        TextAnchor::End => (x - width, x),
    };
    Rect::new(x0, y_midline - half_height, x1, y_midline + half_height)
}

fn svg_paint(brush: &Brush) -> (String, Option<f64>) {
    match brush {
        Brush::Solid(color) => {
            let rgba = color.to_rgba8();
            let paint = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
            let opacity = (rgba.a != 255).then(|| f64::from(rgba.a) / 255.0);
            (paint, opacity)
        }
        _ => ("none".to_string(), None),
    }
}

fn write_paint_attr(out: &mut String, name: &str, brush: &Brush) {
    let (value, opacity) = svg_paint(brush);
    out.push_str(&format!(r#" {name}="{value}""#));
    if let Some(o) = opacity {
        out.push_str(&format!(r#" {name}-opacity="{o}""#));
    }
}

fn write_stroke_attrs(out: &mut String, stroke: Option<&PathStroke>) {
    let Some(stroke) = stroke.filter(|s| s.width > 0.0) else {
        return;
    };
    write_paint_attr(out, "stroke", &stroke.brush);
    out.push_str(&format!(r#" stroke-width="{}""#, stroke.width));
    if !stroke.dashes.is_empty() {
        let dashes: Vec<String> = stroke.dashes.iter().map(ToString::to_string).collect();
        out.push_str(&format!(r#" stroke-dasharray="{}""#, dashes.join(" ")));
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
