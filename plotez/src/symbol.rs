// Copyright 2025 the plotez Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Marker shapes.

use kurbo::{BezPath, Circle, Shape};

/// A marker shape, named by its plotting token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Marker {
    /// `o`
    Circle,
    /// `.`: a small circle.
    Point,
    /// `s`
    Square,
    /// `^`
    TriangleUp,
    /// `v`
    TriangleDown,
    /// `x`
    Cross,
    /// `+`
    Plus,
    /// `D`
    Diamond,
    /// `*`: a five-pointed star.
    Star,
}

impl Marker {
    /// Parses a marker token.
    pub fn from_token(token: &str) -> Option<Self> {
        Some(match token {
            "o" => Self::Circle,
            "." => Self::Point,
            "s" => Self::Square,
            "^" => Self::TriangleUp,
            "v" => Self::TriangleDown,
            "x" => Self::Cross,
            "+" => Self::Plus,
            "D" => Self::Diamond,
            "*" => Self::Star,
            _ => return None,
        })
    }

    /// Returns `true` for markers that are drawn as strokes only.
    pub fn is_stroke_only(self) -> bool {
        matches!(self, Self::Cross | Self::Plus)
    }

    /// Returns a path for this marker centered at `cx, cy`, using `size` as the diameter/side.
    pub fn path(self, cx: f64, cy: f64, size: f64) -> BezPath {
        let half = size * 0.5;
        match self {
            Self::Circle => circle_path(cx, cy, size),
            Self::Point => circle_path(cx, cy, size * 0.5),
            Self::Square => polygon(&[
                (cx - half, cy - half),
                (cx + half, cy - half),
                (cx + half, cy + half),
                (cx - half, cy + half),
            ]),
            // y grows downward.
            Self::TriangleUp => polygon(&[
                (cx, cy - half),
                (cx + half, cy + half),
                (cx - half, cy + half),
            ]),
            Self::TriangleDown => polygon(&[
                (cx - half, cy - half),
                (cx + half, cy - half),
                (cx, cy + half),
            ]),
            Self::Diamond => polygon(&[
                (cx, cy - half),
                (cx + half, cy),
                (cx, cy + half),
                (cx - half, cy),
            ]),
            Self::Cross => segments(&[
                ((cx - half, cy - half), (cx + half, cy + half)),
                ((cx - half, cy + half), (cx + half, cy - half)),
            ]),
            Self::Plus => segments(&[
                ((cx - half, cy), (cx + half, cy)),
                ((cx, cy - half), (cx, cy + half)),
            ]),
            Self::Star => star_path(cx, cy, half),
        }
    }
}

fn polygon(points: &[(f64, f64)]) -> BezPath {
    let mut p = BezPath::new();
    let mut iter = points.iter().copied();
    if let Some(first) = iter.next() {
        p.move_to(first);
        for pt in iter {
            p.line_to(pt);
        }
        p.close_path();
    }
    p
}

fn segments(lines: &[((f64, f64), (f64, f64))]) -> BezPath {
    let mut p = BezPath::new();
    for &(a, b) in lines {
        p.move_to(a);
        p.line_to(b);
    }
    p
}

fn circle_path(cx: f64, cy: f64, size: f64) -> BezPath {
    let circle = Circle::new((cx, cy), size * 0.5);
    circle.path_elements(0.1).collect()
}

fn star_path(cx: f64, cy: f64, outer: f64) -> BezPath {
    let inner = outer * 0.4;
    let points: Vec<(f64, f64)> = (0..10)
        .map(|i| {
            let r = if i % 2 == 0 { outer } else { inner };
            let angle = -core::f64::consts::FRAC_PI_2 + f64::from(i) * core::f64::consts::PI / 5.0;
            (cx + r * angle.cos(), cy + r * angle.sin())
        })
        .collect();
    polygon(&points)
}
