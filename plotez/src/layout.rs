// Copyright 2025 the plotez Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Subplot grid and per-axes layout.
//!
//! The figure is split into equal grid cells (row-major). Each cell is then arranged like a
//! small chart: margins are reserved for the title and for each axis that is present, and the
//! remaining rectangle is the plot area that scales map into.

use kurbo::Rect;

/// A width/height pair in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Size {
    /// Creates a size.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// The rectangle of this size at the origin.
    pub fn to_rect(self) -> Rect {
        Rect::new(0.0, 0.0, self.width.max(0.0), self.height.max(0.0))
    }
}

/// Splits `area` into `rows * cols` equal cells, in row-major order.
pub fn grid_cells(area: Rect, rows: usize, cols: usize) -> Vec<Rect> {
    if rows == 0 || cols == 0 {
        return Vec::new();
    }
    let w = area.width() / cols as f64;
    let h = area.height() / rows as f64;
    let mut cells = Vec::with_capacity(rows * cols);
    for r in 0..rows {
        for c in 0..cols {
            let x0 = area.x0 + w * c as f64;
            let y0 = area.y0 + h * r as f64;
            cells.push(Rect::new(x0, y0, x0 + w, y0 + h));
        }
    }
    cells
}

/// Margins to reserve inside one grid cell. `None` means the part is absent.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AxesLayoutSpec {
    /// Title band height.
    pub title_top: Option<f64>,
    /// Left axis thickness (primary y axis).
    pub axis_left: Option<f64>,
    /// Right axis thickness (twin y axis).
    pub axis_right: Option<f64>,
    /// Top axis thickness (twin x axis).
    pub axis_top: Option<f64>,
    /// Bottom axis thickness (primary x axis).
    pub axis_bottom: Option<f64>,
    /// Padding around the whole cell.
    pub outer_padding: f64,
    /// Legend size; the legend sits inside the upper-right corner of the plot.
    pub legend: Option<Size>,
}

/// Output of [`AxesLayout::arrange`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxesLayout {
    /// The grid cell.
    pub cell: Rect,
    /// Title band, if any.
    pub title_top: Option<Rect>,
    /// The plot rectangle scales map into.
    pub plot: Rect,
    /// Left axis band, if any.
    pub axis_left: Option<Rect>,
    /// Right axis band, if any.
    pub axis_right: Option<Rect>,
    /// Top axis band, if any.
    pub axis_top: Option<Rect>,
    /// Bottom axis band, if any.
    pub axis_bottom: Option<Rect>,
    /// Legend rectangle, if any.
    pub legend: Option<Rect>,
}

/// Gap between the legend and the plot frame.
const LEGEND_OFFSET: f64 = 8.0;

impl AxesLayout {
    /// Arranges `spec` inside `cell`.
    pub fn arrange(cell: Rect, spec: &AxesLayoutSpec) -> Self {
        let outer_padding = spec.outer_padding.max(0.0);
        let title_h = spec.title_top.unwrap_or(0.0).max(0.0);
        let left_w = spec.axis_left.unwrap_or(0.0).max(0.0);
        let right_w = spec.axis_right.unwrap_or(0.0).max(0.0);
        let top_h = spec.axis_top.unwrap_or(0.0).max(0.0);
        let bottom_h = spec.axis_bottom.unwrap_or(0.0).max(0.0);

        let x0 = cell.x0 + outer_padding + left_w;
        let y0 = cell.y0 + outer_padding + title_h + top_h;
        let x1 = (cell.x1 - outer_padding - right_w).max(x0);
        let y1 = (cell.y1 - outer_padding - bottom_h).max(y0);
        let plot = Rect::new(x0, y0, x1, y1);

        let band = |thickness: f64, rect: Rect| (thickness > 0.0).then_some(rect);
        let title_top = band(
            title_h,
            Rect::new(
                plot.x0,
                cell.y0 + outer_padding,
                plot.x1,
                cell.y0 + outer_padding + title_h,
            ),
        );
        let axis_left = band(left_w, Rect::new(plot.x0 - left_w, plot.y0, plot.x0, plot.y1));
        let axis_right = band(right_w, Rect::new(plot.x1, plot.y0, plot.x1 + right_w, plot.y1));
        let axis_top = band(top_h, Rect::new(plot.x0, plot.y0 - top_h, plot.x1, plot.y0));
        let axis_bottom = band(
            bottom_h,
            Rect::new(plot.x0, plot.y1, plot.x1, plot.y1 + bottom_h),
        );

        let legend = spec.legend.map(|size| {
            let w = size.width.max(0.0).min(plot.width());
            let h = size.height.max(0.0).min(plot.height());
            Rect::new(
                plot.x1 - LEGEND_OFFSET - w,
                plot.y0 + LEGEND_OFFSET,
                plot.x1 - LEGEND_OFFSET,
                plot.y0 + LEGEND_OFFSET + h,
            )
        });

        Self {
            cell,
            title_top,
            plot,
            axis_left,
            axis_right,
            axis_top,
            axis_bottom,
            legend,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_cells_are_row_major() {
        let cells = grid_cells(Rect::new(0.0, 0.0, 200.0, 100.0), 2, 2);
        assert_eq!(cells.len(), 4, "four cells");
        assert_eq!(cells[1], Rect::new(100.0, 0.0, 200.0, 50.0), "second is top right");
        assert_eq!(cells[2], Rect::new(0.0, 50.0, 100.0, 100.0), "third is bottom left");
        assert!(grid_cells(Rect::ZERO, 0, 3).is_empty(), "empty grid");
    }

    #[test]
    fn margins_are_reserved_inside_the_cell() {
        let spec = AxesLayoutSpec {
            title_top: Some(20.0),
            axis_left: Some(30.0),
            axis_right: None,
            axis_top: Some(12.0),
            axis_bottom: Some(18.0),
            outer_padding: 10.0,
            legend: Some(Size::new(40.0, 16.0)),
        };
        let layout = AxesLayout::arrange(Rect::new(0.0, 0.0, 300.0, 200.0), &spec);

        let title = layout.title_top.expect("missing title rect");
        assert!((title.y0 - 10.0).abs() < 1e-9, "title starts after padding");
        assert!((layout.plot.y0 - (10.0 + 20.0 + 12.0)).abs() < 1e-9, "plot top");
        assert!((layout.plot.y1 - (200.0 - 10.0 - 18.0)).abs() < 1e-9, "plot bottom");
        assert!((layout.plot.x0 - 40.0).abs() < 1e-9, "plot left");
        assert!(layout.axis_right.is_none(), "no right axis");

        let legend = layout.legend.expect("legend rect");
        assert!((legend.x1 - (layout.plot.x1 - LEGEND_OFFSET)).abs() < 1e-9, "upper right");
    }
}
