use egui::{Pos2, Rect, Vec2};
use itertools::Itertools as _;

use super::options::{LayoutMode, LayoutOptions};

/// Assign a rect to each of `count` panels, in collection order.
///
/// Pure: the output depends only on the arguments. Extents are not floored, so a viewport too
/// small for `count` panels yields zero or negative sizes.
pub fn arrange(mode: LayoutMode, viewport: Vec2, count: usize, options: &LayoutOptions) -> Vec<Rect> {
    match (mode, mode.natural_count()) {
        (LayoutMode::Vertical, _) => stacked_rows(viewport, count, options),
        // Split modes off their count fall back to the automatic arrangement.
        (_, Some(natural)) if natural != count => auto_arrange(viewport, count, options),
        (LayoutMode::TwoSplit, _) => two_columns(viewport, options).to_vec(),
        (LayoutMode::ThreeSplit, _) => top_two_bottom_one(viewport, options).to_vec(),
        (LayoutMode::Auto, _) => auto_arrange(viewport, count, options),
    }
}

/// Branches on panel count: centered single panel, two columns, two-over-one, or a grid.
pub fn auto_arrange(viewport: Vec2, count: usize, options: &LayoutOptions) -> Vec<Rect> {
    match count {
        0 => Vec::new(),
        1 => vec![centered(viewport, options.single_panel_size)],
        2 => two_columns(viewport, options).to_vec(),
        3 => top_two_bottom_one(viewport, options).to_vec(),
        n => grid(viewport, n, options),
    }
}

fn centered(viewport: Vec2, size: Vec2) -> Rect {
    let min = (viewport - size) / 2.0;
    Rect::from_min_size(min.to_pos2(), size)
}

fn two_columns(viewport: Vec2, options: &LayoutOptions) -> [Rect; 2] {
    let m = options.outer_margin;
    let width = (viewport.x - 2.0 * m) / 2.0;
    let height = viewport.y - 2.0 * m;
    let size = egui::vec2(width, height);
    [
        Rect::from_min_size(egui::pos2(m, m), size),
        Rect::from_min_size(egui::pos2(m + width, m), size),
    ]
}

fn top_two_bottom_one(viewport: Vec2, options: &LayoutOptions) -> [Rect; 3] {
    let m = options.outer_margin;
    let top_height = (viewport.y - 3.0 * m) / 2.0;
    let bottom_height = viewport.y - top_height - 2.0 * m;
    let top_width = (viewport.x - 2.0 * m) / 2.0;
    let top_size = egui::vec2(top_width, top_height);
    [
        Rect::from_min_size(egui::pos2(m, m), top_size),
        Rect::from_min_size(egui::pos2(m + top_width, m), top_size),
        Rect::from_min_size(
            egui::pos2(m, m + top_height),
            egui::vec2(viewport.x - 2.0 * m, bottom_height),
        ),
    ]
}

/// `(cols, rows)` for an `n`-panel grid: `cols = ceil(sqrt(n))`, `rows = ceil(n / cols)`.
pub fn grid_dimensions(n: usize) -> (usize, usize) {
    if n == 0 {
        return (0, 0);
    }
    let mut cols = (n as f64).sqrt().ceil() as usize;
    // Guard against float error around perfect squares.
    while cols * cols < n {
        cols += 1;
    }
    while cols > 1 && (cols - 1) * (cols - 1) >= n {
        cols -= 1;
    }
    (cols, n.div_ceil(cols))
}

fn grid(viewport: Vec2, n: usize, options: &LayoutOptions) -> Vec<Rect> {
    let (cols, rows) = grid_dimensions(n);
    let cell = cell_extent(viewport, cols, rows, options);
    let g = options.gutter;
    let origin = Pos2::new(options.outer_margin, options.outer_margin);

    (0..rows)
        .cartesian_product(0..cols)
        .take(n)
        .map(|(row, col)| {
            let min = origin + egui::vec2(col as f32 * (cell.x + g), row as f32 * (cell.y + g));
            Rect::from_min_size(min, cell)
        })
        .collect()
}

fn cell_extent(viewport: Vec2, cols: usize, rows: usize, options: &LayoutOptions) -> Vec2 {
    let inner = viewport - Vec2::splat(2.0 * options.outer_margin);
    let g = options.gutter;
    egui::vec2(
        (inner.x - (cols as f32 - 1.0) * g) / cols as f32,
        (inner.y - (rows as f32 - 1.0) * g) / rows as f32,
    )
}

fn stacked_rows(viewport: Vec2, n: usize, options: &LayoutOptions) -> Vec<Rect> {
    if n == 0 {
        return Vec::new();
    }
    let cell = cell_extent(viewport, 1, n, options);
    let origin = Pos2::new(options.outer_margin, options.outer_margin);
    (0..n)
        .map(|row| {
            let min = origin + egui::vec2(0.0, row as f32 * (cell.y + options.gutter));
            Rect::from_min_size(min, cell)
        })
        .collect()
}

/// True if any rect has a non-positive width or height.
pub fn has_degenerate_extent(rects: &[Rect]) -> bool {
    rects.iter().any(|r| !(r.width() > 0.0 && r.height() > 0.0))
}
