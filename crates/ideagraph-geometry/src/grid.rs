//! Grid placement

use super::common::Point;

/// Column count for a two-row grid: `ceil(count / 2)`, at least one column.
pub fn half_columns(count: usize) -> usize {
    count.div_ceil(2).max(1)
}

/// Row-major grid of `count` points with uniform spacing, centered on the origin.
pub fn grid_positions(count: usize, columns: usize, spacing_x: f64, spacing_y: f64) -> Vec<Point> {
    if count == 0 {
        return Vec::new();
    }
    let columns = columns.clamp(1, count);
    let rows = count.div_ceil(columns);
    let x_offset = (columns - 1) as f64 / 2.0;
    let y_offset = (rows - 1) as f64 / 2.0;

    (0..count)
        .map(|i| {
            let col = (i % columns) as f64;
            let row = (i / columns) as f64;
            Point::new((col - x_offset) * spacing_x, (row - y_offset) * spacing_y)
        })
        .collect()
}

/// Centers of `count` cells of size `cell_width` x `cell_height`, laid out
/// row-major from `top_left`.
pub fn grid_cells(
    count: usize,
    columns: usize,
    cell_width: f64,
    cell_height: f64,
    top_left: Point,
) -> Vec<Point> {
    let columns = columns.max(1);
    (0..count)
        .map(|i| {
            let col = (i % columns) as f64;
            let row = (i / columns) as f64;
            Point::new(
                top_left.x + (col + 0.5) * cell_width,
                top_left.y + (row + 0.5) * cell_height,
            )
        })
        .collect()
}
