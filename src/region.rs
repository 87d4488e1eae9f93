//! Bounded flood fill around a pixel.
//!
//! The region of a pixel is the set of foreground cells 8-connected to it
//! inside a square window of side `2 * distance + 1`. The query pixel always
//! lands at `(distance, distance)` of the returned grid.

use crate::grid::{PixelGrid, NEIGHBOR_OFFSETS};
use crate::util::{RidgeMatchError, RidgeMatchResult};

/// Extracts the connected region around `(row, col)` within `distance`.
///
/// Returns an error when `(row, col)` lies outside `grid`.
pub fn connected_region(
    grid: &PixelGrid,
    row: usize,
    col: usize,
    distance: usize,
) -> RidgeMatchResult<PixelGrid> {
    if !grid.contains(row, col) {
        return Err(grid.out_of_bounds(row, col));
    }
    Ok(grow_region(grid, row, col, distance))
}

/// Flood fill for a pixel already known to be inside `grid`.
pub(crate) fn grow_region(grid: &PixelGrid, row: usize, col: usize, distance: usize) -> PixelGrid {
    let side = 2 * distance + 1;
    let window = copy_window(
        grid,
        row as isize - distance as isize,
        col as isize - distance as isize,
        side,
    );

    let mut region = PixelGrid::new(side, side);
    region.put(distance, distance, grid.at(row, col));

    loop {
        let before = region.clone();
        for r in 0..side {
            for c in 0..side {
                spread_from(&window, &mut region, r, c);
            }
        }
        if region == before {
            break;
        }
    }
    region
}

/// Copies the `width x width` window whose top-left corner is
/// `(top_left_row, top_left_col)` in `grid`.
///
/// Cells of the window outside `grid` are background, so the window may lie
/// partly or entirely outside the source. A zero width is rejected.
pub fn bounded_copy(
    grid: &PixelGrid,
    top_left_row: isize,
    top_left_col: isize,
    width: usize,
) -> RidgeMatchResult<PixelGrid> {
    if width == 0 {
        return Err(RidgeMatchError::InvalidDimensions { rows: 0, cols: 0 });
    }
    Ok(copy_window(grid, top_left_row, top_left_col, width))
}

fn copy_window(grid: &PixelGrid, top_left_row: isize, top_left_col: isize, width: usize) -> PixelGrid {
    let mut out = PixelGrid::new(width, width);
    let span = width as isize;

    let row_start = top_left_row.max(0);
    let row_end = (top_left_row + span).min(grid.rows() as isize);
    let col_start = top_left_col.max(0);
    let col_end = (top_left_col + span).min(grid.cols() as isize);
    if row_start >= row_end || col_start >= col_end {
        return out;
    }

    for src_row in row_start..row_end {
        let dst_row = (src_row - top_left_row) as usize;
        for src_col in col_start..col_end {
            let dst_col = (src_col - top_left_col) as usize;
            out.put(dst_row, dst_col, grid.at(src_row as usize, src_col as usize));
        }
    }
    out
}

/// Spreads a set cell of `region` to its in-bounds neighbors, copying each
/// neighbor's value from `window`.
///
/// Does nothing when `(row, col)` is outside `region` or the cell is unset.
/// `window` and `region` must have the same extent.
pub fn spread_from(window: &PixelGrid, region: &mut PixelGrid, row: usize, col: usize) {
    debug_assert_eq!(
        (window.rows(), window.cols()),
        (region.rows(), region.cols())
    );
    if region.get(row, col) != Some(true) {
        return;
    }
    for (dr, dc) in NEIGHBOR_OFFSETS {
        let r = row as isize + dr;
        let c = col as isize + dc;
        if r < 0 || c < 0 {
            continue;
        }
        let (r, c) = (r as usize, c as usize);
        if let Some(value) = window.get(r, c) {
            if region.contains(r, c) {
                region.put(r, c, value);
            }
        }
    }
}
