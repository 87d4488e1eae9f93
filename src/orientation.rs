//! Local ridge orientation from a least-squares line through a region.
//!
//! Offsets are measured from the center pixel with `x` growing to the right
//! and `y` growing upward, so `y = center_row - row`. The regression line
//! passes through the origin; its direction is then disambiguated toward the
//! side of the normal that holds more region pixels.

use std::f64::consts::{FRAC_PI_2, PI};

use crate::grid::PixelGrid;
use crate::region::{connected_region, grow_region};
use crate::util::math::round_half_up;
use crate::util::RidgeMatchResult;

/// Offsets of every foreground cell of `region` other than `(row, col)`.
fn offsets(region: &PixelGrid, row: usize, col: usize) -> impl Iterator<Item = (i64, i64)> + '_ {
    region
        .foreground()
        .filter(move |&(r, c)| (r, c) != (row, col))
        .map(move |(r, c)| (c as i64 - col as i64, row as i64 - r as i64))
}

/// Slope of the regression line through the foreground of `region`,
/// centered on `(row, col)`.
///
/// Returns `+inf` when every point lies on the vertical through the center.
/// When the scatter is taller than wide the reciprocal form `Syy / Sxy` is
/// used; if `Sxy` is zero there the division is left to IEEE semantics.
pub fn slope(region: &PixelGrid, row: usize, col: usize) -> f64 {
    let (mut sxy, mut sxx, mut syy) = (0i64, 0i64, 0i64);
    for (x, y) in offsets(region, row, col) {
        sxy += x * y;
        sxx += x * x;
        syy += y * y;
    }

    let (sxy, sxx, syy) = (sxy as f64, sxx as f64, syy as f64);
    if sxx == 0.0 {
        f64::INFINITY
    } else if sxx >= syy {
        sxy / sxx
    } else {
        syy / sxy
    }
}

/// Direction in radians of the ridge through `(row, col)` given its `slope`.
///
/// Region pixels are split by the normal to the regression line; the angle
/// is flipped by `pi` so that it points toward the denser half. The result
/// lies in `(-pi/2, 3pi/2)` and is not normalized.
pub fn angle(region: &PixelGrid, row: usize, col: usize, slope: f64) -> f64 {
    let normal = -1.0 / slope;
    let (mut above, mut below) = (0usize, 0usize);
    for (x, y) in offsets(region, row, col) {
        if (y as f64) >= normal * (x as f64) {
            above += 1;
        } else {
            below += 1;
        }
    }

    if slope == f64::INFINITY {
        return if above > below { FRAC_PI_2 } else { -FRAC_PI_2 };
    }

    let angle = slope.atan();
    if (angle > 0.0 && below > above) || (angle < 0.0 && below < above) {
        angle + PI
    } else {
        angle
    }
}

/// Orientation in whole degrees `[0, 360)` of the ridge at `(row, col)`,
/// estimated over the region within `distance`.
pub fn orientation_degrees(
    grid: &PixelGrid,
    row: usize,
    col: usize,
    distance: usize,
) -> RidgeMatchResult<i32> {
    let region = connected_region(grid, row, col, distance)?;
    Ok(region_orientation(&region, distance))
}

/// Orientation for a pixel already known to be inside `grid`.
pub(crate) fn orientation_unchecked(grid: &PixelGrid, row: usize, col: usize, distance: usize) -> i32 {
    region_orientation(&grow_region(grid, row, col, distance), distance)
}

fn region_orientation(region: &PixelGrid, distance: usize) -> i32 {
    let slope = slope(region, distance, distance);
    let radians = angle(region, distance, distance, slope);
    let degrees = round_half_up(radians.to_degrees());
    if degrees < 0 {
        degrees + 360
    } else {
        degrees
    }
}
