//! Rigid transforms of minutiae: rotation about a pivot, then translation.
//!
//! Rotation works in geometric coordinates (`x = col - pivot_col`,
//! `y = pivot_row - row`), so a positive angle turns points and orientations
//! counter-clockwise as seen on screen.

use crate::minutiae::Minutia;
use crate::util::math::{round_half_up, sin_cos_deg, wrap_deg_360};

/// Rotates `minutia` by `rotation_deg` about `(center_row, center_col)`.
///
/// Positions are rounded to the nearest pixel; the orientation is shifted by
/// the same angle and wrapped to `[0, 360)`.
pub fn rotate(minutia: Minutia, center_row: i32, center_col: i32, rotation_deg: i32) -> Minutia {
    let x = f64::from(minutia.col - center_col);
    let y = f64::from(center_row - minutia.row);
    let (sin, cos) = sin_cos_deg(rotation_deg);

    Minutia {
        row: round_half_up(f64::from(center_row) - (x * sin + y * cos)),
        col: round_half_up(f64::from(center_col) + (x * cos - y * sin)),
        orientation: wrap_deg_360(minutia.orientation + rotation_deg),
        kind: minutia.kind,
    }
}

/// Shifts `minutia` by `(-row_delta, -col_delta)`.
pub fn translate(minutia: Minutia, row_delta: i32, col_delta: i32) -> Minutia {
    Minutia {
        row: minutia.row - row_delta,
        col: minutia.col - col_delta,
        ..minutia
    }
}

/// Rotates about `(center_row, center_col)` and then translates.
pub fn transform(
    minutia: Minutia,
    center_row: i32,
    center_col: i32,
    row_delta: i32,
    col_delta: i32,
    rotation_deg: i32,
) -> Minutia {
    translate(
        rotate(minutia, center_row, center_col, rotation_deg),
        row_delta,
        col_delta,
    )
}

/// Applies [`transform`] to every minutia, preserving order.
pub fn transform_all(
    minutiae: &[Minutia],
    center_row: i32,
    center_col: i32,
    row_delta: i32,
    col_delta: i32,
    rotation_deg: i32,
) -> Vec<Minutia> {
    minutiae
        .iter()
        .map(|&m| transform(m, center_row, center_col, row_delta, col_delta, rotation_deg))
        .collect()
}
