use std::f64::consts::FRAC_PI_2;

use ridgematch::orientation::{angle, slope};
use ridgematch::{orientation_degrees, PixelGrid, RidgeMatchError};

fn grid(rows: &[&str]) -> PixelGrid {
    let cells: Vec<Vec<bool>> = rows
        .iter()
        .map(|row| row.chars().map(|c| c == '#').collect())
        .collect();
    PixelGrid::from_rows(&cells).unwrap()
}

fn stroke() -> PixelGrid {
    grid(&["...#.", "..##.", ".##..", "....."])
}

#[test]
fn stroke_slope_and_angle() {
    let g = stroke();
    let s = slope(&g, 2, 1);
    assert_eq!(s, 0.7);
    assert_eq!(angle(&g, 2, 1, s), 0.7f64.atan());
}

#[test]
fn stroke_orientation_matches_regression() {
    let expected = 0.7f64.atan().to_degrees().round() as i32;
    assert_eq!(expected, 35);
    assert_eq!(orientation_degrees(&stroke(), 2, 1, 30).unwrap(), expected);
    assert_eq!(orientation_degrees(&stroke(), 2, 1, 16).unwrap(), expected);
}

#[test]
fn small_window_sees_only_part_of_the_stroke() {
    assert_eq!(orientation_degrees(&stroke(), 2, 1, 1).unwrap(), 27);
}

#[test]
fn orientation_at_far_tip_points_back_along_stroke() {
    assert_eq!(orientation_degrees(&stroke(), 0, 3, 16).unwrap(), 235);
}

#[test]
fn vertical_scatter_has_infinite_slope() {
    let g = grid(&["..#..", "..#..", "..#..", ".....", "....."]);
    assert_eq!(slope(&g, 0, 2), f64::INFINITY);
    assert_eq!(slope(&g, 2, 2), f64::INFINITY);
    assert_eq!(angle(&g, 2, 2, f64::INFINITY), FRAC_PI_2);
    assert_eq!(orientation_degrees(&g, 0, 2, 4).unwrap(), 270);
    assert_eq!(orientation_degrees(&g, 2, 2, 4).unwrap(), 90);
}

#[test]
fn lone_pixel_points_down() {
    // No points at all: Sxx is zero and neither side of the normal wins.
    let g = grid(&["...", ".#.", "..."]);
    assert_eq!(slope(&g, 1, 1), f64::INFINITY);
    assert_eq!(orientation_degrees(&g, 1, 1, 1).unwrap(), 270);
}

#[test]
fn steep_scatter_with_zero_covariance_divides_by_zero() {
    // Sxx = 2, Syy = 8, Sxy = 0: the reciprocal branch yields +inf.
    let g = grid(&["#.#", "...", ".#."]);
    let s = slope(&g, 2, 1);
    assert!(s.is_infinite() && s > 0.0);
    assert_eq!(angle(&g, 2, 1, s), FRAC_PI_2);
}

#[test]
fn diagonal_flips_toward_denser_side() {
    let g = grid(&["#....", ".#...", "..#..", "....."]);
    assert_eq!(slope(&g, 2, 2), -1.0);
    assert_eq!(orientation_degrees(&g, 2, 2, 2).unwrap(), 135);
    assert_eq!(orientation_degrees(&g, 0, 0, 2).unwrap(), 315);
}

#[test]
fn orientation_rejects_off_grid_pixel() {
    let err = orientation_degrees(&stroke(), 4, 0, 16).unwrap_err();
    assert_eq!(
        err,
        RidgeMatchError::OutOfBounds {
            row: 4,
            col: 0,
            rows: 4,
            cols: 5,
        }
    );
}
