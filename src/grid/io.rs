//! Binarization of decoded images via the `image` crate.
//!
//! Available when the `image-io` feature is enabled. Ridges are dark on a
//! light background, so a pixel is foreground when its luma is below the
//! threshold.

use crate::grid::PixelGrid;
use crate::util::{RidgeMatchError, RidgeMatchResult};
use std::path::Path;

/// Luma threshold used when callers have no better estimate.
pub const DEFAULT_THRESHOLD: u8 = 128;

/// Builds a grid from a grayscale buffer.
pub fn grid_from_gray(img: &image::GrayImage, threshold: u8) -> PixelGrid {
    let rows = img.height() as usize;
    let cols = img.width() as usize;
    let mut grid = PixelGrid::new(rows, cols);
    for (x, y, pixel) in img.enumerate_pixels() {
        grid.put(y as usize, x as usize, pixel.0[0] < threshold);
    }
    grid
}

/// Renders foreground black on white.
pub fn grid_to_gray(grid: &PixelGrid) -> image::GrayImage {
    image::GrayImage::from_fn(grid.cols() as u32, grid.rows() as u32, |x, y| {
        let ink = grid.at(y as usize, x as usize);
        image::Luma([if ink { 0 } else { 255 }])
    })
}

/// Loads an image from disk and binarizes it.
pub fn load_binary_grid<P: AsRef<Path>>(path: P, threshold: u8) -> RidgeMatchResult<PixelGrid> {
    let img = image::open(path).map_err(|err| RidgeMatchError::ImageIo {
        reason: err.to_string(),
    })?;
    Ok(grid_from_gray(&img.to_luma8(), threshold))
}

/// Writes a grid as a black-on-white PNG.
pub fn save_binary_grid<P: AsRef<Path>>(grid: &PixelGrid, path: P) -> RidgeMatchResult<()> {
    grid_to_gray(grid)
        .save(path)
        .map_err(|err| RidgeMatchError::ImageIo {
            reason: err.to_string(),
        })
}
