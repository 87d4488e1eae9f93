//! Binary pixel grids and 3x3 neighborhood sampling.
//!
//! `PixelGrid` stores a rectangular image of booleans in row-major order,
//! `true` meaning foreground (ridge ink). Neighborhoods are returned as a
//! fixed 8-entry vector in clockwise order starting directly above the pixel:
//!
//! ```text
//! 7 0 1
//! 6 . 2
//! 5 4 3
//! ```
//!
//! Neighbors that fall outside the grid read as background.

use crate::util::{RidgeMatchError, RidgeMatchResult};

#[cfg(feature = "image-io")]
pub mod io;

/// Index of the neighbor above the pixel.
pub const NORTH: usize = 0;
/// Index of the upper-right neighbor.
pub const NORTH_EAST: usize = 1;
/// Index of the neighbor right of the pixel.
pub const EAST: usize = 2;
/// Index of the lower-right neighbor.
pub const SOUTH_EAST: usize = 3;
/// Index of the neighbor below the pixel.
pub const SOUTH: usize = 4;
/// Index of the lower-left neighbor.
pub const SOUTH_WEST: usize = 5;
/// Index of the neighbor left of the pixel.
pub const WEST: usize = 6;
/// Index of the upper-left neighbor.
pub const NORTH_WEST: usize = 7;

/// Row/column offsets for each neighbor index.
pub(crate) const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
];

/// The 3x3 neighborhood of a pixel, indexed by the direction constants.
pub type Neighbors = [bool; 8];

/// Owned rectangular binary image.
///
/// Callers building grids from nested rows go through [`PixelGrid::from_rows`],
/// which rejects rows of differing length.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PixelGrid {
    data: Vec<bool>,
    rows: usize,
    cols: usize,
}

impl PixelGrid {
    /// Creates an all-background grid.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![false; rows * cols],
            rows,
            cols,
        }
    }

    /// Creates a grid from a row-major buffer of `rows * cols` cells.
    pub fn from_vec(data: Vec<bool>, rows: usize, cols: usize) -> RidgeMatchResult<Self> {
        let needed = rows
            .checked_mul(cols)
            .ok_or(RidgeMatchError::InvalidDimensions { rows, cols })?;
        if data.len() != needed {
            return Err(RidgeMatchError::BufferSizeMismatch {
                needed,
                got: data.len(),
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Creates a grid from nested rows; every row must have the same length.
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> RidgeMatchResult<Self> {
        let cols = rows.first().map_or(0, |row| row.as_ref().len());
        let mut data = Vec::with_capacity(rows.len() * cols);
        for (idx, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(RidgeMatchError::RaggedRows {
                    row: idx,
                    expected: cols,
                    got: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            data,
            rows: rows.len(),
            cols,
        })
    }

    /// Returns the number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns true if the grid has no cells.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the row-major cell buffer.
    pub fn as_slice(&self) -> &[bool] {
        &self.data
    }

    /// Returns true if `(row, col)` addresses a cell of the grid.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Returns the cell at `(row, col)` if it is within bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        if !self.contains(row, col) {
            return None;
        }
        Some(self.data[row * self.cols + col])
    }

    /// Writes the cell at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, value: bool) -> RidgeMatchResult<()> {
        if !self.contains(row, col) {
            return Err(self.out_of_bounds(row, col));
        }
        self.data[row * self.cols + col] = value;
        Ok(())
    }

    /// Returns one row as a slice.
    pub fn row(&self, row: usize) -> Option<&[bool]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.cols;
        self.data.get(start..start + self.cols)
    }

    /// Counts foreground cells.
    pub fn count_foreground(&self) -> usize {
        self.data.iter().filter(|&&v| v).count()
    }

    /// Iterates over `(row, col)` of foreground cells in row-major order.
    pub fn foreground(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let cols = self.cols;
        self.data
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v)
            .map(move |(idx, _)| (idx / cols, idx % cols))
    }

    /// Reads a cell at signed coordinates; anything off-grid is background.
    pub(crate) fn get_signed(&self, row: isize, col: isize) -> bool {
        if row < 0 || col < 0 {
            return false;
        }
        self.get(row as usize, col as usize).unwrap_or(false)
    }

    /// Unchecked read for coordinates the caller already validated.
    #[inline]
    pub(crate) fn at(&self, row: usize, col: usize) -> bool {
        self.data[row * self.cols + col]
    }

    /// Unchecked write for coordinates the caller already validated.
    #[inline]
    pub(crate) fn put(&mut self, row: usize, col: usize, value: bool) {
        self.data[row * self.cols + col] = value;
    }

    pub(crate) fn out_of_bounds(&self, row: usize, col: usize) -> RidgeMatchError {
        RidgeMatchError::OutOfBounds {
            row,
            col,
            rows: self.rows,
            cols: self.cols,
        }
    }
}

/// Samples the 8-neighborhood of `(row, col)`.
///
/// Returns `None` when the pixel itself is off-grid.
pub fn neighbors(grid: &PixelGrid, row: usize, col: usize) -> Option<Neighbors> {
    if !grid.contains(row, col) {
        return None;
    }
    let mut out = [false; 8];
    for (slot, (dr, dc)) in out.iter_mut().zip(NEIGHBOR_OFFSETS) {
        *slot = grid.get_signed(row as isize + dr, col as isize + dc);
    }
    Some(out)
}

/// Counts foreground entries in a neighbor vector.
pub fn black_count(neighbors: &[bool]) -> usize {
    neighbors.iter().filter(|&&v| v).count()
}

/// Counts background-to-foreground steps walking the vector cyclically.
pub fn transition_count(neighbors: &[bool]) -> usize {
    let len = neighbors.len();
    (0..len)
        .filter(|&idx| !neighbors[idx] && neighbors[(idx + 1) % len])
        .count()
}

/// Compares two optional grids cell by cell.
///
/// Two absent grids are equal; an absent and a present grid are not.
pub fn grids_equal(a: Option<&PixelGrid>, b: Option<&PixelGrid>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => a.rows == b.rows && a.cols == b.cols && a.data == b.data,
        _ => false,
    }
}
