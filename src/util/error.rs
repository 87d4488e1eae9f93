//! Error types for ridgematch.

use thiserror::Error;

/// Result alias for ridgematch operations.
pub type RidgeMatchResult<T> = std::result::Result<T, RidgeMatchError>;

/// Errors that can occur when running ridgematch algorithms.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RidgeMatchError {
    /// A grid or window was requested with a zero extent.
    #[error("invalid dimensions: {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },
    /// A row-of-rows input did not have a constant row length.
    #[error("ragged rows: row {row} has {got} columns, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        got: usize,
    },
    /// A flat buffer did not match the declared grid extent.
    #[error("buffer size mismatch: needed {needed}, got {got}")]
    BufferSizeMismatch { needed: usize, got: usize },
    /// A pixel coordinate lies outside the grid.
    #[error("pixel ({row}, {col}) is outside a {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    /// A configuration value is unusable.
    #[error("invalid config: {reason}")]
    InvalidConfig { reason: &'static str },
    /// Image decoding failed (only with `image-io`).
    #[error("image io: {reason}")]
    ImageIo { reason: String },
}
