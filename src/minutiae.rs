//! Ridge endings and bifurcations on a thinned grid.

use crate::grid::{neighbors, transition_count, PixelGrid};
use crate::orientation::orientation_unchecked;
use crate::trace::{trace_event, trace_span};

/// Default half-width of the regression window used for orientation.
pub const DEFAULT_ORIENTATION_DISTANCE: usize = 16;

/// Topological class of a minutia.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MinutiaKind {
    /// One transition around the pixel: a ridge stops here.
    Ending,
    /// Three transitions around the pixel: a ridge splits here.
    Bifurcation,
}

impl MinutiaKind {
    /// Classifies a transition count, `None` for ordinary ridge pixels.
    pub fn from_transitions(transitions: usize) -> Option<Self> {
        match transitions {
            1 => Some(MinutiaKind::Ending),
            3 => Some(MinutiaKind::Bifurcation),
            _ => None,
        }
    }
}

/// A feature point with its local ridge orientation.
///
/// Coordinates are signed because rigid transforms may move a minutia off
/// the image. `orientation` is in whole degrees, `[0, 360)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Minutia {
    /// Row (y, growing downward).
    pub row: i32,
    /// Column (x, growing right).
    pub col: i32,
    /// Ridge direction in degrees, counter-clockwise from the +x axis.
    pub orientation: i32,
    /// Ending or bifurcation. Ignored by matching.
    pub kind: MinutiaKind,
}

impl Minutia {
    /// Creates a ridge-ending minutia.
    pub fn new(row: i32, col: i32, orientation: i32) -> Self {
        Self {
            row,
            col,
            orientation,
            kind: MinutiaKind::Ending,
        }
    }

    /// Returns a copy with a different kind.
    pub fn with_kind(mut self, kind: MinutiaKind) -> Self {
        self.kind = kind;
        self
    }
}

/// Extraction settings.
#[derive(Clone, Debug)]
pub struct ExtractConfig {
    /// Half-width of the window grown around each minutia for orientation.
    pub orientation_distance: usize,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            orientation_distance: DEFAULT_ORIENTATION_DISTANCE,
        }
    }
}

/// Extracts minutiae from a skeleton with the default configuration.
pub fn extract(skeleton: &PixelGrid) -> Vec<Minutia> {
    extract_with(skeleton, &ExtractConfig::default())
}

/// Extracts minutiae from a skeleton.
///
/// Only interior pixels are scanned, in row-major order, so the output order
/// is deterministic. Grids that were not thinned are accepted but tend to
/// yield spurious points along thick ridges.
pub fn extract_with(skeleton: &PixelGrid, cfg: &ExtractConfig) -> Vec<Minutia> {
    let _span = trace_span!(
        "extract",
        rows = skeleton.rows(),
        cols = skeleton.cols(),
        distance = cfg.orientation_distance
    )
    .entered();

    let mut out = Vec::new();
    let (rows, cols) = (skeleton.rows(), skeleton.cols());
    if rows < 3 || cols < 3 {
        return out;
    }

    for row in 1..rows - 1 {
        for col in 1..cols - 1 {
            if !skeleton.at(row, col) {
                continue;
            }
            let Some(n) = neighbors(skeleton, row, col) else {
                continue;
            };
            let Some(kind) = MinutiaKind::from_transitions(transition_count(&n)) else {
                continue;
            };
            let orientation = orientation_unchecked(skeleton, row, col, cfg.orientation_distance);
            out.push(Minutia {
                row: row as i32,
                col: col as i32,
                orientation,
                kind,
            });
        }
    }

    trace_event!("extract_done", minutiae = out.len());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_from_transitions() {
        assert_eq!(MinutiaKind::from_transitions(1), Some(MinutiaKind::Ending));
        assert_eq!(
            MinutiaKind::from_transitions(3),
            Some(MinutiaKind::Bifurcation)
        );
        assert_eq!(MinutiaKind::from_transitions(2), None);
        assert_eq!(MinutiaKind::from_transitions(0), None);
    }

    #[test]
    fn border_pixels_are_never_minutiae() {
        // A lone stroke along the top row has endings only on the border.
        let grid = PixelGrid::from_rows(&[
            [true, true, true, true],
            [false, false, false, false],
            [false, false, false, false],
        ])
        .unwrap();
        assert!(extract(&grid).is_empty());
    }

    #[test]
    fn tiny_grids_yield_nothing() {
        let grid = PixelGrid::from_rows(&[[true, true], [true, true]]).unwrap();
        assert!(extract(&grid).is_empty());
    }

    #[test]
    fn bifurcation_is_classified() {
        // A "Y": the junction pixel has three separate arms.
        let grid = PixelGrid::from_rows(&[
            [false, false, false, false, false],
            [false, true, false, true, false],
            [false, false, true, false, false],
            [false, false, true, false, false],
            [false, false, false, false, false],
        ])
        .unwrap();
        let found = extract(&grid);
        let junction = found
            .iter()
            .find(|m| (m.row, m.col) == (2, 2))
            .expect("junction detected");
        assert_eq!(junction.kind, MinutiaKind::Bifurcation);
    }
}
