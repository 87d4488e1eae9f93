//! Two-pass parallel thinning down to a one-pixel-wide ridge skeleton.
//!
//! Each pass applies [`ThinningStep::First`] and then [`ThinningStep::Second`]
//! to a snapshot of the grid. A sub-step decides every pixel from the previous
//! snapshot only, so the visiting order does not matter. Thinning stops when a
//! full pass leaves the grid unchanged.

use crate::grid::{
    black_count, grids_equal, neighbors, transition_count, PixelGrid, EAST, NORTH, SOUTH, WEST,
};
use crate::trace::{trace_debug, trace_event, trace_span};

/// One of the two alternating thinning sub-steps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThinningStep {
    /// Erodes pixels whose east and south neighbors are set and that touch
    /// the north or west side.
    First,
    /// Erodes pixels whose north and west neighbors are set and that touch
    /// the east or south side.
    Second,
}

impl ThinningStep {
    fn deletes(self, n: &[bool; 8]) -> bool {
        match self {
            ThinningStep::First => n[EAST] && n[SOUTH] && (n[NORTH] || n[WEST]),
            ThinningStep::Second => n[NORTH] && n[WEST] && (n[EAST] || n[SOUTH]),
        }
    }
}

/// Thins `grid` until a full two-step pass is a fixed point.
///
/// The input must be rectangular, which `PixelGrid` guarantees.
pub fn thin(grid: &PixelGrid) -> PixelGrid {
    let _span = trace_span!("thin", rows = grid.rows(), cols = grid.cols()).entered();

    let mut current = grid.clone();
    let mut iterations = 0usize;
    loop {
        let next = thinning_step(
            &thinning_step(&current, ThinningStep::First),
            ThinningStep::Second,
        );
        iterations += 1;
        trace_debug!(
            "thin_pass",
            iteration = iterations,
            foreground = next.count_foreground()
        );
        if grids_equal(Some(&current), Some(&next)) {
            break;
        }
        current = next;
    }

    trace_event!("thin_done", iterations = iterations);
    current
}

/// Applies a single sub-step and returns the new snapshot.
///
/// Background pixels never change. A foreground pixel is only a deletion
/// candidate when it has between 2 and 6 foreground neighbors and exactly one
/// background-to-foreground transition around it.
pub fn thinning_step(grid: &PixelGrid, step: ThinningStep) -> PixelGrid {
    let mut out = PixelGrid::new(grid.rows(), grid.cols());
    for (row, col) in grid.foreground() {
        out.put(row, col, survives(grid, row, col, step));
    }
    out
}

fn survives(grid: &PixelGrid, row: usize, col: usize, step: ThinningStep) -> bool {
    let Some(n) = neighbors(grid, row, col) else {
        return true;
    };
    let black = black_count(&n);
    if black <= 1 || black >= 7 || transition_count(&n) != 1 {
        return true;
    }
    !step.deletes(&n)
}
