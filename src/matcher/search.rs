//! Exhaustive pivot and rotation search.
//!
//! The candidate space is the product of reference minutiae, probe minutiae
//! and the rotation window of each pair. Candidates are independent, so the
//! rayon variant evaluates them with short-circuiting `find_map_any`.

use std::ops::RangeInclusive;

use crate::matcher::overlap::overlap_count;
use crate::matcher::transform::transform_all;
use crate::matcher::{Alignment, Direction, MatchConfig};
use crate::minutiae::Minutia;
use crate::trace::trace_debug;
#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Rotations tried for a pair: the orientation difference +/- `offset`.
fn rotation_window(pivot: &Minutia, paired: &Minutia, offset: u32) -> RangeInclusive<i32> {
    let base = paired.orientation - pivot.orientation;
    let offset = offset as i32;
    (base - offset)..=(base + offset)
}

/// Moves `probe` by the candidate and scores it against `reference`.
fn evaluate(
    reference: &[Minutia],
    probe: &[Minutia],
    pivot: &Minutia,
    paired: &Minutia,
    rotation_deg: i32,
    cfg: &MatchConfig,
    direction: Direction,
) -> Option<Alignment> {
    let row_delta = paired.row - pivot.row;
    let col_delta = paired.col - pivot.col;
    let moved = transform_all(probe, pivot.row, pivot.col, row_delta, col_delta, rotation_deg);
    let overlap = overlap_count(
        reference,
        &moved,
        cfg.distance_threshold,
        cfg.orientation_threshold,
    );
    if overlap < cfg.found_threshold {
        return None;
    }

    Some(Alignment {
        pivot: *pivot,
        paired: *paired,
        row_delta,
        col_delta,
        rotation_deg,
        overlap,
        direction,
    })
}

/// Scans candidates in order and returns the first accepted one.
pub(crate) fn search_seq(
    reference: &[Minutia],
    probe: &[Minutia],
    cfg: &MatchConfig,
    direction: Direction,
) -> Option<Alignment> {
    for pivot in reference {
        for paired in probe {
            for rotation_deg in rotation_window(pivot, paired, cfg.angle_offset) {
                if let Some(found) =
                    evaluate(reference, probe, pivot, paired, rotation_deg, cfg, direction)
                {
                    trace_debug!(
                        "alignment_found",
                        rotation = found.rotation_deg,
                        overlap = found.overlap
                    );
                    return Some(found);
                }
            }
        }
    }
    None
}

/// Evaluates candidates in parallel; the first accepted one wins and the
/// remaining work is abandoned.
#[cfg(feature = "rayon")]
pub(crate) fn search_par(
    reference: &[Minutia],
    probe: &[Minutia],
    cfg: &MatchConfig,
    direction: Direction,
) -> Option<Alignment> {
    reference.par_iter().find_map_any(|pivot| {
        probe.par_iter().find_map_any(|paired| {
            rotation_window(pivot, paired, cfg.angle_offset)
                .into_par_iter()
                .find_map_any(|rotation_deg| {
                    evaluate(reference, probe, pivot, paired, rotation_deg, cfg, direction)
                })
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_window_is_inclusive() {
        let pivot = Minutia::new(0, 0, 10);
        let paired = Minutia::new(0, 0, 40);
        let window: Vec<_> = rotation_window(&pivot, &paired, 2).collect();
        assert_eq!(window, vec![28, 29, 30, 31, 32]);
    }

    #[test]
    fn rotation_window_may_be_negative() {
        let pivot = Minutia::new(0, 0, 300);
        let paired = Minutia::new(0, 0, 10);
        assert_eq!(rotation_window(&pivot, &paired, 0), -290..=-290);
    }

    #[test]
    fn translation_only_candidate_is_found() {
        let reference: Vec<_> = (0..4).map(|i| Minutia::new(i * 20, i * 11, 45)).collect();
        let probe: Vec<_> = reference
            .iter()
            .map(|m| Minutia::new(m.row + 7, m.col - 3, m.orientation))
            .collect();
        let cfg = MatchConfig {
            found_threshold: 4,
            angle_offset: 0,
            ..MatchConfig::default()
        };
        let found = search_seq(&reference, &probe, &cfg, Direction::Forward).unwrap();
        assert_eq!((found.row_delta, found.col_delta), (7, -3));
        assert_eq!(found.rotation_deg, 0);
        assert_eq!(found.overlap, 4);
    }
}
