//! Counting minutiae that coincide between two sets.

use crate::minutiae::Minutia;

/// Returns true if `a` and `b` lie within `max_distance` pixels and
/// `max_orientation_diff` degrees of each other (both inclusive).
///
/// Orientations are compared by plain absolute difference, without wrapping
/// around 360.
#[inline]
pub fn coincides(a: &Minutia, b: &Minutia, max_distance: u32, max_orientation_diff: u32) -> bool {
    let dr = i64::from(a.row - b.row);
    let dc = i64::from(a.col - b.col);
    let radius = i64::from(max_distance);
    dr * dr + dc * dc <= radius * radius
        && (a.orientation - b.orientation).unsigned_abs() <= max_orientation_diff
}

/// Counts minutiae of `reference` that coincide with at least one minutia of
/// `candidates`.
pub fn overlap_count(
    reference: &[Minutia],
    candidates: &[Minutia],
    max_distance: u32,
    max_orientation_diff: u32,
) -> usize {
    reference
        .iter()
        .filter(|a| {
            candidates
                .iter()
                .any(|b| coincides(a, b, max_distance, max_orientation_diff))
        })
        .count()
}
