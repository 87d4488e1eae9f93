//! Geometric matching of two minutiae sets.
//!
//! The matcher tries every pairing of a reference minutia with a probe
//! minutia. Each pairing fixes a pivot, a translation and a small window of
//! rotations around the orientation difference of the pair; the probe set is
//! moved accordingly and the coinciding minutiae are counted. Two sets match
//! as soon as one candidate reaches the configured overlap.

mod overlap;
mod search;
pub mod transform;

pub use overlap::{coincides, overlap_count};
pub use transform::{rotate, transform, transform_all, translate};

use crate::minutiae::Minutia;
use crate::trace::{trace_event, trace_span};
use crate::util::{RidgeMatchError, RidgeMatchResult};

/// Matching thresholds and search options.
#[derive(Clone, Debug)]
pub struct MatchConfig {
    /// Maximum Euclidean distance, in pixels, between coinciding minutiae.
    pub distance_threshold: u32,
    /// Maximum orientation difference, in degrees, between coinciding minutiae.
    pub orientation_threshold: u32,
    /// Number of coinciding minutiae needed to accept a match.
    pub found_threshold: usize,
    /// Rotations tried on each side of a pair's orientation difference.
    pub angle_offset: u32,
    /// Also search with the roles of the two sets swapped.
    pub bidirectional: bool,
    /// Evaluate candidates with rayon (requires the `rayon` feature).
    pub parallel: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            distance_threshold: 5,
            orientation_threshold: 20,
            found_threshold: 20,
            angle_offset: 2,
            bidirectional: true,
            parallel: false,
        }
    }
}

impl MatchConfig {
    /// Checks that the thresholds describe a meaningful search.
    pub fn validate(&self) -> RidgeMatchResult<()> {
        if self.found_threshold == 0 {
            return Err(RidgeMatchError::InvalidConfig {
                reason: "found_threshold must be at least 1",
            });
        }
        if self.angle_offset >= 180 {
            return Err(RidgeMatchError::InvalidConfig {
                reason: "angle_offset must be below 180",
            });
        }
        Ok(())
    }
}

/// Which set served as the reference for an accepted alignment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// The first argument was the reference.
    Forward,
    /// The second argument was the reference.
    Reverse,
}

/// An accepted candidate: how the probe set was moved onto the reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Alignment {
    /// Reference minutia used as pivot and rotation center.
    pub pivot: Minutia,
    /// Probe minutia paired with the pivot.
    pub paired: Minutia,
    /// Row shift subtracted after rotation.
    pub row_delta: i32,
    /// Column shift subtracted after rotation.
    pub col_delta: i32,
    /// Rotation applied to the probe set, in degrees.
    pub rotation_deg: i32,
    /// Number of reference minutiae that found a partner.
    pub overlap: usize,
    /// Which argument acted as the reference.
    pub direction: Direction,
}

/// Binary same-finger decision over two minutiae sets.
#[derive(Clone, Debug, Default)]
pub struct Matcher {
    cfg: MatchConfig,
}

impl Matcher {
    /// Creates a matcher after validating `cfg`.
    pub fn new(cfg: MatchConfig) -> RidgeMatchResult<Self> {
        cfg.validate()?;
        Ok(Self { cfg })
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &MatchConfig {
        &self.cfg
    }

    /// Returns true if some rigid alignment of the sets reaches the overlap
    /// threshold.
    pub fn matches(&self, a: &[Minutia], b: &[Minutia]) -> bool {
        self.find_alignment(a, b).is_some()
    }

    /// Returns an accepting alignment, if any.
    ///
    /// With `parallel` enabled the returned alignment is whichever worker
    /// finished first; it always satisfies the threshold, and `None` is only
    /// returned once every candidate has been rejected.
    pub fn find_alignment(&self, a: &[Minutia], b: &[Minutia]) -> Option<Alignment> {
        let _span = trace_span!(
            "match_search",
            left = a.len(),
            right = b.len(),
            bidirectional = self.cfg.bidirectional
        )
        .entered();

        let mut found = self.search(a, b, Direction::Forward);
        if found.is_none() && self.cfg.bidirectional {
            found = self.search(b, a, Direction::Reverse);
        }

        trace_event!(
            "match_verdict",
            matched = found.is_some(),
            overlap = found.map_or(0, |al| al.overlap)
        );
        found
    }

    fn search(
        &self,
        reference: &[Minutia],
        probe: &[Minutia],
        direction: Direction,
    ) -> Option<Alignment> {
        // Overlap counts reference minutiae, so a short reference never passes.
        if reference.len() < self.cfg.found_threshold || probe.is_empty() {
            return None;
        }

        #[cfg(feature = "rayon")]
        if self.cfg.parallel {
            return search::search_par(reference, probe, &self.cfg, direction);
        }

        search::search_seq(reference, probe, &self.cfg, direction)
    }
}

/// Compares two minutiae sets with the default thresholds.
pub fn matches(a: &[Minutia], b: &[Minutia]) -> bool {
    Matcher::default().matches(a, b)
}
