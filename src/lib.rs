//! RidgeMatch compares fingerprint impressions by their minutiae.
//!
//! The pipeline runs on binary pixel grids: [`thin`] reduces ridges to a
//! one-pixel skeleton, [`extract`] finds ridge endings and bifurcations with
//! their local orientation, and [`matches`] searches for a rigid alignment
//! under which enough minutiae of two impressions coincide. Decoding images
//! into grids is available behind the `image-io` feature; the pivot search
//! can run in parallel with the `rayon` feature.

pub mod grid;
pub mod matcher;
pub mod minutiae;
pub mod orientation;
pub mod region;
pub mod skeleton;
mod trace;
pub mod util;

pub use grid::{black_count, grids_equal, neighbors, transition_count, Neighbors, PixelGrid};
pub use matcher::{matches, Alignment, Direction, MatchConfig, Matcher};
pub use minutiae::{extract, extract_with, ExtractConfig, Minutia, MinutiaKind};
pub use orientation::orientation_degrees;
pub use region::{bounded_copy, connected_region};
pub use skeleton::{thin, thinning_step, ThinningStep};
pub use util::{RidgeMatchError, RidgeMatchResult};

#[cfg(feature = "image-io")]
pub use grid::io;
