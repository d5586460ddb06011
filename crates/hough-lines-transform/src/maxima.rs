use log::debug;
use serde::{Deserialize, Serialize};

use crate::HoughSpace;

#[cfg(feature = "tracing")]
use tracing::instrument;

/// One accumulator cell reported as a line.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineDescriptor {
    pub theta_index: usize,
    pub rho_bin: usize,
    /// Angle of the line normal in radians, in [0, π).
    pub theta: f32,
    /// Signed distance from the image center in pixels.
    pub rho: f32,
    pub votes: u32,
}

/// Attach every cell with at least `threshold` votes to `space.maxima`.
///
/// Lines reconstructed from a previous threshold are discarded.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "debug", skip(space), fields(max_votes = space.accumulator.max_votes()))
)]
pub fn detect_maxima(mut space: HoughSpace, threshold: u32) -> HoughSpace {
    space.maxima = space.accumulator.query_maxima(threshold);
    space.lines.clear();
    debug!(
        "{} cells with >= {threshold} votes (max {})",
        space.maxima.len(),
        space.accumulator.max_votes()
    );
    space
}
