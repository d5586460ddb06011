use hough_lines_core::{GrayImage, LineSegment};
use serde::{Deserialize, Serialize};

use crate::accumulator::Accumulator;
use crate::maxima::LineDescriptor;

/// Result of one transform call.
///
/// Owns the vote table and its visualization. `maxima` is filled by
/// [`crate::detect_maxima`] and `lines` by [`crate::reconstruct`].
#[derive(Clone, Debug)]
pub struct HoughSpace {
    pub accumulator: Accumulator,
    /// `theta_bins` wide, `rho_bins` tall; darker means more votes.
    pub visualization: GrayImage,
    /// Number of pixels that passed the foreground predicate.
    pub foreground_pixels: usize,
    pub maxima: Vec<LineDescriptor>,
    pub lines: Vec<LineSegment>,
}

/// A reported line: its accumulator cell and image-space segment.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DetectedLine {
    pub descriptor: LineDescriptor,
    pub segment: LineSegment,
}

/// Serializable summary of a [`HoughSpace`], without the vote table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HoughReport {
    pub image_width: usize,
    pub image_height: usize,
    pub theta_bins: usize,
    pub rho_bins: usize,
    pub rho_max: usize,
    pub foreground_pixels: usize,
    pub total_votes: u64,
    pub max_votes: u32,
    pub lines: Vec<DetectedLine>,
}

impl HoughSpace {
    /// Up to `k` strongest lines, paired with their segments.
    ///
    /// Pairs only exist once [`crate::reconstruct`] has run.
    pub fn strongest(&self, k: usize) -> impl Iterator<Item = DetectedLine> + '_ {
        self.maxima
            .iter()
            .zip(&self.lines)
            .take(k)
            .map(|(descriptor, segment)| DetectedLine {
                descriptor: *descriptor,
                segment: *segment,
            })
    }

    pub fn report(&self) -> HoughReport {
        self.report_top(usize::MAX)
    }

    /// Like [`Self::report`] but keeps only the `k` strongest lines.
    pub fn report_top(&self, k: usize) -> HoughReport {
        let frame = self.accumulator.frame();
        HoughReport {
            image_width: frame.width,
            image_height: frame.height,
            theta_bins: self.accumulator.theta_bins(),
            rho_bins: self.accumulator.rho_bins(),
            rho_max: frame.rho_max,
            foreground_pixels: self.foreground_pixels,
            total_votes: self.accumulator.total_votes(),
            max_votes: self.accumulator.max_votes(),
            lines: self.strongest(k).collect(),
        }
    }
}
