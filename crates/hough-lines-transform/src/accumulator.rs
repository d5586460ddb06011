use crate::maxima::LineDescriptor;
use crate::polar::{theta_of, PolarFrame};
use crate::params::check_theta_bins;
use crate::HoughError;

/// Dense vote table over `(theta_index, rho_bin)`.
///
/// Storage is row-major by angle: `votes[theta_index * rho_bins + rho_bin]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Accumulator {
    frame: PolarFrame,
    theta_bins: usize,
    rho_bins: usize,
    votes: Vec<u32>,
}

impl Accumulator {
    /// Zeroed accumulator sized for `frame` with `theta_bins` angle samples.
    pub fn new(frame: PolarFrame, theta_bins: usize) -> Result<Self, HoughError> {
        check_theta_bins(theta_bins)?;
        let rho_bins = frame.rho_bins();
        let cells = theta_bins
            .checked_mul(rho_bins)
            .filter(|&n| n <= isize::MAX as usize / std::mem::size_of::<u32>())
            .ok_or(HoughError::AccumulatorTooLarge {
                theta_bins,
                rho_bins,
            })?;
        Ok(Self {
            frame,
            theta_bins,
            rho_bins,
            votes: vec![0; cells],
        })
    }

    #[inline]
    pub fn frame(&self) -> &PolarFrame {
        &self.frame
    }

    #[inline]
    pub fn theta_bins(&self) -> usize {
        self.theta_bins
    }

    #[inline]
    pub fn rho_bins(&self) -> usize {
        self.rho_bins
    }

    /// Raw counts, row-major by angle.
    #[inline]
    pub fn votes(&self) -> &[u32] {
        &self.votes
    }

    /// Add one vote for `rho` at angle `theta_index`.
    ///
    /// `rho` is rounded to the nearest bucket and clamped to the axis, so a
    /// vote is never lost to float overshoot. Returns the bucket that
    /// received the vote, or `None` if `theta_index` is outside the angle
    /// axis.
    #[inline]
    pub fn increment(&mut self, rho: f32, theta_index: usize) -> Option<usize> {
        debug_assert!(theta_index < self.theta_bins, "theta index out of range");
        if theta_index >= self.theta_bins {
            return None;
        }
        let bin = self.frame.rho_to_bin(rho);
        let cell = &mut self.votes[theta_index * self.rho_bins + bin];
        *cell = cell.saturating_add(1);
        Some(bin)
    }

    /// Vote count of one cell; zero outside the table.
    #[inline]
    pub fn get(&self, theta_index: usize, rho_bin: usize) -> u32 {
        if theta_index >= self.theta_bins || rho_bin >= self.rho_bins {
            return 0;
        }
        self.votes[theta_index * self.rho_bins + rho_bin]
    }

    pub fn total_votes(&self) -> u64 {
        self.votes.iter().map(|&v| u64::from(v)).sum()
    }

    pub fn max_votes(&self) -> u32 {
        self.votes.iter().copied().max().unwrap_or(0)
    }

    /// Every non-empty cell with at least `threshold` votes.
    ///
    /// Sorted by descending votes, then ascending `(theta_index, rho_bin)`,
    /// so the order only depends on the counts. Neighbouring cells of the
    /// same physical line are all reported.
    pub fn query_maxima(&self, threshold: u32) -> Vec<LineDescriptor> {
        let mut out: Vec<LineDescriptor> = self
            .votes
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v > 0 && v >= threshold)
            .map(|(idx, &votes)| {
                let theta_index = idx / self.rho_bins;
                let rho_bin = idx % self.rho_bins;
                LineDescriptor {
                    theta_index,
                    rho_bin,
                    theta: theta_of(theta_index, self.theta_bins) as f32,
                    rho: self.frame.bin_to_rho(rho_bin),
                    votes,
                }
            })
            .collect();

        // enumerate() already yields ascending (theta_index, rho_bin); stable sort keeps it.
        out.sort_by(|a, b| b.votes.cmp(&a.votes));
        out
    }

    /// Element-wise sum of `other` into `self`.
    ///
    /// Both tables must have the same shape and come from the same image
    /// frame; equal `rho_max` alone is not enough (10x30 and 30x10 share it).
    pub fn merge(&mut self, other: &Accumulator) -> Result<(), HoughError> {
        if self.theta_bins != other.theta_bins || self.rho_bins != other.rho_bins {
            return Err(HoughError::ShapeMismatch {
                left_theta: self.theta_bins,
                left_rho: self.rho_bins,
                right_theta: other.theta_bins,
                right_rho: other.rho_bins,
            });
        }
        if self.frame != other.frame {
            return Err(HoughError::FrameMismatch {
                left_width: self.frame.width,
                left_height: self.frame.height,
                right_width: other.frame.width,
                right_height: other.frame.height,
            });
        }
        for (dst, &src) in self.votes.iter_mut().zip(&other.votes) {
            *dst = dst.saturating_add(src);
        }
        Ok(())
    }
}
