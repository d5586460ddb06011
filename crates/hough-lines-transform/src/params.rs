use serde::{Deserialize, Serialize};

use crate::HoughError;

/// Upper bound on [`HoughParams::theta_bins`] (a 0.003° angle step).
pub const MAX_THETA_BINS: usize = 1 << 16;

/// Which pixel values count as edge pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ForegroundPolarity {
    /// Value 255 (white edges on dark background, the usual edge-map output).
    #[default]
    White,
    /// Value 0.
    Black,
    /// Either 0 or 255; only meaningful for images with a mid-gray background.
    Saturated,
    /// Value greater or equal to the threshold.
    AtLeast(u8),
}

impl ForegroundPolarity {
    #[inline]
    pub fn is_foreground(self, value: u8) -> bool {
        match self {
            Self::White => value == u8::MAX,
            Self::Black => value == 0,
            Self::Saturated => value == 0 || value == u8::MAX,
            Self::AtLeast(t) => value >= t,
        }
    }
}

/// Configuration for [`crate::HoughLineDetector`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HoughParams {
    /// Number of angle samples over [0, π). Typical values are 180 or 360.
    pub theta_bins: usize,
    /// Minimal number of votes for a cell to be reported as a line.
    ///
    /// 30 is a heuristic tuned for edge maps of a few hundred pixels per
    /// side; long lines in large images usually want more.
    pub vote_threshold: u32,
    /// Edge pixel predicate used by [`crate::HoughLineDetector::detect`].
    pub foreground: ForegroundPolarity,
    /// Darkening applied to a visualization pixel per vote (saturates at black).
    pub visual_step: u8,
}

impl Default for HoughParams {
    fn default() -> Self {
        Self {
            theta_bins: 180,
            vote_threshold: 30,
            foreground: ForegroundPolarity::White,
            visual_step: 8,
        }
    }
}

impl HoughParams {
    pub fn validate(&self) -> Result<(), HoughError> {
        check_theta_bins(self.theta_bins)
    }
}

pub(crate) fn check_theta_bins(theta_bins: usize) -> Result<(), HoughError> {
    if theta_bins == 0 {
        return Err(HoughError::InvalidThetaBins);
    }
    if theta_bins > MAX_THETA_BINS {
        return Err(HoughError::ThetaBinsTooLarge {
            theta_bins,
            max: MAX_THETA_BINS,
        });
    }
    Ok(())
}
