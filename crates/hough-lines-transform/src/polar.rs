//! The single `(theta, rho)` convention shared by voting and reconstruction.
//!
//! Origin is the image center `(width / 2, height / 2)` (integer division,
//! so recentered pixel coordinates stay integral). A pixel `(x, y)` lies on
//! the line `(theta, rho)` when
//!
//! ```text
//! (x - cx)·cos(theta) + (y - cy)·sin(theta) = rho
//! ```
//!
//! with `theta` in [0, π) and signed `rho` in `[-rho_max, rho_max]`, where
//! `rho_max = ceil(hypot(width, height) / 2)`. Distance buckets are one pixel
//! wide: bucket `j` holds `rho = j - rho_max`.

use nalgebra::Point2;
use serde::{Deserialize, Serialize};

use crate::HoughError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolarFrame {
    pub width: usize,
    pub height: usize,
    /// Half-extent of the distance axis in buckets.
    pub rho_max: usize,
}

impl PolarFrame {
    pub fn new(width: usize, height: usize) -> Result<Self, HoughError> {
        if width == 0 || height == 0 {
            return Err(HoughError::EmptyImage { width, height });
        }
        let half_diag = 0.5 * (width as f64).hypot(height as f64);
        Ok(Self {
            width,
            height,
            rho_max: half_diag.ceil() as usize,
        })
    }

    #[inline]
    pub fn center(&self) -> Point2<f32> {
        Point2::new((self.width / 2) as f32, (self.height / 2) as f32)
    }

    #[inline]
    pub fn rho_bins(&self) -> usize {
        2 * self.rho_max + 1
    }

    /// Signed distance of pixel `(x, y)` for an angle with the given `cos`/`sin`.
    #[inline]
    pub fn rho(&self, x: usize, y: usize, cos_t: f32, sin_t: f32) -> f32 {
        let dx = x as f32 - (self.width / 2) as f32;
        let dy = y as f32 - (self.height / 2) as f32;
        dx * cos_t + dy * sin_t
    }

    /// Bucket index of `rho`, rounded to the nearest integer distance.
    ///
    /// Values past either end of the axis (float overshoot) are clamped to
    /// the first or last bucket. NaN maps to the center bucket.
    #[inline]
    pub fn rho_to_bin(&self, rho: f32) -> usize {
        if rho.is_nan() {
            return self.rho_max;
        }
        let idx = rho.round() as i64 + self.rho_max as i64;
        idx.clamp(0, 2 * self.rho_max as i64) as usize
    }

    #[inline]
    pub fn bin_to_rho(&self, bin: usize) -> f32 {
        bin as f32 - self.rho_max as f32
    }
}

/// Angle of sample `index` on a half-turn split into `theta_bins` samples.
///
/// Computed from the index directly rather than by accumulating a step.
#[inline]
pub fn theta_of(index: usize, theta_bins: usize) -> f64 {
    index as f64 * std::f64::consts::PI / theta_bins as f64
}

/// `(cos, sin)` for every angle sample, computed once per transform call.
#[derive(Clone, Debug)]
pub struct AngleTable {
    cos_sin: Vec<(f32, f32)>,
}

impl AngleTable {
    pub fn new(theta_bins: usize) -> Self {
        let cos_sin = (0..theta_bins)
            .map(|i| {
                let (s, c) = theta_of(i, theta_bins).sin_cos();
                (c as f32, s as f32)
            })
            .collect();
        Self { cos_sin }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cos_sin.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cos_sin.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[(f32, f32)] {
        &self.cos_sin
    }
}
