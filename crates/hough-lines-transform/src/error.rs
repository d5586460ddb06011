use hough_lines_core::ImageBufferError;

/// Errors returned by the Hough transform.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum HoughError {
    #[error("image has zero size (width={width}, height={height})")]
    EmptyImage { width: usize, height: usize },
    #[error(transparent)]
    InvalidBuffer(#[from] ImageBufferError),
    #[error("theta axis needs at least one sample")]
    InvalidThetaBins,
    #[error("theta axis has {theta_bins} samples, at most {max} are supported")]
    ThetaBinsTooLarge { theta_bins: usize, max: usize },
    #[error("accumulator of {theta_bins}x{rho_bins} cells does not fit in memory")]
    AccumulatorTooLarge { theta_bins: usize, rho_bins: usize },
    #[error("accumulator shapes differ ({left_theta}x{left_rho} vs {right_theta}x{right_rho})")]
    ShapeMismatch {
        left_theta: usize,
        left_rho: usize,
        right_theta: usize,
        right_rho: usize,
    },
    #[error("accumulators belong to different images ({left_width}x{left_height} vs {right_width}x{right_height})")]
    FrameMismatch {
        left_width: usize,
        left_height: usize,
        right_width: usize,
        right_height: usize,
    },
}
