//! Straight line detection with the Hough transform.
//!
//! ## Quickstart
//!
//! ```
//! use hough_lines_core::GrayImage;
//! use hough_lines_transform::{HoughLineDetector, HoughParams};
//!
//! let mut img = GrayImage::filled(100, 100, 0);
//! for x in 0..100 {
//!     img.set(x, 50, 255);
//! }
//!
//! let detector = HoughLineDetector::new(HoughParams::default());
//! let space = detector.detect(&img.view()).unwrap();
//! let best = space.strongest(1).next().unwrap();
//! assert_eq!(best.descriptor.votes, 100);
//! ```
//!
//! Pipeline:
//! 1. [`vote`]: every foreground pixel votes, for each of `theta_bins`
//!    angles in [0, π), for the distance bucket of the line through it.
//!    Distances are measured from the image center (see [`PolarFrame`]).
//! 2. [`detect_maxima`]: every cell with at least `vote_threshold` votes
//!    becomes a [`LineDescriptor`]. Adjacent cells of the same physical line
//!    are not suppressed; cluster them on the caller side if needed.
//! 3. [`reconstruct`]: each descriptor becomes a [`LineSegment`] spanning
//!    the image, using the same [`PolarFrame`] as the voter.
//!
//! Features:
//! - `parallel`: split the voting pass across rayon workers.
//! - `tracing`: instrument the pipeline stages.

mod accumulator;
mod detector;
mod error;
mod maxima;
mod params;
mod polar;
mod reconstruct;
mod space;
mod vote;

pub use accumulator::Accumulator;
pub use detector::HoughLineDetector;
pub use error::HoughError;
pub use maxima::{detect_maxima, LineDescriptor};
pub use params::{ForegroundPolarity, HoughParams, MAX_THETA_BINS};
pub use polar::{theta_of, AngleTable, PolarFrame};
pub use reconstruct::{line_from_polar, reconstruct};
pub use space::{DetectedLine, HoughReport, HoughSpace};
pub use vote::{render_visualization, vote};

pub use hough_lines_core::{GrayImage, GrayImageView, LineSegment};
