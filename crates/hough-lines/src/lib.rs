//! High-level facade for the `hough-lines-*` workspace.
//!
//! This crate provides:
//! - stable re-exports of the core types and the transform
//! - (feature `image`) helpers that run the detector on an `image::GrayImage`
//!   or a raw 8-bit buffer and export the vote visualization
//! - (feature `cli`) the `hough-lines` command line tool
//!
//! ## Quickstart
//!
//! ```no_run
//! use hough_lines::detect;
//! use hough_lines::HoughParams;
//! use image::ImageReader;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let edges = ImageReader::open("edges.png")?.decode()?.to_luma8();
//! let space = detect::detect_lines(&edges, HoughParams::default())?;
//! for line in space.strongest(5) {
//!     println!("{:?} -> {:?}", line.descriptor, line.segment);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! The input is expected to be an edge map already (Canny, Sobel magnitude
//! threshold, ...); this workspace does not detect edges.
//!
//! ## API map
//! - `hough_lines::core`: gray image containers, line segments, logger.
//! - `hough_lines::transform`: accumulator, voting, maxima, reconstruction.
//! - `hough_lines::detect` (feature `image`): end-to-end helpers from `image::GrayImage`.

pub use hough_lines_core as core;
pub use hough_lines_transform as transform;

pub use hough_lines_core::{GrayImage, GrayImageView, LineSegment};
pub use hough_lines_transform::{
    DetectedLine, ForegroundPolarity, HoughError, HoughLineDetector, HoughParams, HoughReport,
    HoughSpace, LineDescriptor,
};

#[cfg(feature = "image")]
pub mod detect;
