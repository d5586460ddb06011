//! Core types for Hough line detection.
//!
//! This crate only holds the collaborators of the transform: a row-major
//! 8-bit gray image, a line segment in pixel coordinates and logger setup.
//! It does not depend on any concrete image decoding library.

mod geometry;
mod image;
mod logger;

pub use geometry::LineSegment;
pub use image::{GrayImage, GrayImageView, ImageBufferError};

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::{init_with_level, LOG_ENV};
