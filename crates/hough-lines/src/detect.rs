use crate::core::GrayImageView;
use crate::transform::{HoughError, HoughLineDetector, HoughParams, HoughSpace};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Errors produced by the high-level facade helpers.
#[derive(thiserror::Error, Debug)]
pub enum DetectError {
    #[error("invalid grayscale image buffer length (expected {expected} bytes, got {got})")]
    InvalidGrayBuffer { expected: usize, got: usize },

    #[error("invalid grayscale image dimensions (width={width}, height={height})")]
    InvalidGrayDimensions { width: u32, height: u32 },

    #[error(transparent)]
    Hough(#[from] HoughError),
}

/// Convert an `image::GrayImage` into the lightweight `hough-lines-core` view type.
pub fn gray_view(img: &::image::GrayImage) -> GrayImageView<'_> {
    GrayImageView {
        width: img.width() as usize,
        height: img.height() as usize,
        data: img.as_raw(),
    }
}

/// Run vote -> maxima -> reconstruction on an edge image.
#[cfg_attr(
    feature = "tracing",
    instrument(
        level = "info",
        skip(img, params),
        fields(width = img.width(), height = img.height())
    )
)]
pub fn detect_lines(
    img: &::image::GrayImage,
    params: HoughParams,
) -> Result<HoughSpace, DetectError> {
    if img.width() == 0 || img.height() == 0 {
        return Err(DetectError::InvalidGrayDimensions {
            width: img.width(),
            height: img.height(),
        });
    }
    let detector = HoughLineDetector::new(params);
    Ok(detector.detect(&gray_view(img))?)
}

/// Convenience overload using `HoughParams::default()`.
pub fn detect_lines_default(img: &::image::GrayImage) -> Result<HoughSpace, DetectError> {
    detect_lines(img, HoughParams::default())
}

/// Run the detector on a raw row-major 8-bit buffer.
pub fn detect_lines_from_gray_u8(
    width: u32,
    height: u32,
    data: &[u8],
    params: HoughParams,
) -> Result<HoughSpace, DetectError> {
    if width == 0 || height == 0 {
        return Err(DetectError::InvalidGrayDimensions { width, height });
    }
    let expected = (width as usize)
        .checked_mul(height as usize)
        .ok_or(DetectError::InvalidGrayDimensions { width, height })?;
    if data.len() != expected {
        return Err(DetectError::InvalidGrayBuffer {
            expected,
            got: data.len(),
        });
    }

    let view = GrayImageView {
        width: width as usize,
        height: height as usize,
        data,
    };
    Ok(HoughLineDetector::new(params).detect(&view)?)
}

/// The vote visualization as an `image::GrayImage` (theta across, rho down).
pub fn visualization_image(space: &HoughSpace) -> ::image::GrayImage {
    let vis = &space.visualization;
    ::image::GrayImage::from_fn(vis.width as u32, vis.height as u32, |x, y| {
        ::image::Luma([vis.get(x as usize, y as usize).unwrap_or(u8::MAX)])
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_image() -> ::image::GrayImage {
        ::image::GrayImage::from_fn(100, 100, |_, y| ::image::Luma([if y == 50 { 255 } else { 0 }]))
    }

    #[test]
    fn detects_row_from_image_crate_buffer() {
        let space = detect_lines_default(&row_image()).unwrap();
        let best = space.strongest(1).next().unwrap();
        assert_eq!(best.descriptor.theta_index, 90);
        assert_eq!(best.descriptor.votes, 100);
    }

    #[test]
    fn raw_buffer_length_is_checked() {
        let err = detect_lines_from_gray_u8(10, 10, &[0u8; 99], HoughParams::default())
            .unwrap_err();
        assert!(matches!(
            err,
            DetectError::InvalidGrayBuffer {
                expected: 100,
                got: 99
            }
        ));
        assert!(matches!(
            detect_lines_from_gray_u8(0, 10, &[], HoughParams::default()),
            Err(DetectError::InvalidGrayDimensions { .. })
        ));
    }

    #[test]
    fn visualization_image_has_accumulator_shape() {
        let space = detect_lines_default(&row_image()).unwrap();
        let vis = visualization_image(&space);
        assert_eq!(vis.width() as usize, space.accumulator.theta_bins());
        assert_eq!(vis.height() as usize, space.accumulator.rho_bins());
        let best = space.maxima[0];
        assert_eq!(
            vis.get_pixel(best.theta_index as u32, best.rho_bin as u32).0[0],
            0
        );
    }
}
