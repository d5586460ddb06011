use std::f32::consts::FRAC_PI_4;

use hough_lines_core::LineSegment;
use nalgebra::Point2;

use crate::polar::PolarFrame;
use crate::HoughSpace;

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Map every descriptor in `space.maxima` to a segment in `space.lines`.
///
/// `lines[i]` corresponds to `maxima[i]`.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "debug", skip(space), fields(maxima = space.maxima.len()))
)]
pub fn reconstruct(mut space: HoughSpace) -> HoughSpace {
    let frame = *space.accumulator.frame();
    space.lines = space
        .maxima
        .iter()
        .map(|d| line_from_polar(&frame, d.theta, d.rho))
        .collect();
    space
}

/// Segment of the line `(theta, rho)` spanning the image.
///
/// Mostly horizontal lines (normal angle in (π/4, 3π/4)) run from column 0
/// to column `width - 1`; all others run from row 0 to row `height - 1`.
/// The divisor is `sin` or `cos` respectively, never below √2/2 in
/// magnitude. Endpoints may fall outside the image when the line only
/// crosses a corner.
///
/// In a one pixel wide (or tall) image the spanned range is a single column
/// (or row), so the segment collapses to the point where the line crosses
/// it: `p0 == p1`, still on the line.
pub fn line_from_polar(frame: &PolarFrame, theta: f32, rho: f32) -> LineSegment {
    let (sin_t, cos_t) = theta.sin_cos();
    let c = frame.center();

    if theta > FRAC_PI_4 && theta < 3.0 * FRAC_PI_4 {
        let y_at = |x: f32| c.y + (rho - (x - c.x) * cos_t) / sin_t;
        let x1 = frame.width.saturating_sub(1) as f32;
        LineSegment::new(Point2::new(0.0, y_at(0.0)), Point2::new(x1, y_at(x1)))
    } else {
        let x_at = |y: f32| c.x + (rho - (y - c.y) * sin_t) / cos_t;
        let y1 = frame.height.saturating_sub(1) as f32;
        LineSegment::new(Point2::new(x_at(0.0), 0.0), Point2::new(x_at(y1), y1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn horizontal_line_spans_all_columns() {
        let frame = PolarFrame::new(100, 100).unwrap();
        let seg = line_from_polar(&frame, FRAC_PI_2, 0.0);
        assert_abs_diff_eq!(seg.p0, Point2::new(0.0, 50.0), epsilon = 1e-3);
        assert_abs_diff_eq!(seg.p1, Point2::new(99.0, 50.0), epsilon = 1e-3);
    }

    #[test]
    fn vertical_line_spans_all_rows() {
        let frame = PolarFrame::new(80, 60).unwrap();
        // x - 40 = -15  =>  x = 25
        let seg = line_from_polar(&frame, 0.0, -15.0);
        assert_abs_diff_eq!(seg.p0, Point2::new(25.0, 0.0), epsilon = 1e-4);
        assert_abs_diff_eq!(seg.p1, Point2::new(25.0, 59.0), epsilon = 1e-4);
    }

    #[test]
    fn diagonal_endpoints_satisfy_line_equation() {
        let frame = PolarFrame::new(64, 48).unwrap();
        let c = frame.center();
        for &(theta, rho) in &[(0.3f32, 5.0f32), (1.2, -7.0), (2.0, 11.0), (2.9, -3.0)] {
            let seg = line_from_polar(&frame, theta, rho);
            for p in [seg.p0, seg.p1] {
                let r = (p.x - c.x) * theta.cos() + (p.y - c.y) * theta.sin();
                assert_abs_diff_eq!(r, rho, epsilon = 1e-3);
            }
        }
    }

    #[test]
    fn single_column_image_collapses_to_crossing_point() {
        let frame = PolarFrame::new(1, 40).unwrap();
        let c = frame.center();
        let (theta, rho) = (1.3f32, 4.0f32);
        let seg = line_from_polar(&frame, theta, rho);
        assert_eq!(seg.p0, seg.p1);
        assert_abs_diff_eq!(seg.length(), 0.0);
        let r = (seg.p0.x - c.x) * theta.cos() + (seg.p0.y - c.y) * theta.sin();
        assert_abs_diff_eq!(r, rho, epsilon = 1e-4);

        // The other branch still spans the full column.
        let seg = line_from_polar(&PolarFrame::new(1, 40).unwrap(), 0.0, 0.0);
        assert_abs_diff_eq!(seg.p0, Point2::new(0.0, 0.0), epsilon = 1e-4);
        assert_abs_diff_eq!(seg.p1, Point2::new(0.0, 39.0), epsilon = 1e-4);
    }
}
