use nalgebra::{Point2, Vector2};
use serde::{Deserialize, Serialize};

/// Two endpoints in image pixel coordinates (x right, y down).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub p0: Point2<f32>,
    pub p1: Point2<f32>,
}

impl LineSegment {
    pub fn new(p0: Point2<f32>, p1: Point2<f32>) -> Self {
        Self { p0, p1 }
    }

    #[inline]
    pub fn length(&self) -> f32 {
        (self.p1 - self.p0).norm()
    }

    /// Unit direction from `p0` to `p1`, `None` for a degenerate segment.
    pub fn direction(&self) -> Option<Vector2<f32>> {
        let d = self.p1 - self.p0;
        let n = d.norm();
        if n <= f32::EPSILON {
            return None;
        }
        Some(d / n)
    }

    pub fn midpoint(&self) -> Point2<f32> {
        nalgebra::center(&self.p0, &self.p1)
    }

    /// Perpendicular distance from `p` to the infinite line through the segment.
    ///
    /// Falls back to the distance to `p0` when the segment is degenerate.
    pub fn distance_to_line(&self, p: Point2<f32>) -> f32 {
        match self.direction() {
            Some(u) => {
                let v = p - self.p0;
                (v.x * u.y - v.y * u.x).abs()
            }
            None => (p - self.p0).norm(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn distance_to_horizontal_line() {
        let seg = LineSegment::new(Point2::new(0.0, 50.0), Point2::new(99.0, 50.0));
        assert_relative_eq!(seg.length(), 99.0);
        assert_relative_eq!(seg.distance_to_line(Point2::new(300.0, 47.0)), 3.0);
        assert_relative_eq!(seg.midpoint(), Point2::new(49.5, 50.0));
    }

    #[test]
    fn degenerate_segment_has_no_direction() {
        let p = Point2::new(1.0, 2.0);
        let seg = LineSegment::new(p, p);
        assert!(seg.direction().is_none());
        assert_relative_eq!(seg.distance_to_line(Point2::new(4.0, 6.0)), 5.0);
    }
}
