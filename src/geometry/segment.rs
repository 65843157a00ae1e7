use crate::error::Result;
use crate::math::{self, bezier, BezierSamples, Point2};

/// Bisection iterations used when inverting `x(u)`; enough to exhaust f64 precision.
const MAX_BISECTION_STEPS: usize = 128;

/// A planar cubic Bezier segment of a longitudinal profile.
///
/// `p0` and `p3` lie on the curve; `p1` and `p2` are shape handles. The `x`
/// coordinate is the longitudinal position and `y` the profile value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BezierSegment {
    pub p0: Point2,
    pub p1: Point2,
    pub p2: Point2,
    pub p3: Point2,
}

impl BezierSegment {
    /// Creates a new segment from its four control points.
    #[must_use]
    pub fn new(p0: Point2, p1: Point2, p2: Point2, p3: Point2) -> Self {
        Self { p0, p1, p2, p3 }
    }

    /// Evaluates the segment at its own parameter `u`.
    ///
    /// # Errors
    ///
    /// Returns an error if a control point or the result is non-finite.
    pub fn evaluate(&self, u: f64) -> Result<Point2> {
        math::evaluate(&self.p0, &self.p1, &self.p2, &self.p3, u)
    }

    /// Samples `steps + 1` evenly spaced parameter values, endpoints included.
    ///
    /// # Errors
    ///
    /// Returns an error if `steps` is zero or a control point is non-finite.
    pub fn samples(&self, steps: u32) -> Result<BezierSamples<Point2>> {
        math::sample_sequence(&self.p0, &self.p1, &self.p2, &self.p3, steps)
    }

    /// Returns `true` if the control polygon is non-decreasing in `x` and the
    /// segment spans a positive `x` range, which makes `x(u)` monotone.
    #[must_use]
    pub fn is_x_monotone(&self) -> bool {
        self.p0.x <= self.p1.x
            && self.p1.x <= self.p2.x
            && self.p2.x <= self.p3.x
            && self.p0.x < self.p3.x
    }

    /// Returns the profile value at longitudinal position `x`.
    ///
    /// Positions at or beyond the endpoints return the endpoint values exactly.
    /// Inside the span, `x(u) = x` is solved by bisection, which is valid
    /// because `x(u)` is monotone for segments accepted by
    /// [`ProfileCurve`](super::ProfileCurve).
    ///
    /// # Errors
    ///
    /// Returns an error if evaluation produces a non-finite value.
    pub fn value_at_x(&self, x: f64) -> Result<f64> {
        if x <= self.p0.x {
            return Ok(self.p0.y);
        }
        if x >= self.p3.x {
            return Ok(self.p3.y);
        }

        let xs = [self.p0.x, self.p1.x, self.p2.x, self.p3.x];
        let x_at = |u: f64| {
            let w = bezier::bernstein(u);
            w[0] * xs[0] + w[1] * xs[1] + w[2] * xs[2] + w[3] * xs[3]
        };

        let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
        for _ in 0..MAX_BISECTION_STEPS {
            let mid = 0.5 * (lo + hi);
            if mid <= lo || mid >= hi {
                break;
            }
            if x_at(mid) < x {
                lo = mid;
            } else {
                hi = mid;
            }
        }

        Ok(self.evaluate(0.5 * (lo + hi))?.y)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn linear_segment_inverts_to_identity() {
        let seg = BezierSegment::new(p(0.0, 0.0), p(1.0, 1.0), p(2.0, 2.0), p(3.0, 3.0));
        for x in [0.25, 1.0, 1.7, 2.9] {
            assert_abs_diff_eq!(seg.value_at_x(x).unwrap(), x, epsilon = 1e-9);
        }
    }

    #[test]
    fn endpoints_are_exact() {
        let seg = BezierSegment::new(p(0.0, 6.35), p(36.0, 6.35), p(73.0, 0.0), p(91.44, 0.0));
        assert_eq!(seg.value_at_x(0.0).unwrap(), 6.35);
        assert_eq!(seg.value_at_x(91.44).unwrap(), 0.0);
    }

    #[test]
    fn inversion_matches_forward_evaluation() {
        let seg = BezierSegment::new(p(0.0, 4.0), p(2.0, 4.0), p(8.0, 0.0), p(10.0, 0.0));
        let point = seg.evaluate(0.3).unwrap();
        assert_abs_diff_eq!(seg.value_at_x(point.x).unwrap(), point.y, epsilon = 1e-9);
    }

    #[test]
    fn monotonicity_check() {
        let good = BezierSegment::new(p(0.0, 0.0), p(1.0, 5.0), p(1.0, -5.0), p(2.0, 0.0));
        assert!(good.is_x_monotone());
        let backwards = BezierSegment::new(p(0.0, 0.0), p(3.0, 0.0), p(1.0, 0.0), p(2.0, 0.0));
        assert!(!backwards.is_x_monotone());
        let vertical = BezierSegment::new(p(1.0, 0.0), p(1.0, 1.0), p(1.0, 2.0), p(1.0, 3.0));
        assert!(!vertical.is_x_monotone());
    }
}
