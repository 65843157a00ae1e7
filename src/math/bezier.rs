//! Cubic Bezier evaluation in the Bernstein basis.
//!
//! `P(t) = (1-t)³·p0 + 3(1-t)²t·p1 + 3(1-t)t²·p2 + t³·p3`, applied to each
//! coordinate independently. At `t = 0` and `t = 1` the basis collapses to a
//! single unit weight, so the endpoints are reproduced bit-exactly.

use crate::error::{GeometryError, ParameterError, Result};

use super::{Point2, Point3};

/// A point type that can serve as a Bezier control point.
pub trait BezierPoint: Copy {
    /// Weighted sum of four points.
    fn blend(points: [&Self; 4], weights: [f64; 4]) -> Self;

    /// Returns `true` if all coordinates are finite.
    fn is_finite(&self) -> bool;
}

impl BezierPoint for Point2 {
    fn blend(p: [&Self; 4], w: [f64; 4]) -> Self {
        Point2::from(p[0].coords * w[0] + p[1].coords * w[1] + p[2].coords * w[2] + p[3].coords * w[3])
    }

    fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl BezierPoint for Point3 {
    fn blend(p: [&Self; 4], w: [f64; 4]) -> Self {
        Point3::from(p[0].coords * w[0] + p[1].coords * w[1] + p[2].coords * w[2] + p[3].coords * w[3])
    }

    fn is_finite(&self) -> bool {
        super::is_finite3(self)
    }
}

/// Cubic Bernstein weights at `t`.
#[must_use]
pub fn bernstein(t: f64) -> [f64; 4] {
    let s = 1.0 - t;
    [s * s * s, 3.0 * s * s * t, 3.0 * s * t * t, t * t * t]
}

/// Evaluates the cubic Bezier defined by `p0..p3` at `t`.
///
/// Any real `t` is accepted; callers normally stay inside `[0, 1]`.
///
/// # Errors
///
/// Returns [`GeometryError::NonFinite`] if a control point or `t` is NaN or
/// infinite, or if the result overflows.
pub fn evaluate<P: BezierPoint>(p0: &P, p1: &P, p2: &P, p3: &P, t: f64) -> Result<P> {
    check_controls(p0, p1, p2, p3)?;
    if !t.is_finite() {
        return Err(GeometryError::NonFinite("bezier parameter").into());
    }
    let point = P::blend([p0, p1, p2, p3], bernstein(t));
    if !point.is_finite() {
        return Err(GeometryError::NonFinite("bezier evaluation").into());
    }
    Ok(point)
}

/// Samples the curve at `t = i / steps` for `i = 0..=steps`.
///
/// The returned iterator is lazy, cloneable (restartable) and yields exactly
/// `steps + 1` points; the first and last are `p0` and `p3`.
///
/// # Errors
///
/// Returns [`ParameterError::NonPositive`] if `steps` is zero, or
/// [`GeometryError::NonFinite`] for non-finite control points.
pub fn sample_sequence<P: BezierPoint>(
    p0: &P,
    p1: &P,
    p2: &P,
    p3: &P,
    steps: u32,
) -> Result<BezierSamples<P>> {
    if steps == 0 {
        return Err(ParameterError::NonPositive {
            parameter: "steps",
            value: 0.0,
        }
        .into());
    }
    check_controls(p0, p1, p2, p3)?;
    Ok(BezierSamples {
        controls: [*p0, *p1, *p2, *p3],
        steps,
        next: Some(0),
    })
}

fn check_controls<P: BezierPoint>(p0: &P, p1: &P, p2: &P, p3: &P) -> Result<()> {
    if [p0, p1, p2, p3].iter().all(|p| p.is_finite()) {
        Ok(())
    } else {
        Err(GeometryError::NonFinite("bezier control point").into())
    }
}

/// Lazy, evenly spaced samples along a cubic Bezier.
#[derive(Debug, Clone)]
pub struct BezierSamples<P> {
    controls: [P; 4],
    steps: u32,
    next: Option<u32>,
}

impl<P: BezierPoint> Iterator for BezierSamples<P> {
    type Item = P;

    fn next(&mut self) -> Option<P> {
        let i = self.next?;
        let t = f64::from(i) / f64::from(self.steps);
        self.next = if i < self.steps { Some(i + 1) } else { None };
        let [p0, p1, p2, p3] = &self.controls;
        Some(P::blend([p0, p1, p2, p3], bernstein(t)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self
            .next
            .map_or(0, |i| usize::try_from(self.steps - i).map_or(usize::MAX, |n| n.saturating_add(1)));
        (remaining, Some(remaining))
    }
}

impl<P: BezierPoint> ExactSizeIterator for BezierSamples<P> {}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn controls() -> [Point3; 4] {
        [
            Point3::new(0.3, -1.7, 2.9),
            Point3::new(4.1, 8.0, -3.3),
            Point3::new(-2.2, 0.5, 7.7),
            Point3::new(9.9, 1.1, -0.4),
        ]
    }

    #[test]
    fn endpoints_are_interpolated_exactly() {
        let [p0, p1, p2, p3] = controls();
        assert_eq!(evaluate(&p0, &p1, &p2, &p3, 0.0).unwrap(), p0);
        assert_eq!(evaluate(&p0, &p1, &p2, &p3, 1.0).unwrap(), p3);
    }

    #[test]
    fn midpoint_matches_bernstein_weights() {
        let p0 = Point2::new(0.0, 0.0);
        let p1 = Point2::new(1.0, 2.0);
        let p2 = Point2::new(3.0, 2.0);
        let p3 = Point2::new(4.0, 0.0);
        let mid = evaluate(&p0, &p1, &p2, &p3, 0.5).unwrap();
        // 0.125*p0 + 0.375*p1 + 0.375*p2 + 0.125*p3
        assert_abs_diff_eq!(mid.x, 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(mid.y, 1.5, epsilon = 1e-12);
    }

    #[test]
    fn rejects_non_finite_controls() {
        let [p0, p1, p2, _] = controls();
        let bad = Point3::new(f64::NAN, 0.0, 0.0);
        assert!(evaluate(&p0, &p1, &p2, &bad, 0.5).is_err());
        let inf = Point3::new(0.0, f64::INFINITY, 0.0);
        assert!(sample_sequence(&inf, &p1, &p2, &p0, 4).is_err());
    }

    #[test]
    fn sequence_has_steps_plus_one_points() {
        let [p0, p1, p2, p3] = controls();
        let samples = sample_sequence(&p0, &p1, &p2, &p3, 20).unwrap();
        assert_eq!(samples.len(), 21);
        let points: Vec<_> = samples.collect();
        assert_eq!(points.first(), Some(&p0));
        assert_eq!(points.last(), Some(&p3));
    }

    #[test]
    fn single_step_is_both_endpoints() {
        let [p0, p1, p2, p3] = controls();
        let points: Vec<_> = sample_sequence(&p0, &p1, &p2, &p3, 1).unwrap().collect();
        assert_eq!(
            points,
            vec![
                evaluate(&p0, &p1, &p2, &p3, 0.0).unwrap(),
                evaluate(&p0, &p1, &p2, &p3, 1.0).unwrap()
            ]
        );
    }

    #[test]
    fn sequence_is_restartable() {
        let [p0, p1, p2, p3] = controls();
        let samples = sample_sequence(&p0, &p1, &p2, &p3, 7).unwrap();
        let first: Vec<_> = samples.clone().collect();
        let second: Vec<_> = samples.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn zero_steps_is_rejected() {
        let [p0, p1, p2, p3] = controls();
        assert!(sample_sequence(&p0, &p1, &p2, &p3, 0).is_err());
    }
}
