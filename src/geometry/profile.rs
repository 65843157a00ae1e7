use crate::error::{GeometryError, ParameterError, Result};
use crate::math::{Point2, Point3, TOLERANCE};

use super::BezierSegment;

/// The construction plane a profile is drawn on when lifted into 3D.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfilePlane {
    /// Side view: the profile value becomes Z (rocker).
    Xz,
    /// Plan view: the profile value becomes Y (outline).
    Xy,
}

impl ProfilePlane {
    /// Lifts a profile point `(x, value)` into world coordinates.
    #[must_use]
    pub fn lift(self, p: &Point2) -> Point3 {
        match self {
            Self::Xz => Point3::new(p.x, 0.0, p.y),
            Self::Xy => Point3::new(p.x, p.y, 0.0),
        }
    }
}

/// Handle multipliers for the outline preset.
///
/// The back half's tail handle is raised by `tail` and the front half's nose
/// handle by `nose`. These shape the planform and carry no physical meaning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutlineBias {
    pub tail: f64,
    pub nose: f64,
}

impl Default for OutlineBias {
    fn default() -> Self {
        Self {
            tail: 1.2,
            nose: 1.1,
        }
    }
}

/// A longitudinal profile made of chained cubic Bezier segments.
///
/// The segments cover `[0, length]` in `x` without gaps or overlaps, each one
/// starting exactly where the previous one ends, and every segment is
/// monotone in `x`. This makes the profile a function of longitudinal
/// position that can be sampled at any fraction of the length.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileCurve {
    segments: Vec<BezierSegment>,
    plane: ProfilePlane,
    length: f64,
}

impl ProfileCurve {
    /// Builds a profile from explicit segments.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NonFinite`] for non-finite control points,
    /// [`GeometryError::BrokenChain`] if consecutive segments do not share an
    /// endpoint, and [`GeometryError::Degenerate`] if the list is empty, does
    /// not start at `x = 0`, or contains a segment that is not monotone in `x`.
    pub fn from_segments(segments: Vec<BezierSegment>, plane: ProfilePlane) -> Result<Self> {
        let (Some(first), Some(last)) = (segments.first(), segments.last()) else {
            return Err(GeometryError::Degenerate("profile has no segments".into()).into());
        };

        let finite = segments.iter().all(|s| {
            [s.p0, s.p1, s.p2, s.p3]
                .iter()
                .all(|p| p.x.is_finite() && p.y.is_finite())
        });
        if !finite {
            return Err(GeometryError::NonFinite("profile control point").into());
        }

        if first.p0.x.abs() > TOLERANCE {
            return Err(GeometryError::Degenerate(format!(
                "profile must start at x = 0, starts at {}",
                first.p0.x
            ))
            .into());
        }

        for (i, pair) in segments.windows(2).enumerate() {
            if pair[0].p3 != pair[1].p0 {
                return Err(GeometryError::BrokenChain(i + 1).into());
            }
        }

        if let Some(i) = segments.iter().position(|s| !s.is_x_monotone()) {
            return Err(
                GeometryError::Degenerate(format!("segment {i} is not monotone in x")).into(),
            );
        }

        let length = last.p3.x;
        Ok(Self {
            segments,
            plane,
            length,
        })
    }

    /// Builds the rocker profile: height of the bottom above the flat reference.
    ///
    /// Two segments meet at `(length / 2, 0)`, so the lowest point of the hull
    /// is always at mid-length. The tail handle holds the tail height for a
    /// flat exit; the nose segment mirrors it toward the nose.
    ///
    /// # Errors
    ///
    /// Returns an error if `length` is not positive or any height is non-finite.
    pub fn rocker(length: f64, tail_rocker: f64, nose_rocker: f64) -> Result<Self> {
        check_length(length)?;
        let mid = Point2::new(length * 0.5, 0.0);
        let tail = BezierSegment::new(
            Point2::new(0.0, tail_rocker),
            Point2::new(length * 0.2, tail_rocker),
            Point2::new(length * 0.4, 0.0),
            mid,
        );
        let nose = BezierSegment::new(
            mid,
            Point2::new(length * 0.6, 0.0),
            Point2::new(length * 0.8, nose_rocker),
            Point2::new(length, nose_rocker),
        );
        Self::from_segments(vec![tail, nose], ProfilePlane::Xz)
    }

    /// Builds the outline profile (half-width) with the default [`OutlineBias`].
    ///
    /// # Errors
    ///
    /// Returns an error if `length` is not positive or any width is non-finite.
    pub fn outline(length: f64, max_width: f64, tail_width: f64, nose_width: f64) -> Result<Self> {
        Self::outline_with_bias(length, max_width, tail_width, nose_width, OutlineBias::default())
    }

    /// Builds the outline profile (half-width) with explicit handle bias.
    ///
    /// The widest point is forced to `(length / 2, max_width / 2)`. The back
    /// half rises from half the tail width, the front half tapers to half the
    /// nose width.
    ///
    /// # Errors
    ///
    /// Returns an error if `length` is not positive or any width is non-finite.
    pub fn outline_with_bias(
        length: f64,
        max_width: f64,
        tail_width: f64,
        nose_width: f64,
        bias: OutlineBias,
    ) -> Result<Self> {
        check_length(length)?;
        let half_max = max_width / 2.0;
        let half_tail = tail_width / 2.0;
        let half_nose = nose_width / 2.0;
        let mid = Point2::new(length * 0.5, half_max);

        let back = BezierSegment::new(
            Point2::new(0.0, half_tail),
            Point2::new(length * 0.2, half_tail * bias.tail),
            Point2::new(length * 0.4, half_max),
            mid,
        );
        let front = BezierSegment::new(
            mid,
            Point2::new(length * 0.6, half_max),
            Point2::new(length * 0.9, half_nose * bias.nose),
            Point2::new(length, half_nose),
        );
        Self::from_segments(vec![back, front], ProfilePlane::Xy)
    }

    /// Returns the profile value at longitudinal fraction `t` (position `t * length`).
    ///
    /// `sample_at(0.0)` is the tail value and `sample_at(1.0)` the nose value,
    /// both exactly. Segment joints return the shared endpoint exactly.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::OutOfRange`] if `t` is outside `[0, 1]` or NaN.
    pub fn sample_at(&self, t: f64) -> Result<f64> {
        check_fraction("t", t)?;
        let x = t * self.length;
        let segment = self
            .segments
            .iter()
            .find(|s| x <= s.p3.x)
            .or_else(|| self.segments.last())
            .ok_or_else(|| GeometryError::Degenerate("profile has no segments".into()))?;
        segment.value_at_x(x)
    }

    /// Samples every segment with `steps_per_segment` steps and concatenates the
    /// result, dropping the duplicated point at each joint.
    ///
    /// # Errors
    ///
    /// Returns an error if `steps_per_segment` is zero.
    pub fn sample_points(&self, steps_per_segment: u32) -> Result<Vec<Point2>> {
        let mut points = Vec::new();
        for (i, segment) in self.segments.iter().enumerate() {
            let samples = segment.samples(steps_per_segment)?;
            let skip = usize::from(i > 0);
            points.extend(samples.skip(skip));
        }
        Ok(points)
    }

    /// Samples the profile and lifts it onto its construction plane.
    ///
    /// # Errors
    ///
    /// Returns an error if `steps_per_segment` is zero.
    pub fn reference_points(&self, steps_per_segment: u32) -> Result<Vec<Point3>> {
        Ok(self
            .sample_points(steps_per_segment)?
            .iter()
            .map(|p| self.plane.lift(p))
            .collect())
    }

    /// Returns the segments in order from tail to nose.
    #[must_use]
    pub fn segments(&self) -> &[BezierSegment] {
        &self.segments
    }

    /// Returns the construction plane.
    #[must_use]
    pub fn plane(&self) -> ProfilePlane {
        self.plane
    }

    /// Returns the covered length.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.length
    }
}

fn check_length(length: f64) -> Result<()> {
    if length.is_finite() && length > 0.0 {
        Ok(())
    } else {
        Err(ParameterError::NonPositive {
            parameter: "length",
            value: length,
        }
        .into())
    }
}

/// Rejects fractions outside `[0, 1]`, including NaN.
pub(crate) fn check_fraction(parameter: &'static str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ParameterError::OutOfRange {
            parameter,
            value,
            min: 0.0,
            max: 1.0,
        }
        .into())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::error::HullError;
    use approx::assert_abs_diff_eq;

    const LENGTH: f64 = 182.88;

    #[test]
    fn rocker_is_zero_at_mid_length() {
        for (length, tail, nose) in [(LENGTH, 12.7, 6.35), (1.0, 0.0, 0.0), (300.0, 40.0, 3.0)] {
            let rocker = ProfileCurve::rocker(length, tail, nose).unwrap();
            assert_eq!(rocker.sample_at(0.5).unwrap(), 0.0);
        }
    }

    #[test]
    fn rocker_endpoints_are_exact() {
        let rocker = ProfileCurve::rocker(LENGTH, 12.7, 6.35).unwrap();
        assert_eq!(rocker.sample_at(0.0).unwrap(), 12.7);
        assert_eq!(rocker.sample_at(1.0).unwrap(), 6.35);
    }

    #[test]
    fn outline_is_half_max_width_at_mid_length() {
        let outline = ProfileCurve::outline(LENGTH, 50.8, 30.48, 0.002).unwrap();
        assert_eq!(outline.sample_at(0.5).unwrap(), 50.8 / 2.0);
        assert_eq!(outline.sample_at(0.0).unwrap(), 30.48 / 2.0);
        assert_eq!(outline.sample_at(1.0).unwrap(), 0.001);
    }

    #[test]
    fn profile_is_continuous_across_the_joint() {
        let rocker = ProfileCurve::rocker(LENGTH, 12.7, 6.35).unwrap();
        let below = rocker.sample_at(0.5 - 1e-9).unwrap();
        let above = rocker.sample_at(0.5 + 1e-9).unwrap();
        assert_abs_diff_eq!(below, above, epsilon = 1e-6);
    }

    #[test]
    fn rocker_stays_between_ground_and_tip() {
        let rocker = ProfileCurve::rocker(LENGTH, 12.7, 6.35).unwrap();
        for i in 0..=50 {
            let v = rocker.sample_at(f64::from(i) / 50.0).unwrap();
            assert!((-TOLERANCE..=12.7 + TOLERANCE).contains(&v), "rocker {v} at {i}");
        }
    }

    #[test]
    fn sample_outside_unit_interval_is_rejected() {
        let rocker = ProfileCurve::rocker(LENGTH, 12.7, 6.35).unwrap();
        for t in [-0.01, 1.01, f64::NAN] {
            let err = rocker.sample_at(t).unwrap_err();
            assert!(matches!(
                err,
                HullError::Parameter(ParameterError::OutOfRange { parameter: "t", .. })
            ));
        }
    }

    #[test]
    fn non_positive_length_is_rejected() {
        assert!(ProfileCurve::rocker(0.0, 1.0, 1.0).is_err());
        assert!(ProfileCurve::outline(-5.0, 50.0, 30.0, 1.0).is_err());
        assert!(ProfileCurve::rocker(f64::INFINITY, 1.0, 1.0).is_err());
    }

    #[test]
    fn broken_chain_is_rejected() {
        let a = BezierSegment::new(
            Point2::new(0.0, 1.0),
            Point2::new(1.0, 1.0),
            Point2::new(2.0, 0.0),
            Point2::new(3.0, 0.0),
        );
        let b = BezierSegment::new(
            Point2::new(3.0, 0.5),
            Point2::new(4.0, 0.5),
            Point2::new(5.0, 1.0),
            Point2::new(6.0, 1.0),
        );
        let err = ProfileCurve::from_segments(vec![a, b], ProfilePlane::Xz).unwrap_err();
        assert!(matches!(err, HullError::Geometry(GeometryError::BrokenChain(1))));
    }

    #[test]
    fn empty_or_offset_profiles_are_rejected() {
        assert!(ProfileCurve::from_segments(vec![], ProfilePlane::Xy).is_err());
        let offset = BezierSegment::new(
            Point2::new(1.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(3.0, 0.0),
            Point2::new(4.0, 0.0),
        );
        assert!(ProfileCurve::from_segments(vec![offset], ProfilePlane::Xy).is_err());
    }

    #[test]
    fn sample_points_drop_duplicate_joint() {
        let rocker = ProfileCurve::rocker(LENGTH, 12.7, 6.35).unwrap();
        let points = rocker.sample_points(20).unwrap();
        assert_eq!(points.len(), 41);
        assert_eq!(points[20], Point2::new(LENGTH * 0.5, 0.0));
        assert_eq!(points[40].x, LENGTH);
    }

    #[test]
    fn reference_points_use_the_profile_plane() {
        let rocker = ProfileCurve::rocker(LENGTH, 12.7, 6.35).unwrap();
        let outline = ProfileCurve::outline(LENGTH, 50.8, 30.48, 0.002).unwrap();
        let r = rocker.reference_points(4).unwrap();
        let o = outline.reference_points(4).unwrap();
        assert_eq!(r[0], Point3::new(0.0, 0.0, 12.7));
        assert_eq!(o[0], Point3::new(0.0, 15.24, 0.0));
    }
}
