use crate::error::{ParameterError, Result};
use crate::math::Point2;

use super::profile::check_fraction;
use super::{BezierSegment, ProfileCurve, ProfilePlane};

/// Selects how hull thickness varies along the length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ThicknessModel {
    /// Straight taper tail → max at mid-length → nose.
    #[default]
    Linear,
    /// Eased taper through the same three values.
    Bezier,
}

/// Piecewise-linear thickness at fraction `t`: tail → max at `t = 0.5` → nose.
///
/// Both halves are written as interpolations between their end values, so
/// `t = 0`, `0.5` and `1` return `tail`, `max` and `nose` exactly.
///
/// # Errors
///
/// Returns [`ParameterError::OutOfRange`] if `t` is outside `[0, 1]`.
pub fn linear_thickness(t: f64, tail: f64, nose: f64, max: f64) -> Result<f64> {
    check_fraction("t", t)?;
    Ok(if t < 0.5 {
        let s = 2.0 * t;
        (1.0 - s) * tail + s * max
    } else {
        let s = 2.0 * (t - 0.5);
        (1.0 - s) * max + s * nose
    })
}

/// Linear thickness profile with validated inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThicknessProfile {
    tail: f64,
    nose: f64,
    max: f64,
}

impl ThicknessProfile {
    /// Creates a new linear profile.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::NonPositive`] if any thickness is not a
    /// positive finite number.
    pub fn new(tail: f64, nose: f64, max: f64) -> Result<Self> {
        check_positive("tail_thickness", tail)?;
        check_positive("nose_thickness", nose)?;
        check_positive("max_thickness", max)?;
        Ok(Self { tail, nose, max })
    }

    /// Returns the thickness at fraction `t`.
    ///
    /// # Errors
    ///
    /// Returns an error if `t` is outside `[0, 1]`.
    pub fn sample_at(&self, t: f64) -> Result<f64> {
        linear_thickness(t, self.tail, self.nose, self.max)
    }
}

/// Thickness eased through tail, max and nose with two Bezier segments.
///
/// Uses the same handle layout as the rocker so the taper leaves the
/// tail and the nose flat and meets the maximum with zero slope.
#[derive(Debug, Clone, PartialEq)]
pub struct BezierThickness {
    curve: ProfileCurve,
}

impl BezierThickness {
    /// Creates a new eased profile over the unit length.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::NonPositive`] if any thickness is not a
    /// positive finite number.
    pub fn new(tail: f64, nose: f64, max: f64) -> Result<Self> {
        check_positive("tail_thickness", tail)?;
        check_positive("nose_thickness", nose)?;
        check_positive("max_thickness", max)?;

        let mid = Point2::new(0.5, max);
        let back = BezierSegment::new(
            Point2::new(0.0, tail),
            Point2::new(0.2, tail),
            Point2::new(0.4, max),
            mid,
        );
        let front = BezierSegment::new(
            mid,
            Point2::new(0.6, max),
            Point2::new(0.8, nose),
            Point2::new(1.0, nose),
        );
        let curve = ProfileCurve::from_segments(vec![back, front], ProfilePlane::Xz)?;
        Ok(Self { curve })
    }

    /// Returns the thickness at fraction `t`.
    ///
    /// # Errors
    ///
    /// Returns an error if `t` is outside `[0, 1]`.
    pub fn sample_at(&self, t: f64) -> Result<f64> {
        self.curve.sample_at(t)
    }
}

/// A thickness profile of either model.
#[derive(Debug, Clone, PartialEq)]
pub enum ThicknessCurve {
    Linear(ThicknessProfile),
    Bezier(BezierThickness),
}

impl ThicknessCurve {
    /// Builds the profile selected by `model`.
    ///
    /// # Errors
    ///
    /// Returns an error if any thickness is not a positive finite number.
    pub fn new(model: ThicknessModel, tail: f64, nose: f64, max: f64) -> Result<Self> {
        Ok(match model {
            ThicknessModel::Linear => Self::Linear(ThicknessProfile::new(tail, nose, max)?),
            ThicknessModel::Bezier => Self::Bezier(BezierThickness::new(tail, nose, max)?),
        })
    }

    /// Returns the thickness at fraction `t`.
    ///
    /// # Errors
    ///
    /// Returns an error if `t` is outside `[0, 1]`.
    pub fn sample_at(&self, t: f64) -> Result<f64> {
        match self {
            Self::Linear(p) => p.sample_at(t),
            Self::Bezier(p) => p.sample_at(t),
        }
    }
}

fn check_positive(parameter: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ParameterError::NonPositive { parameter, value }.into())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn max_at_mid_length_regardless_of_tips() {
        for (tail, nose) in [(1.27, 1.905), (6.0, 0.1), (0.5, 9.0)] {
            assert_eq!(linear_thickness(0.5, tail, nose, 6.35).unwrap(), 6.35);
        }
    }

    #[test]
    fn tips_are_exact() {
        assert_eq!(linear_thickness(0.0, 1.27, 1.905, 6.35).unwrap(), 1.27);
        assert_eq!(linear_thickness(1.0, 1.27, 1.905, 6.35).unwrap(), 1.905);
    }

    #[test]
    fn matches_taper_formula() {
        // tail + 2t(max - tail) and max - 2(t - 0.5)(max - nose)
        let (tail, nose, max) = (1.27, 1.905, 6.35);
        for t in [0.1, 0.3, 0.45, 0.6, 0.75, 0.95] {
            let expected = if t < 0.5 {
                tail + 2.0 * t * (max - tail)
            } else {
                max - 2.0 * (t - 0.5) * (max - nose)
            };
            assert_abs_diff_eq!(
                linear_thickness(t, tail, nose, max).unwrap(),
                expected,
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn out_of_range_fraction_is_rejected() {
        assert!(linear_thickness(-0.1, 1.0, 1.0, 2.0).is_err());
        assert!(linear_thickness(1.5, 1.0, 1.0, 2.0).is_err());
    }

    #[test]
    fn profile_rejects_non_positive_thickness() {
        assert!(ThicknessProfile::new(0.0, 1.0, 2.0).is_err());
        assert!(ThicknessProfile::new(1.0, -1.0, 2.0).is_err());
        assert!(BezierThickness::new(1.0, 1.0, f64::NAN).is_err());
    }

    #[test]
    fn bezier_model_hits_the_same_key_values() {
        let curve = ThicknessCurve::new(ThicknessModel::Bezier, 1.27, 1.905, 6.35).unwrap();
        assert_eq!(curve.sample_at(0.0).unwrap(), 1.27);
        assert_eq!(curve.sample_at(0.5).unwrap(), 6.35);
        assert_eq!(curve.sample_at(1.0).unwrap(), 1.905);
        let quarter = curve.sample_at(0.25).unwrap();
        assert!(quarter > 1.27 && quarter < 6.35);
    }
}
