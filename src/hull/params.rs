use crate::error::{ParameterError, Result, Violation};
use crate::geometry::ThicknessModel;
use crate::units::Unit;

/// Tail width as a fraction of max width when no tail width is given.
pub const DEFAULT_TAIL_WIDTH_RATIO: f64 = 0.6;

/// Nose width in centimetres when no nose width is given. Kept non-zero so the
/// nose section still encloses area.
pub const DEFAULT_NOSE_WIDTH: f64 = 0.002;

/// Minimum number of slices (the hull then has three cross-sections).
pub const MIN_SLICE_COUNT: u32 = 2;

/// Design inputs for one hull generation run.
///
/// All lengths are in centimetres; use [`HullParameters::converted_from`] to
/// bring values entered in another unit into the internal one.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HullParameters {
    /// Overall length, tail to nose.
    pub length: f64,
    /// Width at the widest point (mid-length).
    pub max_width: f64,
    /// Lift of the nose tip above the lowest point.
    pub nose_rocker: f64,
    /// Lift of the tail tip above the lowest point.
    pub tail_rocker: f64,
    pub nose_thickness: f64,
    pub tail_thickness: f64,
    /// Thickness at mid-length.
    pub max_thickness: f64,
    /// Height of the rail apex as a fraction of local thickness:
    /// 0 puts it at the bottom, 1 at the deck.
    pub rail_apex_ratio: f64,
    /// Number of slices; the hull gets `slice_count + 1` cross-sections.
    pub slice_count: u32,
    /// Full width at the tail; defaults to `0.6 * max_width`.
    pub tail_width: Option<f64>,
    /// Full width at the nose; defaults to [`DEFAULT_NOSE_WIDTH`], or to
    /// `max_width` on boards narrower than that.
    pub nose_width: Option<f64>,
    pub thickness_model: ThicknessModel,
}

impl Default for HullParameters {
    fn default() -> Self {
        Self {
            length: 182.88,
            max_width: 50.8,
            nose_rocker: 12.7,
            tail_rocker: 6.35,
            nose_thickness: 1.27,
            tail_thickness: 1.905,
            max_thickness: 6.35,
            rail_apex_ratio: 0.4,
            slice_count: 10,
            tail_width: None,
            nose_width: None,
            thickness_model: ThicknessModel::Linear,
        }
    }
}

impl HullParameters {
    #[must_use]
    pub fn with_length(mut self, length: f64) -> Self {
        self.length = length;
        self
    }

    #[must_use]
    pub fn with_max_width(mut self, max_width: f64) -> Self {
        self.max_width = max_width;
        self
    }

    /// Sets tail and nose rocker.
    #[must_use]
    pub fn with_rocker(mut self, tail: f64, nose: f64) -> Self {
        self.tail_rocker = tail;
        self.nose_rocker = nose;
        self
    }

    /// Sets tail, nose and maximum thickness.
    #[must_use]
    pub fn with_thickness(mut self, tail: f64, nose: f64, max: f64) -> Self {
        self.tail_thickness = tail;
        self.nose_thickness = nose;
        self.max_thickness = max;
        self
    }

    #[must_use]
    pub fn with_rail_apex_ratio(mut self, ratio: f64) -> Self {
        self.rail_apex_ratio = ratio;
        self
    }

    #[must_use]
    pub fn with_slice_count(mut self, slice_count: u32) -> Self {
        self.slice_count = slice_count;
        self
    }

    /// Sets explicit tail and nose widths.
    #[must_use]
    pub fn with_tip_widths(mut self, tail: f64, nose: f64) -> Self {
        self.tail_width = Some(tail);
        self.nose_width = Some(nose);
        self
    }

    #[must_use]
    pub fn with_thickness_model(mut self, model: ThicknessModel) -> Self {
        self.thickness_model = model;
        self
    }

    /// Tail width, explicit or derived from the max width.
    #[must_use]
    pub fn resolved_tail_width(&self) -> f64 {
        self.tail_width
            .unwrap_or(self.max_width * DEFAULT_TAIL_WIDTH_RATIO)
    }

    /// Nose width, explicit or the default near-point nose capped at the max
    /// width.
    #[must_use]
    pub fn resolved_nose_width(&self) -> f64 {
        self.nose_width
            .unwrap_or_else(|| DEFAULT_NOSE_WIDTH.min(self.max_width))
    }

    /// Reinterprets every length field as being in `unit` and returns the
    /// parameters in centimetres. Ratios and counts are left untouched.
    #[must_use]
    pub fn converted_from(self, unit: Unit) -> Self {
        let cm = |v: f64| unit.to_centimeters(v);
        Self {
            length: cm(self.length),
            max_width: cm(self.max_width),
            nose_rocker: cm(self.nose_rocker),
            tail_rocker: cm(self.tail_rocker),
            nose_thickness: cm(self.nose_thickness),
            tail_thickness: cm(self.tail_thickness),
            max_thickness: cm(self.max_thickness),
            tail_width: self.tail_width.map(cm),
            nose_width: self.nose_width.map(cm),
            ..self
        }
    }

    /// Checks every field against its domain.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::Invalid`] listing every violated field, not
    /// only the first one.
    pub fn validate(&self) -> Result<()> {
        let mut violations = Vec::new();
        let mut positive = |field: &'static str, value: f64| {
            if !(value.is_finite() && value > 0.0) {
                violations.push(Violation::new(field, value, "> 0"));
            }
        };
        positive("length", self.length);
        positive("max_width", self.max_width);
        positive("nose_thickness", self.nose_thickness);
        positive("tail_thickness", self.tail_thickness);
        positive("max_thickness", self.max_thickness);

        for (field, value) in [
            ("nose_rocker", self.nose_rocker),
            ("tail_rocker", self.tail_rocker),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                violations.push(Violation::new(field, value, ">= 0"));
            }
        }

        if !(0.0..=1.0).contains(&self.rail_apex_ratio) {
            violations.push(Violation::new(
                "rail_apex_ratio",
                self.rail_apex_ratio,
                "in [0, 1]",
            ));
        }

        if self.slice_count < MIN_SLICE_COUNT {
            violations.push(Violation::new("slice_count", self.slice_count, ">= 2"));
        }

        for (field, value) in [
            ("tail_width", self.resolved_tail_width()),
            ("nose_width", self.resolved_nose_width()),
        ] {
            if !(value.is_finite() && value > 0.0) {
                violations.push(Violation::new(field, value, "> 0"));
            } else if self.max_width.is_finite() && value > self.max_width {
                violations.push(Violation::new(field, value, "<= max_width"));
            }
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(ParameterError::Invalid(violations).into())
        }
    }
}
