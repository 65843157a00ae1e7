/// Length units accepted at the parameter boundary.
///
/// All geometry inside the crate is in centimetres. Values entered in any other
/// unit are converted once, before generation, and never mixed afterwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Unit {
    #[default]
    Centimeters,
    Inches,
}

/// Centimetres per inch.
pub const CM_PER_INCH: f64 = 2.54;

impl Unit {
    /// Converts `value` expressed in this unit to centimetres.
    #[must_use]
    pub fn to_centimeters(self, value: f64) -> f64 {
        match self {
            Self::Centimeters => value,
            Self::Inches => value * CM_PER_INCH,
        }
    }

    /// Converts `value` in centimetres to this unit.
    #[must_use]
    pub fn from_centimeters(self, value: f64) -> f64 {
        match self {
            Self::Centimeters => value,
            Self::Inches => value / CM_PER_INCH,
        }
    }

    /// Short display suffix.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Centimeters => "cm",
            Self::Inches => "in",
        }
    }
}
