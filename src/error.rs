use std::fmt;

use thiserror::Error;

/// Top-level error type for hull generation.
#[derive(Debug, Error)]
pub enum HullError {
    #[error(transparent)]
    Parameter(#[from] ParameterError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Invalid inputs: a hull parameter, a sample position or a derived ratio is
/// outside its domain.
#[derive(Debug, Error)]
pub enum ParameterError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    OutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("parameter {parameter} = {value} must be positive")]
    NonPositive { parameter: &'static str, value: f64 },

    #[error("invalid hull parameters: {}", join_violations(.0))]
    Invalid(Vec<Violation>),
}

/// Numeric or structural degeneracy detected while evaluating geometry.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("non-finite value in {0}")]
    NonFinite(&'static str),

    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("segment {0} does not start where the previous one ends")]
    BrokenChain(usize),
}

/// One violated constraint of a [`HullParameters`](crate::hull::HullParameters) value.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    /// Name of the offending field.
    pub field: &'static str,
    /// The rejected value, formatted.
    pub found: String,
    /// Human-readable description of the accepted domain.
    pub expected: &'static str,
}

impl Violation {
    #[must_use]
    pub fn new(field: &'static str, found: impl fmt::Display, expected: &'static str) -> Self {
        Self {
            field,
            found: found.to_string(),
            expected,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {} (expected {})", self.field, self.found, self.expected)
    }
}

fn join_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl HullError {
    /// Returns the violated fields if this is a parameter validation failure.
    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        match self {
            Self::Parameter(ParameterError::Invalid(v)) => v.as_slice(),
            _ => &[],
        }
    }
}

/// Convenience type alias for results using [`HullError`].
pub type Result<T> = std::result::Result<T, HullError>;
