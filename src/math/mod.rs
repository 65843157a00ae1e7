pub mod bezier;

pub use bezier::{evaluate, sample_sequence, BezierPoint, BezierSamples};

/// 2D point type. `x` is the longitudinal position, `y` the profile value.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type. X = length, Y = half-width, Z = height.
pub type Point3 = nalgebra::Point3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Returns `true` if every coordinate of `p` is finite.
#[must_use]
pub fn is_finite3(p: &Point3) -> bool {
    p.coords.iter().all(|c| c.is_finite())
}
