pub mod profile;
pub mod segment;
pub mod thickness;

pub use profile::{OutlineBias, ProfileCurve, ProfilePlane};
pub use segment::BezierSegment;
pub use thickness::{
    linear_thickness, BezierThickness, ThicknessCurve, ThicknessModel, ThicknessProfile,
};
