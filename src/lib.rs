pub mod error;
pub mod geometry;
pub mod hull;
pub mod math;
pub mod units;

pub use error::{HullError, Result};
pub use hull::{generate, CrossSection, HullGenerator, HullGeometry, HullParameters, LoftKernel};
