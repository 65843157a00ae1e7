use thiserror::Error;

use crate::error::HullError;
use crate::math::Point3;

use super::CrossSection;

/// The host geometry kernel that draws reference curves and lofts the hull.
///
/// Implemented by CAD integrations. Every profile passed to
/// [`create_closed_profile`](LoftKernel::create_closed_profile) is already
/// closed and finite, and [`loft_through_profiles`](LoftKernel::loft_through_profiles)
/// always receives at least three profiles in tail-to-nose order.
pub trait LoftKernel {
    /// Handle to a sketched curve.
    type Curve;
    /// Handle to a closed planar profile.
    type Profile;
    /// Handle to the lofted body.
    type Body;
    type Error: std::error::Error + 'static;

    /// Draws a fitted curve through `points`.
    ///
    /// # Errors
    ///
    /// Returns the kernel's own error if the curve cannot be created.
    fn create_sketch_curve(&mut self, points: &[Point3]) -> Result<Self::Curve, Self::Error>;

    /// Creates a closed profile from a cross-section: a fitted curve through
    /// its three points plus its closing edge.
    ///
    /// # Errors
    ///
    /// Returns the kernel's own error if the profile cannot be created.
    fn create_closed_profile(&mut self, section: &CrossSection) -> Result<Self::Profile, Self::Error>;

    /// Lofts a surface or solid through the ordered profiles.
    ///
    /// # Errors
    ///
    /// Returns the kernel's own error if the loft fails.
    fn loft_through_profiles(&mut self, profiles: Vec<Self::Profile>) -> Result<Self::Body, Self::Error>;
}

/// Kernel handles produced by [`HullGeometry::loft_with`](super::HullGeometry::loft_with).
pub struct LoftedHull<K: LoftKernel> {
    pub rocker: K::Curve,
    pub outline: K::Curve,
    pub body: K::Body,
}

/// Failure while handing a hull to a [`LoftKernel`].
#[derive(Debug, Error)]
pub enum HandoffError<E: std::error::Error + 'static> {
    #[error(transparent)]
    Hull(#[from] HullError),

    #[error("loft kernel failed: {0}")]
    Kernel(#[source] E),
}
