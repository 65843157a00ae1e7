use crate::geometry::ProfileCurve;

use super::kernel::{HandoffError, LoftKernel, LoftedHull};
use super::{CrossSection, HullParameters};

/// Generated hull: ordered cross-sections plus the two governing profiles.
///
/// Only [`HullGenerator`](super::HullGenerator) constructs this type, so every
/// instance holds at least three closed, finite sections with strictly
/// increasing `x` from `0` to `length`.
#[derive(Debug, Clone, PartialEq)]
pub struct HullGeometry {
    parameters: HullParameters,
    rocker: ProfileCurve,
    outline: ProfileCurve,
    sections: Vec<CrossSection>,
}

impl HullGeometry {
    pub(crate) fn new(
        parameters: HullParameters,
        rocker: ProfileCurve,
        outline: ProfileCurve,
        sections: Vec<CrossSection>,
    ) -> Self {
        Self {
            parameters,
            rocker,
            outline,
            sections,
        }
    }

    /// The parameters this hull was generated from.
    #[must_use]
    pub fn parameters(&self) -> &HullParameters {
        &self.parameters
    }

    #[must_use]
    pub fn rocker(&self) -> &ProfileCurve {
        &self.rocker
    }

    #[must_use]
    pub fn outline(&self) -> &ProfileCurve {
        &self.outline
    }

    /// Cross-sections ordered from tail to nose.
    #[must_use]
    pub fn sections(&self) -> &[CrossSection] {
        &self.sections
    }

    /// Hands the hull to a kernel: draws the rocker and outline reference
    /// curves with `reference_steps` steps per segment, creates one closed
    /// profile per section in order, then lofts through them.
    ///
    /// # Errors
    ///
    /// Returns [`HandoffError::Hull`] if `reference_steps` is zero and
    /// [`HandoffError::Kernel`] if the kernel rejects any call.
    pub fn loft_with<K: LoftKernel>(
        &self,
        kernel: &mut K,
        reference_steps: u32,
    ) -> Result<LoftedHull<K>, HandoffError<K::Error>> {
        let rocker_points = self.rocker.reference_points(reference_steps)?;
        let outline_points = self.outline.reference_points(reference_steps)?;

        let rocker = kernel
            .create_sketch_curve(&rocker_points)
            .map_err(HandoffError::Kernel)?;
        let outline = kernel
            .create_sketch_curve(&outline_points)
            .map_err(HandoffError::Kernel)?;

        let profiles = self
            .sections
            .iter()
            .map(|section| kernel.create_closed_profile(section))
            .collect::<Result<Vec<_>, _>>()
            .map_err(HandoffError::Kernel)?;
        let body = kernel
            .loft_through_profiles(profiles)
            .map_err(HandoffError::Kernel)?;

        Ok(LoftedHull {
            rocker,
            outline,
            body,
        })
    }
}
