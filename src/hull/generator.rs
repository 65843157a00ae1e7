use tracing::{debug, trace};

use crate::error::{GeometryError, Result};
use crate::geometry::{ProfileCurve, ThicknessCurve};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::section::{CrossSectionBuilder, Station, StationSample};
use super::{CrossSection, HullGeometry, HullParameters};

/// Generates hull geometry from a set of [`HullParameters`].
///
/// The run is a pure function of the parameters: no I/O, no shared state,
/// and identical parameters always produce identical geometry.
pub struct HullGenerator {
    params: HullParameters,
}

impl HullGenerator {
    /// Creates a new `HullGenerator`.
    #[must_use]
    pub fn new(params: HullParameters) -> Self {
        Self { params }
    }

    /// Executes the generation.
    ///
    /// Validates the parameters, builds the rocker, outline and thickness
    /// profiles once, then builds `slice_count + 1` cross-sections at
    /// `t = i / slice_count`. Stations are independent of each other; with the
    /// `parallel` feature they are computed on the rayon pool and collected
    /// back in index order.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::Invalid`](crate::error::ParameterError::Invalid)
    /// listing every violated field, or a [`GeometryError`] if a section comes
    /// out degenerate or non-finite.
    pub fn execute(&self) -> Result<HullGeometry> {
        let p = &self.params;
        p.validate()?;
        debug!(
            length = p.length,
            max_width = p.max_width,
            slice_count = p.slice_count,
            "generating hull"
        );

        let stations = Stations {
            rocker: ProfileCurve::rocker(p.length, p.tail_rocker, p.nose_rocker)?,
            outline: ProfileCurve::outline(
                p.length,
                p.max_width,
                p.resolved_tail_width(),
                p.resolved_nose_width(),
            )?,
            thickness: ThicknessCurve::new(
                p.thickness_model,
                p.tail_thickness,
                p.nose_thickness,
                p.max_thickness,
            )?,
            builder: CrossSectionBuilder::new(p.length)?,
            rail_apex_ratio: p.rail_apex_ratio,
            slice_count: p.slice_count,
        };

        let sections = stations.build_all()?;
        check_sections(&sections, p.slice_count, p.length)?;
        debug!(sections = sections.len(), "hull generated");

        let Stations {
            rocker, outline, ..
        } = stations;
        Ok(HullGeometry::new(*p, rocker, outline, sections))
    }
}

/// Generates hull geometry; shorthand for `HullGenerator::new(*params).execute()`.
///
/// # Errors
///
/// See [`HullGenerator::execute`].
pub fn generate(params: &HullParameters) -> Result<HullGeometry> {
    HullGenerator::new(*params).execute()
}

/// Shared, read-only inputs of every station.
struct Stations {
    rocker: ProfileCurve,
    outline: ProfileCurve,
    thickness: ThicknessCurve,
    builder: CrossSectionBuilder,
    rail_apex_ratio: f64,
    slice_count: u32,
}

impl Stations {
    fn build(&self, index: u32) -> Result<CrossSection> {
        let station = Station::new(index, self.slice_count);
        let sample = StationSample {
            rocker: self.rocker.sample_at(station.t)?,
            half_width: self.outline.sample_at(station.t)?,
            thickness: self.thickness.sample_at(station.t)?,
        };
        trace!(
            index,
            t = station.t,
            rocker = sample.rocker,
            half_width = sample.half_width,
            thickness = sample.thickness,
            "station sampled"
        );
        self.builder.build(station, sample, self.rail_apex_ratio)
    }

    #[cfg(feature = "parallel")]
    fn build_all(&self) -> Result<Vec<CrossSection>> {
        (0..=self.slice_count)
            .into_par_iter()
            .map(|i| self.build(i))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn build_all(&self) -> Result<Vec<CrossSection>> {
        (0..=self.slice_count).map(|i| self.build(i)).collect()
    }
}

/// Checks the assembled sequence: one section per station in index order,
/// `x` strictly increasing from `0` to `length`.
#[allow(clippy::float_cmp)]
fn check_sections(sections: &[CrossSection], slice_count: u32, length: f64) -> Result<()> {
    let expected = usize::try_from(slice_count).map_or(usize::MAX, |n| n.saturating_add(1));
    if sections.len() != expected {
        return Err(GeometryError::Degenerate(format!(
            "expected {expected} cross-sections, got {}",
            sections.len()
        ))
        .into());
    }
    if sections.iter().zip(0_u32..).any(|(s, i)| s.index() != i) {
        return Err(GeometryError::Degenerate("cross-sections out of order".into()).into());
    }
    if sections.windows(2).any(|w| w[1].x() <= w[0].x()) {
        return Err(GeometryError::Degenerate(
            "cross-section positions are not strictly increasing".into(),
        )
        .into());
    }
    let (Some(first), Some(last)) = (sections.first(), sections.last()) else {
        return Err(GeometryError::Degenerate("no cross-sections".into()).into());
    };
    if first.x() != 0.0 || last.x() != length {
        return Err(GeometryError::Degenerate(format!(
            "cross-sections span [{}, {}], expected [0, {length}]",
            first.x(),
            last.x()
        ))
        .into());
    }
    Ok(())
}
