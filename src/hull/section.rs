use crate::error::{GeometryError, ParameterError, Result};
use crate::geometry::profile::check_fraction;
use crate::math::{is_finite3, Point3, TOLERANCE};

/// Longitudinal position of a slice: its index and fraction `t = index / slice_count`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Station {
    pub index: u32,
    pub t: f64,
}

impl Station {
    /// Creates the station for slice `index` out of `slice_count`.
    ///
    /// `index == slice_count` gives `t = 1.0` exactly.
    #[must_use]
    pub fn new(index: u32, slice_count: u32) -> Self {
        Self {
            index,
            t: f64::from(index) / f64::from(slice_count),
        }
    }
}

/// Profile values sampled at one station.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StationSample {
    /// Height of the bottom (rocker).
    pub rocker: f64,
    /// Half-width (outline).
    pub half_width: f64,
    /// Local hull thickness.
    pub thickness: f64,
}

/// A transverse cross-section of the hull at one station.
///
/// Holds three points in order bottom stringer → rail apex → deck stringer,
/// all at the same `x`. The profile is always closed by the straight edge
/// from the deck back to the bottom along the stringer (see
/// [`CrossSection::closing_edge`]), so it can be handed to a loft as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct CrossSection {
    station: Station,
    points: [Point3; 3],
    thickness: f64,
}

impl CrossSection {
    /// Slice index, 0 at the tail.
    #[must_use]
    pub fn index(&self) -> u32 {
        self.station.index
    }

    /// Longitudinal fraction in `[0, 1]`.
    #[must_use]
    pub fn t(&self) -> f64 {
        self.station.t
    }

    /// Longitudinal coordinate shared by all points.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.points[0].x
    }

    #[must_use]
    pub fn bottom(&self) -> &Point3 {
        &self.points[0]
    }

    #[must_use]
    pub fn rail_apex(&self) -> &Point3 {
        &self.points[1]
    }

    #[must_use]
    pub fn deck(&self) -> &Point3 {
        &self.points[2]
    }

    /// The curve points in order bottom, rail apex, deck.
    #[must_use]
    pub fn points(&self) -> &[Point3; 3] {
        &self.points
    }

    /// Local thickness used to build this section.
    #[must_use]
    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    /// The stringer edge that closes the profile, from deck to bottom.
    #[must_use]
    pub fn closing_edge(&self) -> [Point3; 2] {
        [self.points[2], self.points[0]]
    }

    /// The closed loop: bottom, rail apex, deck, then back to bottom.
    #[must_use]
    pub fn closed_loop(&self) -> [Point3; 4] {
        [self.points[0], self.points[1], self.points[2], self.points[0]]
    }

    /// Signed area of the closed profile in the YZ plane (shoelace formula).
    ///
    /// Coordinates are taken relative to the bottom stringer, so large rocker
    /// values do not cancel out. Positive and finite for every section
    /// produced by [`CrossSectionBuilder`].
    #[must_use]
    pub fn area(&self) -> f64 {
        let origin = self.points[0];
        let twice: f64 = self
            .closed_loop()
            .windows(2)
            .map(|w| {
                let (a, b) = (w[0] - origin, w[1] - origin);
                a.y * b.z - b.y * a.z
            })
            .sum();
        twice * 0.5
    }
}

/// Builds cross-sections for a hull of a given length.
#[derive(Debug, Clone, Copy)]
pub struct CrossSectionBuilder {
    length: f64,
}

impl CrossSectionBuilder {
    /// Creates a builder for a hull of `length`.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::NonPositive`] if `length` is not positive.
    pub fn new(length: f64) -> Result<Self> {
        if length.is_finite() && length > 0.0 {
            Ok(Self { length })
        } else {
            Err(ParameterError::NonPositive {
                parameter: "length",
                value: length,
            }
            .into())
        }
    }

    /// Builds the section at `station` from its sampled profile values.
    ///
    /// With `x = length * t` the points are:
    /// - bottom stringer `(x, 0, rocker)`
    /// - rail apex `(x, half_width, rocker + thickness * rail_apex_ratio)`
    /// - deck stringer `(x, 0, rocker + thickness)`
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError`] if `t` or `rail_apex_ratio` is outside
    /// `[0, 1]` or the thickness is not positive, [`GeometryError::NonFinite`]
    /// for non-finite samples or area, and [`GeometryError::Degenerate`] if the rail
    /// apex sits on the stringer or the closed profile encloses no area.
    pub fn build(
        &self,
        station: Station,
        sample: StationSample,
        rail_apex_ratio: f64,
    ) -> Result<CrossSection> {
        check_fraction("t", station.t)?;
        check_fraction("rail_apex_ratio", rail_apex_ratio)?;
        if !(sample.thickness.is_finite() && sample.thickness > 0.0) {
            return Err(ParameterError::NonPositive {
                parameter: "thickness",
                value: sample.thickness,
            }
            .into());
        }
        if !(sample.rocker.is_finite() && sample.half_width.is_finite()) {
            return Err(GeometryError::NonFinite("station sample").into());
        }
        if sample.half_width < TOLERANCE {
            return Err(GeometryError::Degenerate(format!(
                "rail apex lies on the stringer at station {}",
                station.index
            ))
            .into());
        }

        let x = self.length * station.t;
        let bottom = Point3::new(x, 0.0, sample.rocker);
        let rail = Point3::new(
            x,
            sample.half_width,
            sample.rocker + sample.thickness * rail_apex_ratio,
        );
        let deck = Point3::new(x, 0.0, sample.rocker + sample.thickness);
        if ![bottom, rail, deck].iter().all(is_finite3) {
            return Err(GeometryError::NonFinite("cross-section point").into());
        }

        let section = CrossSection {
            station,
            points: [bottom, rail, deck],
            thickness: sample.thickness,
        };
        let area = section.area();
        if !area.is_finite() {
            return Err(GeometryError::NonFinite("cross-section area").into());
        }
        if area < TOLERANCE {
            return Err(GeometryError::Degenerate(format!(
                "cross-section {} encloses no area",
                station.index
            ))
            .into());
        }
        Ok(section)
    }
}
