mod generator;
mod hull_geometry;
mod kernel;
mod params;
mod section;

pub use generator::{generate, HullGenerator};
pub use hull_geometry::HullGeometry;
pub use kernel::{HandoffError, LoftKernel, LoftedHull};
pub use params::{HullParameters, DEFAULT_NOSE_WIDTH, DEFAULT_TAIL_WIDTH_RATIO, MIN_SLICE_COUNT};
pub use section::{CrossSection, CrossSectionBuilder, Station, StationSample};
