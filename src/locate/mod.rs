//! Point-in-polygon location against a single ring.

mod indexed;
mod simple;

pub use geo::algorithm::coordinate_position::CoordPos;
pub use indexed::IndexedPointLocator;
pub use simple::SimplePointLocator;

use geo::Coord;

/// Classifies a coordinate as inside, on the boundary of, or outside an
/// areal geometry.
///
/// Implementations hold only immutable state, so one locator can serve
/// queries from several threads at once.
pub trait PointLocator {
    fn locate(&self, coord: Coord<f64>) -> CoordPos;
}
