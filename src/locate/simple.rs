use geo::algorithm::coordinate_position::{CoordPos, CoordinatePosition};
use geo::{Coord, LineString, Polygon};

use super::PointLocator;

/// Non-indexed locator backed by `geo`'s coordinate position test.
///
/// Building it costs nothing beyond a copy of the polygon, so it is the
/// cheaper choice when only one or two points will be located.
#[derive(Debug, Clone)]
pub struct SimplePointLocator {
    polygon: Polygon<f64>,
}

impl SimplePointLocator {
    pub fn new(polygon: Polygon<f64>) -> Self {
        Self { polygon }
    }

    /// Locator over the region bounded by a single ring.
    pub fn from_ring(ring: &LineString<f64>) -> Self {
        Self::new(Polygon::new(ring.clone(), vec![]))
    }
}

impl PointLocator for SimplePointLocator {
    #[inline]
    fn locate(&self, coord: Coord<f64>) -> CoordPos {
        self.polygon.coordinate_position(&coord)
    }
}
