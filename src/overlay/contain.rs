use rstar::{Envelope, AABB};

use crate::locate::{CoordPos, PointLocator};
use crate::ring::Ring;

/// Area of `ring` if it lies inside the region of `locator`, else `0.0`.
///
/// Only valid when the two boundaries do not intersect: then the rings are
/// either disjoint or nested, and testing a single vertex decides which.
pub(crate) fn contained_ring_area(ring: &Ring<'_>, envelope: &AABB<[f64; 2]>, locator: &impl PointLocator) -> f64 {
    let pt = ring.first();

    // fast check for disjoint
    if !envelope.contains_point(&[pt.x, pt.y]) { return 0.0 }
    // full check for contained
    if locator.locate(pt) != CoordPos::Inside { return 0.0 }

    ring.area()
}
