use tracing::{debug, trace};

use super::classify::intersection_delta;
use super::contain::contained_ring_area;
use super::vertices::{interior_vertices_area, interior_vertices_area_indexed};
use super::OverlayArea;
use crate::locate::{IndexedPointLocator, SimplePointLocator};
use crate::ring::Ring;

impl OverlayArea {
    /// Area of the intersection of the base polygon with the region bounded
    /// by `ring`.
    pub(crate) fn ring_intersection_area(&self, ring: &Ring<'_>) -> f64 {
        let (intersections, area_intersections) = self.segments.candidates(ring)
            .filter_map(|(i, j)| intersection_delta(ring, i, &self.ring, j))
            .fold((0usize, 0.0), |(count, sum), delta| (count + 1, sum + delta));
        trace!(intersections, "classified candidate segment pairs");

        // No boundary intersections: the rings are disjoint or nested. The sum
        // alone cannot decide this, as terms can cancel or vanish at the origin.
        if intersections == 0 {
            debug!("no boundary intersections, resolving containment");
            return self.contained_or_disjoint_area(ring);
        }

        let area_vert_other = interior_vertices_area(ring, self.ring.envelope(), &self.locator);

        let locator = IndexedPointLocator::new(ring);
        let area_vert_base = interior_vertices_area_indexed(&self.ring, &self.vertices, ring.envelope(), &locator);

        trace!(area_intersections, area_vert_other, area_vert_base, "edge vector sums");
        ((area_intersections + area_vert_other + area_vert_base) / 2.0).max(0.0)
    }

    /// Area for rings whose boundaries do not intersect: the area of whichever
    /// ring is contained in the other, or `0.0` if they are disjoint.
    fn contained_or_disjoint_area(&self, ring: &Ring<'_>) -> f64 {
        let area = contained_ring_area(ring, self.ring.envelope(), &self.locator);
        if area != 0.0 { return area }

        // Only one point is located, so an unindexed locator is cheaper.
        let locator = SimplePointLocator::from_ring(ring.line_string());
        contained_ring_area(&self.ring, ring.envelope(), &locator)
    }
}
