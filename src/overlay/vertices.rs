//! Edge-vector contributions of vertices lying strictly inside the other
//! input. Each such vertex is a vertex of the result, carrying both of its
//! parent edges.

use rstar::{Envelope, AABB};

use crate::algorithm::edge_vector_term;
use crate::index::KdTree;
use crate::locate::{CoordPos, PointLocator};
use crate::ring::Ring;

/// Doubled-area contribution of the vertices of `ring` inside the region of
/// `locator`, scanning every vertex. `envelope` bounds that region and is used
/// as a cheap pre-check before locating.
pub(crate) fn interior_vertices_area(ring: &Ring<'_>, envelope: &AABB<[f64; 2]>, locator: &impl PointLocator) -> f64 {
    (0..ring.num_vertices())
        .filter(|&i| {
            let v = ring.coord(i);
            envelope.contains_point(&[v.x, v.y]) && locator.locate(v) == CoordPos::Inside
        })
        .map(|i| vertex_term(ring, i))
        .sum()
}

/// As [`interior_vertices_area`], but candidate vertices of `ring` come from
/// its prebuilt vertex index, queried with the envelope of the other region.
pub(crate) fn interior_vertices_area_indexed(
    ring:     &Ring<'_>,
    index:    &KdTree<usize>,
    envelope: &AABB<[f64; 2]>,
    locator:  &impl PointLocator,
) -> f64 {
    index.query(envelope).into_iter()
        .map(|node| *node.data())
        .filter(|&i| locator.locate(ring.coord(i)) == CoordPos::Inside)
        .map(|i| vertex_term(ring, i))
        .sum()
}

/// Both edge vectors at vertex `i`, with the normal on the interior side for
/// the ring's orientation.
#[inline]
fn vertex_term(ring: &Ring<'_>, i: usize) -> f64 {
    let v = ring.coord(i);
    let (prev, next) = (ring.prev_vertex(i), ring.next_vertex(i));
    edge_vector_term(v, v, prev, ring.is_ccw()) + edge_vector_term(v, v, next, !ring.is_ccw())
}
