use geo::{Coord, Line};
use rstar::{RTree, RTreeObject, AABB};

use crate::ring::Ring;

/// One ring segment in an R-tree, associated with its position in the ring.
#[derive(Debug, Clone)]
pub struct Segment {
    idx: usize, // Index of the segment's start vertex in the ring
    line: Line<f64>,
}

impl Segment {
    pub(crate) fn new(idx: usize, start: Coord<f64>, end: Coord<f64>) -> Self {
        Self { idx, line: Line::new(start, end) }
    }

    /// Position of the segment in its ring.
    #[inline] pub fn idx(&self) -> usize { self.idx }

    /// The segment in ring storage order.
    #[inline] pub fn line(&self) -> &Line<f64> { &self.line }
}

impl RTreeObject for Segment {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(self.line.start.into(), self.line.end.into())
    }
}

/// Bulk-loaded R-tree over the segments of one ring.
///
/// Used both as the segment-set mutual intersector of the base ring and as
/// the backing structure of [`IndexedPointLocator`](crate::locate::IndexedPointLocator).
#[derive(Debug, Clone)]
pub struct SegmentIndex {
    rtree: RTree<Segment>,
}

impl SegmentIndex {
    pub fn new(ring: &Ring<'_>) -> Self {
        Self {
            rtree: RTree::bulk_load(
                (0..ring.num_segments())
                    .map(|i| {
                        let (start, end) = ring.segment(i);
                        Segment::new(i, start, end)
                    })
                    .collect()
            ),
        }
    }

    #[inline] pub fn len(&self) -> usize { self.rtree.size() }

    #[inline] pub fn is_empty(&self) -> bool { self.rtree.size() == 0 }

    /// Segments whose envelope intersects (or touches) `envelope`.
    #[inline]
    pub fn query(&self, envelope: &AABB<[f64; 2]>) -> impl Iterator<Item = &Segment> {
        self.rtree.locate_in_envelope_intersecting(envelope)
    }

    /// Every `(query segment, indexed segment)` position pair whose envelopes
    /// intersect. Pairs are produced in no particular order.
    pub fn candidates<'a>(&'a self, query: &'a Ring<'_>) -> impl Iterator<Item = (usize, usize)> + 'a {
        (0..query.num_segments()).flat_map(move |i| {
            let (start, end) = query.segment(i);
            let envelope = AABB::from_corners(start.into(), end.into());
            self.rtree.locate_in_envelope_intersecting(&envelope)
                .map(move |segment| (i, segment.idx()))
        })
    }
}
