use geo::kernels::Orientation;
use geo::Coord;
use rstar::AABB;

use super::{CoordPos, PointLocator};
use crate::algorithm::orientation;
use crate::index::SegmentIndex;
use crate::ring::Ring;

/// Ray-crossing locator over an R-tree of ring segments.
///
/// Only segments whose envelope meets the horizontal ray from the query point
/// towards `+x` are examined, which makes repeated queries against a large
/// ring cheap.
#[derive(Debug, Clone)]
pub struct IndexedPointLocator {
    segments: SegmentIndex,
    max_x: f64,
}

impl IndexedPointLocator {
    pub fn new(ring: &Ring<'_>) -> Self {
        Self {
            segments: SegmentIndex::new(ring),
            max_x: ring.envelope().upper()[0],
        }
    }
}

impl PointLocator for IndexedPointLocator {
    fn locate(&self, coord: Coord<f64>) -> CoordPos {
        let ray = AABB::from_corners([coord.x, coord.y], [self.max_x.max(coord.x), coord.y]);

        let mut counter = RayCrossingCounter::new(coord);
        for segment in self.segments.query(&ray) {
            let line = segment.line();
            if counter.count_segment(line.start, line.end) { break }
        }
        counter.location()
    }
}

/// Counts crossings of the ray `y = p.y, x >= p.x` with ring segments,
/// detecting points that lie on a segment along the way.
struct RayCrossingCounter {
    p: Coord<f64>,
    crossings: usize,
    on_segment: bool,
}

impl RayCrossingCounter {
    fn new(p: Coord<f64>) -> Self {
        Self { p, crossings: 0, on_segment: false }
    }

    /// Count one segment; returns `true` once the point is known to lie on
    /// the boundary, after which further segments cannot change the answer.
    fn count_segment(&mut self, p1: Coord<f64>, p2: Coord<f64>) -> bool {
        let p = self.p;

        // Segment entirely to the left of the ray origin.
        if p1.x < p.x && p2.x < p.x { return false }

        if p == p1 || p == p2 {
            self.on_segment = true;
            return true;
        }

        // Horizontal segment on the ray line.
        if p1.y == p.y && p2.y == p.y {
            let (min_x, max_x) = (p1.x.min(p2.x), p1.x.max(p2.x));
            if p.x >= min_x && p.x <= max_x { self.on_segment = true }
            return self.on_segment;
        }

        // Half-open rule on y avoids double counting at shared vertices.
        if (p1.y > p.y && p2.y <= p.y) || (p2.y > p.y && p1.y <= p.y) {
            let mut orient = orientation(p1, p2, p);
            if orient == Orientation::Collinear {
                self.on_segment = true;
                return true;
            }
            if p2.y < p1.y {
                orient = match orient {
                    Orientation::Clockwise => Orientation::CounterClockwise,
                    _ => Orientation::Clockwise,
                };
            }
            if orient == Orientation::CounterClockwise { self.crossings += 1 }
        }
        false
    }

    fn location(&self) -> CoordPos {
        if self.on_segment {
            CoordPos::OnBoundary
        } else if self.crossings % 2 == 1 {
            CoordPos::Inside
        } else {
            CoordPos::Outside
        }
    }
}
