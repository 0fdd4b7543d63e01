//! Edge-vector contributions of boundary intersections.
//!
//! Both segments are read clockwise, so the interior of each input lies to
//! the right of its segments. For a proper crossing at `p` there are two
//! cases (`:R` / `:L` gives the side of the result interior):
//!
//! 1. A entering B, B exiting A: rays `p → a1 :R` and `p → b0 :L`;
//! 2. A exiting B, B entering A: rays `p → a0 :L` and `p → b1 :R`.
//!
//! Every other meeting of the boundaries is a node at a ring vertex, handled
//! once by [`node_delta`]. Rays always take the direction of the full parent
//! edge. Which case applies is decided with exact predicates only; computed
//! crossing points feed the terms and nothing else.

use geo::kernels::Orientation;
use geo::Coord;

use crate::algorithm::{
    compare_sweeps, edge_vector_term, intersect_segments, lies_inside_segment, orientation, SegmentIntersection,
};
use crate::ring::Ring;

/// Doubled-area delta contributed by the intersection of segment `a_idx` of
/// ring `a` with segment `b_idx` of ring `b`, or `None` if the segments do not
/// intersect.
///
/// Every intersecting segment pair of the two rings must be passed exactly
/// once, in any order. A node is attributed to the single pair whose segments
/// end there, or whose clockwise end lies inside the other segment.
pub(crate) fn intersection_delta(a: &Ring<'_>, a_idx: usize, b: &Ring<'_>, b_idx: usize) -> Option<f64> {
    let (a0, a1) = a.segment_cw(a_idx);
    let (b0, b1) = b.segment_cw(b_idx);

    match intersect_segments(a0, a1, b0, b1) {
        SegmentIntersection::None => None,
        SegmentIntersection::Proper(p) => Some(crossing_delta(p, a0, a1, b0, b1)),
        SegmentIntersection::Touch => {
            let mut delta = 0.0;
            if a1 == b1 {
                delta += node_delta(a1, (a0, a.cw_successor(a_idx)), (b0, b.cw_successor(b_idx)));
            } else {
                // Both can hold when the segments overlap head to head.
                if lies_inside_segment(a1, b0, b1) {
                    delta += node_delta(a1, (a0, a.cw_successor(a_idx)), (b0, b1));
                }
                if lies_inside_segment(b1, a0, a1) {
                    delta += node_delta(b1, (a0, a1), (b0, b.cw_successor(b_idx)));
                }
            }
            Some(delta)
        }
    }
}

fn crossing_delta(p: Coord<f64>, a0: Coord<f64>, a1: Coord<f64>, b0: Coord<f64>, b1: Coord<f64>) -> f64 {
    if orientation(a0, a1, b0) == Orientation::Clockwise {
        edge_vector_term(p, a0, a1, true) + edge_vector_term(p, b1, b0, false)
    } else {
        edge_vector_term(p, a1, a0, false) + edge_vector_term(p, b0, b1, true)
    }
}

/// Contribution at a node `v` where the boundaries meet. Each ring is given
/// by the clockwise predecessor and successor of `v` along its boundary: the
/// neighbouring ring vertices, or the segment endpoints when `v` lies inside
/// one of its segments.
///
/// Swept counter-clockwise, the interior of A at `v` spans `a0 → a2` and the
/// interior of B spans `b0 → b2`. An edge of one ring bounds the result when
/// it falls inside the sweep of the other; 0, 2 or 4 edges contribute. The
/// mix of strict and non-strict comparisons makes collinear edge pairs count
/// for ring A only.
fn node_delta(v: Coord<f64>, (a0, a2): (Coord<f64>, Coord<f64>), (b0, b2): (Coord<f64>, Coord<f64>)) -> f64 {
    let mut delta = 0.0;
    if compare_sweeps(v, b0, a0, b2).is_le() { delta += edge_vector_term(v, v, a0, false) }
    if compare_sweeps(v, b0, a2, b2).is_le() { delta += edge_vector_term(v, v, a2, true) }
    if compare_sweeps(v, a0, a0, b0).is_lt() && compare_sweeps(v, a0, b0, a2).is_le() {
        delta += edge_vector_term(v, v, b0, false)
    }
    if compare_sweeps(v, a0, b2, a2).is_lt() { delta += edge_vector_term(v, v, b2, true) }
    delta
}

#[cfg(test)]
mod tests {
    use geo::LineString;

    use super::*;

    fn square(x0: f64, y0: f64, side: f64) -> LineString<f64> {
        LineString::from(vec![
            (x0, y0), (x0 + side, y0), (x0 + side, y0 + side), (x0, y0 + side), (x0, y0),
        ])
    }

    fn total(a: &Ring<'_>, b: &Ring<'_>) -> f64 {
        let mut sum = 0.0;
        for i in 0..a.num_segments() {
            for j in 0..b.num_segments() {
                sum += intersection_delta(a, i, b, j).unwrap_or(0.0);
            }
        }
        sum
    }

    #[test]
    fn disjoint_rings_contribute_nothing() {
        let (a, b) = (square(0.0, 0.0, 1.0), square(3.0, 3.0, 1.0));
        assert_eq!(total(&Ring::new(&a).unwrap(), &Ring::new(&b).unwrap()), 0.0);
    }

    #[test]
    fn nested_rings_contribute_nothing() {
        let (a, b) = (square(0.0, 0.0, 10.0), square(2.0, 2.0, 2.0));
        assert_eq!(total(&Ring::new(&a).unwrap(), &Ring::new(&b).unwrap()), 0.0);
    }

    /// Identical rings: every contribution comes from shared vertices and the
    /// collinear edges are counted once, for ring A.
    #[test]
    fn identical_rings_give_twice_the_area() {
        let a = square(0.0, 0.0, 2.0);
        let ring = Ring::new(&a).unwrap();
        assert!((total(&ring, &ring) - 8.0).abs() < 1e-12);
    }

    #[test]
    fn opposite_orientations_agree() {
        let a = square(0.0, 0.0, 2.0);
        let mut b = square(0.0, 0.0, 2.0);
        b.0.reverse();
        let (ra, rb) = (Ring::new(&a).unwrap(), Ring::new(&b).unwrap());
        assert!((total(&ra, &rb) - 8.0).abs() < 1e-12);
    }

    /// Rings meeting only at a vertex at the origin: every term is anchored at
    /// the origin and vanishes, but the touch is still reported.
    #[test]
    fn vertex_touch_at_origin_is_zero() {
        let a = LineString::from(vec![(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (0.0, 0.0)]);
        let b = LineString::from(vec![(0.0, 0.0), (-1.0, 0.0), (0.0, -1.0), (0.0, 0.0)]);
        let (ra, rb) = (Ring::new(&a).unwrap(), Ring::new(&b).unwrap());
        assert_eq!(total(&ra, &rb), 0.0);
        assert!((0..ra.num_segments()).any(|i| (0..rb.num_segments()).any(|j| intersection_delta(&ra, i, &rb, j).is_some())));
    }

    #[test]
    fn non_intersecting_pair_is_none() {
        let (a, b) = (square(0.0, 0.0, 1.0), square(3.0, 3.0, 1.0));
        let (ra, rb) = (Ring::new(&a).unwrap(), Ring::new(&b).unwrap());
        assert_eq!(intersection_delta(&ra, 0, &rb, 0), None);
    }

    /// A triangle standing on the base edge at `(2, 0)`: the touch is
    /// reported by both triangle edges, only the one ending there counts.
    #[test]
    fn node_is_attributed_to_segment_ending_there() {
        let base = square(0.0, 0.0, 4.0);
        let tri = LineString::from(vec![(2.0, 0.0), (3.0, 2.0), (1.0, 2.0), (2.0, 0.0)]);
        let (rt, rb) = (Ring::new(&tri).unwrap(), Ring::new(&base).unwrap());
        assert!(intersection_delta(&rt, 0, &rb, 0).is_some_and(|delta| delta != 0.0));
        assert_eq!(intersection_delta(&rt, 2, &rb, 0), Some(0.0));
    }

    /// A square nested in the corner of a larger one: the segments ending at
    /// the shared corner overlap collinearly and still yield the corner terms.
    #[test]
    fn shared_corner_with_collinear_overlap() {
        let (small, large) = (square(1.0, 1.0, 2.0), square(1.0, 1.0, 4.0));
        let (rs, rl) = (Ring::new(&small).unwrap(), Ring::new(&large).unwrap());
        // Interior vertex (3, 3) of the small square adds 18; the result is twice the area, 8.
        assert!((total(&rs, &rl) + 18.0 - 8.0).abs() < 1e-12);
    }
}
