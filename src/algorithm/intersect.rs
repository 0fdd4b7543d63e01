use geo::algorithm::line_intersection::{line_intersection, LineIntersection};
use geo::kernels::Orientation;
use geo::{Coord, Line};

use super::orientation;

/// Outcome of intersecting two closed line segments.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SegmentIntersection {
    /// The segments are disjoint.
    None,
    /// The segments cross at a single point interior to both. The coordinate
    /// is the computed crossing point, which may be rounded onto an endpoint.
    Proper(Coord<f64>),
    /// The segments touch: every intersection point is an endpoint of at
    /// least one of them. Covers vertex-on-segment, shared endpoints and
    /// collinear overlap.
    Touch,
}

/// Intersects segment `a0 → a1` with segment `b0 → b1`.
///
/// A pure function: no intersector state is kept between calls. The kind of
/// intersection is decided with robust orientation tests; only the point of a
/// proper crossing is computed in floating point.
pub fn intersect_segments(a0: Coord<f64>, a1: Coord<f64>, b0: Coord<f64>, b1: Coord<f64>) -> SegmentIntersection {
    match line_intersection(Line::new(a0, a1), Line::new(b0, b1)) {
        None => SegmentIntersection::None,
        Some(LineIntersection::SinglePoint { intersection, is_proper: true }) => {
            SegmentIntersection::Proper(intersection)
        }
        Some(_) => SegmentIntersection::Touch,
    }
}

/// Whether `p` lies on segment `s0 → s1` strictly between its endpoints.
pub fn lies_inside_segment(p: Coord<f64>, s0: Coord<f64>, s1: Coord<f64>) -> bool {
    p != s0 && p != s1
        && orientation(s0, s1, p) == Orientation::Collinear
        && p.x >= s0.x.min(s1.x) && p.x <= s0.x.max(s1.x)
        && p.y >= s0.y.min(s1.y) && p.y <= s0.y.max(s1.y)
}

#[cfg(test)]
mod tests {
    use geo::coord;

    use super::*;

    #[test]
    fn disjoint() {
        let r = intersect_segments(
            coord! { x: 0.0, y: 0.0 }, coord! { x: 1.0, y: 0.0 },
            coord! { x: 0.0, y: 1.0 }, coord! { x: 1.0, y: 1.0 },
        );
        assert_eq!(r, SegmentIntersection::None);
    }

    #[test]
    fn proper_crossing() {
        let r = intersect_segments(
            coord! { x: 0.0, y: 0.0 }, coord! { x: 2.0, y: 2.0 },
            coord! { x: 0.0, y: 2.0 }, coord! { x: 2.0, y: 0.0 },
        );
        let SegmentIntersection::Proper(p) = r else { panic!("expected crossing, got {r:?}") };
        assert!((p.x - 1.0).abs() < 1e-12 && (p.y - 1.0).abs() < 1e-12);
    }

    /// Decimal grid coordinates, rounded the way generated inputs are.
    fn grid(x: i32, y: i32) -> Coord<f64> {
        coord! { x: (x - 3) as f64 * 0.1 + 0.3, y: (y + 7) as f64 * 0.1 - 0.7 }
    }

    /// The second segment starts a hair off the first; the crossing stays
    /// proper even though its point rounds onto that start.
    #[test]
    fn crossing_next_to_vertex_is_proper() {
        let r = intersect_segments(grid(2, -4), grid(4, -6), grid(3, -5), grid(2, -3));
        assert!(matches!(r, SegmentIntersection::Proper(_)), "got {r:?}");
        assert!(!lies_inside_segment(grid(3, -5), grid(2, -4), grid(4, -6)));
    }

    #[test]
    fn vertex_on_segment_is_touch() {
        let r = intersect_segments(
            coord! { x: 0.0, y: 0.0 }, coord! { x: 2.0, y: 0.0 },
            coord! { x: 1.0, y: 0.0 }, coord! { x: 1.0, y: 1.0 },
        );
        assert_eq!(r, SegmentIntersection::Touch);
    }

    #[test]
    fn shared_vertex_is_touch() {
        let r = intersect_segments(
            coord! { x: 0.0, y: 0.0 }, coord! { x: 1.0, y: 0.0 },
            coord! { x: 1.0, y: 0.0 }, coord! { x: 1.0, y: 1.0 },
        );
        assert_eq!(r, SegmentIntersection::Touch);
    }

    #[test]
    fn collinear_overlap_is_touch() {
        let r = intersect_segments(
            coord! { x: 0.0, y: 0.0 }, coord! { x: 2.0, y: 0.0 },
            coord! { x: 1.0, y: 0.0 }, coord! { x: 3.0, y: 0.0 },
        );
        assert_eq!(r, SegmentIntersection::Touch);
    }

    #[test]
    fn zero_length_segment_does_not_panic() {
        let p = coord! { x: 0.5, y: 0.0 };
        let r = intersect_segments(p, p, coord! { x: 0.0, y: 0.0 }, coord! { x: 1.0, y: 0.0 });
        assert!(matches!(r, SegmentIntersection::Touch | SegmentIntersection::None));
    }

    #[test]
    fn point_strictly_inside_segment() {
        let (s0, s1) = (coord! { x: 0.0, y: 0.0 }, coord! { x: 2.0, y: 2.0 });
        assert!(lies_inside_segment(coord! { x: 1.0, y: 1.0 }, s0, s1));
        assert!(!lies_inside_segment(s0, s0, s1));
        assert!(!lies_inside_segment(coord! { x: 3.0, y: 3.0 }, s0, s1));
        assert!(!lies_inside_segment(coord! { x: 1.0, y: 1.0000000000000002 }, s0, s1));
    }
}
