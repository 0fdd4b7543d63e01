//! Low-level geometric primitives used by the intersection-area engine.

mod angle;
mod area;
mod intersect;

pub use angle::compare_sweeps;
pub use area::{edge_vector_term, ring_signed_area};
pub use intersect::{intersect_segments, lies_inside_segment, SegmentIntersection};

use geo::kernels::{Kernel, Orientation, RobustKernel};
use geo::Coord;

/// Orientation of `r` relative to the directed line `p → q`, using robust
/// adaptive-precision predicates.
#[inline]
pub fn orientation(p: Coord<f64>, q: Coord<f64>, r: Coord<f64>) -> Orientation {
    <RobustKernel as Kernel<f64>>::orient2d(p, q, r)
}
