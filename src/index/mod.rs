//! Spatial indexes over the vertices and segments of a ring.

mod kdtree;
mod segment;

pub use kdtree::{build_vertex_index, KdNode, KdTree};
pub use segment::{Segment, SegmentIndex};
