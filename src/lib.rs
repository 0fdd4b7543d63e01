#![doc = "Topology-free polygon intersection area"]
//!
//! Computes the area of the intersection of two polygonal geometries without
//! building the overlay itself. The area of a polygon can be written as a sum
//! of partial terms, one per *edge vector* (a boundary point together with the
//! direction of the edge it lies on). The intersection area is therefore the
//! sum over the edge vectors of the intersection resultant, and those are
//! fully determined by
//!
//! * the points where the two boundaries cross, and
//! * the vertices of each input lying strictly inside the other input,
//!
//! each carrying the direction of its parent input edge. Finding these points
//! needs no noding, ring building or dangling-edge cleanup.
//!
//! ```
//! use geo::{Geometry, Rect};
//! use overlay_area::intersection_area;
//!
//! let a: Geometry<f64> = Rect::new((0.0, 0.0), (1.0, 1.0)).to_polygon().into();
//! let b: Geometry<f64> = Rect::new((0.5, 0.5), (1.5, 1.5)).to_polygon().into();
//! let area = intersection_area(&a, &b).unwrap();
//! assert!((area - 0.25).abs() < 1e-12);
//! ```
//!
//! Input rings must be simple (no self-intersections); invalid input yields
//! an unspecified result.

pub mod algorithm;
mod error;
pub mod index;
pub mod io;
pub mod locate;
mod overlay;
mod ring;

#[doc(inline)]
pub use error::{OverlayAreaError, Result};

#[doc(inline)]
pub use overlay::{
    coverage_fraction, intersection_area, intersection_area_with_seed, intersection_over_union, OverlayArea, DEFAULT_SEED,
};

#[doc(inline)]
pub use ring::Ring;
