use std::borrow::Cow;

use geo::{Coord, LineString, Winding};
use rstar::{Envelope, AABB};

use crate::algorithm::ring_signed_area;
use crate::error::{OverlayAreaError, Result};

/// A closed polygon ring with its orientation, envelope and area computed
/// once at construction.
///
/// The coordinate sequence is never modified; segments are re-oriented to a
/// clockwise reading on access (see [`Ring::segment_cw`]) based on the
/// `is_ccw` flag carried alongside the coordinates.
#[derive(Debug, Clone)]
pub struct Ring<'a> {
    coords: Cow<'a, LineString<f64>>,
    is_ccw: bool,
    envelope: AABB<[f64; 2]>,
    area: f64,
}

impl<'a> Ring<'a> {
    /// Wrap a borrowed ring.
    pub fn new(line: &'a LineString<f64>) -> Result<Self> {
        Self::from_cow(Cow::Borrowed(line))
    }

    fn from_cow(coords: Cow<'a, LineString<f64>>) -> Result<Self> {
        let n = coords.0.len();
        if n < 4 {
            return Err(OverlayAreaError::InvalidRing(format!("expected at least 4 coordinates, got {n}")));
        }
        if !coords.is_closed() {
            return Err(OverlayAreaError::InvalidRing("first and last coordinates differ".into()));
        }

        let envelope = envelope_of(&coords.0);
        let area = ring_signed_area(&coords.0).abs();
        let is_ccw = coords.is_ccw();

        Ok(Self { coords, is_ccw, envelope, area })
    }

    /// All coordinates, including the closing duplicate.
    #[inline] pub fn coords(&self) -> &[Coord<f64>] { &self.coords.0 }

    /// The ring as a `LineString`.
    #[inline] pub fn line_string(&self) -> &LineString<f64> { &self.coords }

    /// Whether the ring is stored in counter-clockwise order.
    #[inline] pub fn is_ccw(&self) -> bool { self.is_ccw }

    /// Axis-aligned bounding box of the ring.
    #[inline] pub fn envelope(&self) -> &AABB<[f64; 2]> { &self.envelope }

    /// Unsigned area enclosed by the ring.
    #[inline] pub fn area(&self) -> f64 { self.area }

    /// Number of distinct vertices (the closing duplicate is not counted).
    #[inline] pub fn num_vertices(&self) -> usize { self.coords.0.len() - 1 }

    /// Number of segments; segment `i` runs from vertex `i` to vertex `i + 1`.
    #[inline] pub fn num_segments(&self) -> usize { self.coords.0.len() - 1 }

    /// Coordinate at position `i`.
    #[inline] pub fn coord(&self, i: usize) -> Coord<f64> { self.coords.0[i] }

    /// The first coordinate of the ring.
    #[inline] pub fn first(&self) -> Coord<f64> { self.coords.0[0] }

    /// Vertex preceding vertex `i`, wrapping past the closing duplicate.
    #[inline]
    pub fn prev_vertex(&self, i: usize) -> Coord<f64> {
        if i == 0 { self.coords.0[self.coords.0.len() - 2] } else { self.coords.0[i - 1] }
    }

    /// Vertex following vertex `i`, wrapping past the closing duplicate.
    #[inline]
    pub fn next_vertex(&self, i: usize) -> Coord<f64> {
        let j = i + 1;
        if j >= self.coords.0.len() { self.coords.0[1] } else { self.coords.0[j] }
    }

    /// Segment `i` in storage order.
    #[inline]
    pub fn segment(&self, i: usize) -> (Coord<f64>, Coord<f64>) {
        (self.coords.0[i], self.coords.0[i + 1])
    }

    /// Segment `i` read in clockwise order: endpoints are swapped when the
    /// ring is stored counter-clockwise.
    #[inline]
    pub fn segment_cw(&self, i: usize) -> (Coord<f64>, Coord<f64>) {
        let (p0, p1) = self.segment(i);
        if self.is_ccw { (p1, p0) } else { (p0, p1) }
    }

    /// The vertex following the clockwise end of segment `i` when the ring is
    /// traversed clockwise.
    #[inline]
    pub fn cw_successor(&self, i: usize) -> Coord<f64> {
        if self.is_ccw { self.prev_vertex(i) } else { self.next_vertex(i + 1) }
    }
}

impl Ring<'static> {
    /// Wrap an owned ring.
    pub fn owned(line: LineString<f64>) -> Result<Self> {
        Self::from_cow(Cow::Owned(line))
    }
}

/// Envelope of a coordinate slice. Empty input yields `AABB::new_empty()`.
pub(crate) fn envelope_of(coords: &[Coord<f64>]) -> AABB<[f64; 2]> {
    let Some(first) = coords.first() else { return AABB::new_empty() };
    let (min, max) = coords.iter().fold((*first, *first), |(min, max), c| (
        Coord { x: min.x.min(c.x), y: min.y.min(c.y) },
        Coord { x: max.x.max(c.x), y: max.y.max(c.y) },
    ));
    AABB::from_corners([min.x, min.y], [max.x, max.y])
}
