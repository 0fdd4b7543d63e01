mod analyzer;
mod classify;
mod compose;
mod contain;
mod vertices;

use std::borrow::Cow;

use geo::{Area, BoundingRect, Geometry, LineString, Polygon, Rect};
use rstar::{Envelope, AABB};
use tracing::{debug, trace};

use crate::error::{OverlayAreaError, Result};
use crate::index::{build_vertex_index, KdTree, SegmentIndex};
use crate::locate::IndexedPointLocator;
use crate::ring::Ring;

/// Seed of the vertex-index insertion permutation used unless one is given.
pub const DEFAULT_SEED: u64 = 0x5EED_0A7E;

/// Intersection-area engine for one hole-free base polygon.
///
/// Building it indexes the base ring once (a point locator, a segment index
/// and a vertex index); every [`intersection_area`](Self::intersection_area)
/// call then reuses those indexes against a new second operand. The value is
/// immutable after construction and can be shared across threads.
#[derive(Debug, Clone)]
pub struct OverlayArea {
    ring:     Ring<'static>,
    locator:  IndexedPointLocator,
    segments: SegmentIndex,
    vertices: KdTree<usize>,
}

impl OverlayArea {
    /// Index `polygon` as the base operand.
    ///
    /// Fails if the polygon has interior rings or an empty or invalid
    /// exterior.
    pub fn new(polygon: &Polygon<f64>) -> Result<Self> {
        Self::with_seed(polygon, DEFAULT_SEED)
    }

    /// As [`new`](Self::new), with an explicit seed for the order in which
    /// base vertices are inserted into the vertex index.
    pub fn with_seed(polygon: &Polygon<f64>, seed: u64) -> Result<Self> {
        let holes = polygon.interiors().len();
        if holes > 0 { return Err(OverlayAreaError::HolesNotSupported { holes }) }
        if polygon.exterior().0.is_empty() { return Err(OverlayAreaError::EmptyGeometry) }

        Self::from_ring(polygon.exterior().clone(), seed)
    }

    /// Index a generic geometry as the base operand; only a single hole-free
    /// `Polygon` is accepted.
    pub fn try_from_geometry(geom: &Geometry<f64>) -> Result<Self> {
        match geom {
            Geometry::Polygon(polygon) => Self::new(polygon),
            other => Err(OverlayAreaError::UnsupportedGeometry(geometry_kind(other).into())),
        }
    }

    pub(crate) fn from_ring(line: LineString<f64>, seed: u64) -> Result<Self> {
        let ring = Ring::owned(line)?;
        let locator = IndexedPointLocator::new(&ring);
        let segments = SegmentIndex::new(&ring);
        let vertices = build_vertex_index(&ring, seed);

        debug!(vertices = ring.num_vertices(), seed, "indexed base ring");
        Ok(Self { ring, locator, segments, vertices })
    }

    /// Area of the base polygon.
    #[inline] pub fn area(&self) -> f64 { self.ring.area() }

    /// Envelope of the base polygon.
    #[inline] pub fn envelope(&self) -> &AABB<[f64; 2]> { self.ring.envelope() }

    /// Whether an envelope (`None` for empty geometries) meets the base envelope.
    #[inline]
    fn interacts(&self, rect: Option<Rect<f64>>) -> bool {
        rect.is_some_and(|rect| self.ring.envelope().intersects(&rect_envelope(rect)))
    }
}

/// Area of the intersection of two geometries.
///
/// Returns `0.0` straight away when the envelopes are disjoint. Polygonal
/// components of `a` serve as base operands; a base polygon with holes is
/// handled by indexing its shell and each hole separately and subtracting
/// the hole terms. `b` may be any geometry. Non-areal components of either
/// side contribute nothing.
pub fn intersection_area(a: &Geometry<f64>, b: &Geometry<f64>) -> Result<f64> {
    intersection_area_with_seed(a, b, DEFAULT_SEED)
}

/// As [`intersection_area`], with an explicit vertex-index seed for the
/// base operands. The result does not depend on the seed.
pub fn intersection_area_with_seed(a: &Geometry<f64>, b: &Geometry<f64>, seed: u64) -> Result<f64> {
    let (Some(env_a), Some(env_b)) = (a.bounding_rect(), b.bounding_rect()) else { return Ok(0.0) };
    if !rect_envelope(env_a).intersects(&rect_envelope(env_b)) { return Ok(0.0) }

    let mut polygons = Vec::new();
    collect_polygons(a, &mut polygons);

    Ok(polygons.iter().map(|polygon| base_polygon_area(polygon, b, env_b, seed)).sum())
}

/// Intersection over union of two geometries, in `[0, 1]`. Zero when the
/// union has no area.
pub fn intersection_over_union(a: &Geometry<f64>, b: &Geometry<f64>) -> Result<f64> {
    let intersection = intersection_area(a, b)?;
    let union = a.unsigned_area() + b.unsigned_area() - intersection;
    Ok(if union > 0.0 { (intersection / union).clamp(0.0, 1.0) } else { 0.0 })
}

/// Fraction of the area of `b` covered by `a`, in `[0, 1]`. Zero when `b`
/// has no area.
pub fn coverage_fraction(a: &Geometry<f64>, b: &Geometry<f64>) -> Result<f64> {
    let area_b = b.unsigned_area();
    if !(area_b > 0.0) { return Ok(0.0) }
    Ok((intersection_area(a, b)? / area_b).clamp(0.0, 1.0))
}

fn base_polygon_area(polygon: &Polygon<f64>, other: &Geometry<f64>, other_env: Rect<f64>, seed: u64) -> f64 {
    if polygon.exterior().0.is_empty() { return 0.0 }

    let mut area = base_ring_area(polygon.exterior(), other, seed);

    let other_env = rect_envelope(other_env);
    for hole in polygon.interiors() {
        let Some(hole_env) = hole.bounding_rect() else { continue };
        if !rect_envelope(hole_env).intersects(&other_env) { continue }
        area -= base_ring_area(hole, other, seed);
    }
    area.max(0.0)
}

/// Intersection area of the region bounded by `line` with `other`. A
/// degenerate ring bounds no area.
fn base_ring_area(line: &LineString<f64>, other: &Geometry<f64>, seed: u64) -> f64 {
    match OverlayArea::from_ring(line.clone(), seed) {
        Ok(overlay) => overlay.intersection_area(other),
        Err(err) => {
            trace!(%err, "skipping degenerate base ring");
            0.0
        }
    }
}

/// Collect the polygonal components of `geom`, converting rectangles and
/// triangles to polygons.
fn collect_polygons<'a>(geom: &'a Geometry<f64>, out: &mut Vec<Cow<'a, Polygon<f64>>>) {
    match geom {
        Geometry::Polygon(polygon) => out.push(Cow::Borrowed(polygon)),
        Geometry::MultiPolygon(multi) => out.extend(multi.iter().map(Cow::Borrowed)),
        Geometry::GeometryCollection(collection) => {
            for geom in collection.iter() { collect_polygons(geom, out) }
        }
        Geometry::Rect(rect) => out.push(Cow::Owned(rect.to_polygon())),
        Geometry::Triangle(triangle) => out.push(Cow::Owned(triangle.to_polygon())),
        _ => {}
    }
}

#[inline]
pub(crate) fn rect_envelope(rect: Rect<f64>) -> AABB<[f64; 2]> {
    AABB::from_corners(rect.min().into(), rect.max().into())
}

pub(crate) fn geometry_kind(geom: &Geometry<f64>) -> &'static str {
    match geom {
        Geometry::Point(_) => "Point",
        Geometry::Line(_) => "Line",
        Geometry::LineString(_) => "LineString",
        Geometry::Polygon(_) => "Polygon",
        Geometry::MultiPoint(_) => "MultiPoint",
        Geometry::MultiLineString(_) => "MultiLineString",
        Geometry::MultiPolygon(_) => "MultiPolygon",
        Geometry::GeometryCollection(_) => "GeometryCollection",
        Geometry::Rect(_) => "Rect",
        Geometry::Triangle(_) => "Triangle",
    }
}
