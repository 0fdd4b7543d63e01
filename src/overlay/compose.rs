use geo::{BoundingRect, Geometry, LineString, MultiPolygon, Polygon};
use tracing::trace;

use super::OverlayArea;
use crate::ring::Ring;

impl OverlayArea {
    /// Area of the intersection of the base polygon with `geom`.
    ///
    /// Polygonal components are summed, holes in them are subtracted, and
    /// points and lines contribute nothing. Components whose envelope misses
    /// the base envelope are skipped without further work.
    pub fn intersection_area(&self, geom: &Geometry<f64>) -> f64 {
        if !self.interacts(geom.bounding_rect()) { return 0.0 }

        match geom {
            Geometry::Polygon(polygon) => self.intersection_area_polygon(polygon),
            Geometry::MultiPolygon(multi) => self.intersection_area_multi_polygon(multi),
            Geometry::GeometryCollection(collection) => {
                collection.iter().map(|geom| self.intersection_area(geom)).sum()
            }
            Geometry::Rect(rect) => self.intersection_area_polygon(&rect.to_polygon()),
            Geometry::Triangle(triangle) => self.intersection_area_polygon(&triangle.to_polygon()),
            _ => 0.0,
        }
    }

    /// Area of the intersection of the base polygon with `polygon`; holes of
    /// `polygon` are supported.
    pub fn intersection_area_polygon(&self, polygon: &Polygon<f64>) -> f64 {
        if !self.interacts(polygon.bounding_rect()) { return 0.0 }

        let mut area = self.line_intersection_area(polygon.exterior());
        for hole in polygon.interiors() {
            if !self.interacts(hole.bounding_rect()) { continue }
            area -= self.line_intersection_area(hole);
        }
        area.max(0.0)
    }

    /// Sum of the intersection areas of each component of `multi`.
    pub fn intersection_area_multi_polygon(&self, multi: &MultiPolygon<f64>) -> f64 {
        multi.iter().map(|polygon| self.intersection_area_polygon(polygon)).sum()
    }

    fn line_intersection_area(&self, line: &LineString<f64>) -> f64 {
        match Ring::new(line) {
            Ok(ring) => self.ring_intersection_area(&ring),
            Err(err) => {
                trace!(%err, "skipping degenerate ring");
                0.0
            }
        }
    }
}
