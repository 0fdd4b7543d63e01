use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use geo::{Coord, Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon, Point, Polygon};
use serde_json::Value;
use tracing::debug;

/// Read a GeoJSON file into a single geometry.
///
/// A `FeatureCollection` becomes a `GeometryCollection` of its feature
/// geometries; a `Feature` becomes its geometry.
pub fn read_from_geojson_file(path: &Path) -> Result<Geometry<f64>> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read GeoJSON file: {}", path.display()))?;
    read_from_geojson_bytes(&bytes)
        .with_context(|| format!("Failed to parse GeoJSON file: {}", path.display()))
}

/// Read GeoJSON bytes into a single geometry.
pub fn read_from_geojson_bytes(bytes: &[u8]) -> Result<Geometry<f64>> {
    let value: Value = serde_json::from_slice(bytes).context("Failed to parse GeoJSON bytes")?;
    parse_object(&value)
}

fn parse_object(value: &Value) -> Result<Geometry<f64>> {
    match value["type"].as_str() {
        Some("FeatureCollection") => {
            let features = value["features"].as_array()
                .ok_or_else(|| anyhow!("Invalid FeatureCollection: missing features array"))?;
            debug!(features = features.len(), "reading feature collection");
            let geoms = features.iter()
                .enumerate()
                .map(|(idx, feature)| parse_feature(feature).with_context(|| format!("feature {idx}")))
                .collect::<Result<Vec<_>>>()?;
            Ok(Geometry::GeometryCollection(GeometryCollection::new_from(geoms)))
        }
        Some("Feature") => parse_feature(value),
        _ => parse_geometry(value),
    }
}

fn parse_feature(feature: &Value) -> Result<Geometry<f64>> {
    match &feature["geometry"] {
        // A feature without a geometry has no area.
        Value::Null => Ok(Geometry::GeometryCollection(GeometryCollection::new_from(vec![]))),
        geometry => parse_geometry(geometry),
    }
}

fn parse_geometry(geometry: &Value) -> Result<Geometry<f64>> {
    let kind = geometry["type"].as_str()
        .ok_or_else(|| anyhow!("Invalid GeoJSON: missing \"type\""))?;

    if kind == "GeometryCollection" {
        let geoms = geometry["geometries"].as_array()
            .ok_or_else(|| anyhow!("Invalid GeometryCollection: missing geometries array"))?
            .iter()
            .map(parse_geometry)
            .collect::<Result<Vec<_>>>()?;
        return Ok(Geometry::GeometryCollection(GeometryCollection::new_from(geoms)));
    }

    let coords = &geometry["coordinates"];
    let geom: Geometry<f64> = match kind {
        "Point" => Point::from(parse_coord(coords)?).into(),
        "MultiPoint" => MultiPoint::new(parse_coords(coords)?.into_iter().map(Point::from).collect()).into(),
        "LineString" => LineString::new(parse_coords(coords)?).into(),
        "MultiLineString" => {
            let lines = as_array(coords, kind)?.iter()
                .map(|line| parse_coords(line).map(LineString::new))
                .collect::<Result<Vec<_>>>()?;
            MultiLineString::new(lines).into()
        }
        "Polygon" => parse_polygon(coords)?.into(),
        "MultiPolygon" => {
            let polygons = as_array(coords, kind)?.iter()
                .map(parse_polygon)
                .collect::<Result<Vec<_>>>()?;
            MultiPolygon::new(polygons).into()
        }
        other => bail!("Unsupported GeoJSON geometry type: {other}"),
    };
    Ok(geom)
}

/// Parse polygon coordinates `[exterior, hole, ...]`. Rings are closed if
/// their last position differs from the first.
fn parse_polygon(coords: &Value) -> Result<Polygon<f64>> {
    let mut rings = as_array(coords, "Polygon")?.iter()
        .map(|ring| parse_coords(ring).map(close_ring));

    let exterior = match rings.next() {
        Some(ring) => ring?,
        None => LineString::new(vec![]),
    };
    let interiors = rings.collect::<Result<Vec<_>>>()?;
    Ok(Polygon::new(exterior, interiors))
}

fn close_ring(mut coords: Vec<Coord<f64>>) -> LineString<f64> {
    if let (Some(&first), Some(&last)) = (coords.first(), coords.last()) {
        if first != last { coords.push(first) }
    }
    LineString::new(coords)
}

fn parse_coords(value: &Value) -> Result<Vec<Coord<f64>>> {
    as_array(value, "position list")?.iter().map(parse_coord).collect()
}

/// Parse a position `[x, y, ...]`; extra ordinates are ignored.
fn parse_coord(value: &Value) -> Result<Coord<f64>> {
    let position = as_array(value, "position")?;
    if position.len() < 2 { bail!("Invalid position: expected at least 2 numbers, got {}", position.len()) }

    let x = position[0].as_f64().ok_or_else(|| anyhow!("Invalid coordinate: x must be a number"))?;
    let y = position[1].as_f64().ok_or_else(|| anyhow!("Invalid coordinate: y must be a number"))?;
    Ok(Coord { x, y })
}

fn as_array<'a>(value: &'a Value, what: &str) -> Result<&'a Vec<Value>> {
    value.as_array().ok_or_else(|| anyhow!("Invalid {what}: expected an array"))
}
