//! Reading input geometries from files.
//!
//! - `geojson` - GeoJSON geometry objects, features and feature collections

mod geojson;

pub use geojson::{read_from_geojson_bytes, read_from_geojson_file};
