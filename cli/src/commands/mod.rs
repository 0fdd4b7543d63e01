pub mod area;
pub mod coverage;
pub mod iou;

use std::path::Path;

use anyhow::Result;
use geo::Geometry;
use overlay_area::io::read_from_geojson_file;
use serde::Serialize;
use tracing::info;

/// One computed metric over a pair of input files.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub metric: &'static str,
    pub a: &'a Path,
    pub b: &'a Path,
    pub value: f64,
}

impl Report<'_> {
    /// Bare value, or a JSON object with `json`.
    pub fn render(&self, json: bool) -> Result<String> {
        if json { Ok(serde_json::to_string(self)?) } else { Ok(self.value.to_string()) }
    }
}

/// Read both input files.
pub(crate) fn load_pair(a: &Path, b: &Path) -> Result<(Geometry<f64>, Geometry<f64>)> {
    info!(path = %a.display(), "reading first geometry");
    let geom_a = read_from_geojson_file(a)?;
    info!(path = %b.display(), "reading second geometry");
    let geom_b = read_from_geojson_file(b)?;
    Ok((geom_a, geom_b))
}
