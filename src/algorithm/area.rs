use geo::Coord;

/// Signed area of a closed ring by the shoelace formula.
/// Positive for counter-clockwise rings, negative for clockwise rings.
///
/// Coordinates are shifted by the first vertex to limit cancellation error
/// for rings far from the origin.
pub fn ring_signed_area(coords: &[Coord<f64>]) -> f64 {
    if coords.len() < 3 { return 0.0 }

    let origin = coords[0];
    let twice_area: f64 = coords.windows(2)
        .map(|w| {
            let (p, q) = (w[0] - origin, w[1] - origin);
            p.x * q.y - q.x * p.y
        })
        .sum();

    twice_area / 2.0
}

/// Doubled-area contribution of one edge vector.
///
/// The edge vector is anchored at `v` and points along the full direction of
/// the parent edge `p0 → p1`. The unit normal is taken to the right of that
/// direction when `normal_to_right`, otherwise to the left, and must point
/// into the interior of the area being measured. The term is
/// `(v·u)(v·n)`; summing it over every edge vector of a polygon boundary
/// yields twice the polygon area.
///
/// A zero-length parent edge contributes nothing.
#[inline]
pub fn edge_vector_term(v: Coord<f64>, p0: Coord<f64>, p1: Coord<f64>, normal_to_right: bool) -> f64 {
    let d = p1 - p0;
    let len = d.x.hypot(d.y);
    if !(len > 0.0) { return 0.0 }

    let (ux, uy) = (d.x / len, d.y / len);
    let (nx, ny) = if normal_to_right { (uy, -ux) } else { (-uy, ux) };

    (v.x * ux + v.y * uy) * (v.x * nx + v.y * ny)
}
