use std::cmp::Ordering;

use geo::kernels::Orientation;
use geo::Coord;

use super::orientation;

/// Where a ray falls in the counter-clockwise sweep that starts at a
/// reference ray: exactly at `0`, in `(0, π)`, exactly at `π`, in `(π, 2π)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Sector {
    Start,
    Upper,
    Opposite,
    Lower,
}

fn sector(apex: Coord<f64>, from: Coord<f64>, p: Coord<f64>) -> Sector {
    if p == apex { return Sector::Start }
    match orientation(apex, from, p) {
        Orientation::CounterClockwise => Sector::Upper,
        Orientation::Clockwise => Sector::Lower,
        Orientation::Collinear if same_direction(apex, from, p) => Sector::Start,
        Orientation::Collinear => Sector::Opposite,
    }
}

/// Whether the collinear rays `apex → p` and `apex → q` point the same way.
#[inline]
fn same_direction(apex: Coord<f64>, p: Coord<f64>, q: Coord<f64>) -> bool {
    p.x.partial_cmp(&apex.x) == q.x.partial_cmp(&apex.x) && p.y.partial_cmp(&apex.y) == q.y.partial_cmp(&apex.y)
}

/// Compares the counter-clockwise sweeps, in `[0, 2π)`, from the ray
/// `apex → from` to the rays `apex → p` and `apex → q`.
///
/// Only robust orientation tests and coordinate comparisons are used, so the
/// result is exact: rays that are collinear in exact arithmetic compare
/// equal. For a ring traversed clockwise with `from` the predecessor of
/// `apex`, the sweep to the successor is the interior angle at `apex`.
pub fn compare_sweeps(apex: Coord<f64>, from: Coord<f64>, p: Coord<f64>, q: Coord<f64>) -> Ordering {
    let (sp, sq) = (sector(apex, from, p), sector(apex, from, q));
    if sp != sq { return sp.cmp(&sq) }

    match sp {
        Sector::Upper | Sector::Lower => match orientation(apex, p, q) {
            Orientation::CounterClockwise => Ordering::Less,
            Orientation::Clockwise => Ordering::Greater,
            Orientation::Collinear => Ordering::Equal,
        },
        Sector::Start | Sector::Opposite => Ordering::Equal,
    }
}
