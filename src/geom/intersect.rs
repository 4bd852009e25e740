//! Strict segment crossing predicates.
//!
//! Everything here reports *proper* crossings only: the intersection point
//! must be interior to both segments. Touching at an endpoint or collinear
//! overlap is never a crossing — a stroke that merely grazes a boundary has
//! not left its face.

use super::point::Point;

/// Proper intersection of segments `a0-a1` and `b0-b1`.
///
/// Returns the crossing point, or `None` when the segments do not strictly
/// cross (disjoint, parallel, collinear, or touching at an endpoint).
#[must_use]
pub fn segment_crossing(a0: Point, a1: Point, b0: Point, b1: Point) -> Option<Point> {
    let d1 = Point::cross(b0, b1, a0);
    let d2 = Point::cross(b0, b1, a1);
    let d3 = Point::cross(a0, a1, b0);
    let d4 = Point::cross(a0, a1, b1);

    if (d1 > 0.0 && d2 < 0.0 || d1 < 0.0 && d2 > 0.0)
        && (d3 > 0.0 && d4 < 0.0 || d3 < 0.0 && d4 > 0.0)
    {
        // Both segments straddle each other's carrier line; the denominator
        // cannot be zero here.
        let t = d1 / (d1 - d2);
        return Some(a0.lerp(a1, t));
    }
    None
}

/// First proper crossing of segment `p0-p1` against a polyline, in polyline
/// order. `points` is a raw point run (at least two points form a segment).
#[must_use]
pub fn polyline_crossing(p0: Point, p1: Point, points: &[Point]) -> Option<Point> {
    points
        .windows(2)
        .find_map(|w| segment_crossing(p0, p1, w[0], w[1]))
}
