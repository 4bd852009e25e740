//! Polyline: an ordered run of sample points.
//!
//! Strokes, edge geometry and stroke remainders are all polylines. The type
//! is a thin immutable wrapper; every operation that "modifies" a polyline
//! returns a new one.

use serde::{Deserialize, Serialize};

use super::point::Point;

/// An ordered sequence of points. May be empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<Point>,
}

impl Polyline {
    /// Wrap a list of points.
    #[must_use]
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// An empty polyline.
    #[must_use]
    pub fn empty() -> Self {
        Self { points: Vec::new() }
    }

    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn first(&self) -> Option<Point> {
        self.points.first().copied()
    }

    #[must_use]
    pub fn last(&self) -> Option<Point> {
        self.points.last().copied()
    }

    /// The polyline traversed backwards.
    #[must_use]
    pub fn reversed(&self) -> Polyline {
        let mut points = self.points.clone();
        points.reverse();
        Polyline::new(points)
    }

    /// Iterate over the segments (consecutive point pairs).
    pub fn segments(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.points.windows(2).map(|w| (w[0], w[1]))
    }

    /// Drop leading points closer than `min_dist` to `anchor`.
    ///
    /// Used to trim a stroke remainder past the glue radius of the vertex it
    /// continues from, so the continuation does not immediately re-glue.
    #[must_use]
    pub fn trimmed(&self, anchor: Point, min_dist: f32) -> Polyline {
        let keep_from = self
            .points
            .iter()
            .position(|p| p.dist(anchor) >= min_dist)
            .unwrap_or(self.points.len());
        Polyline::new(self.points[keep_from..].to_vec())
    }

    /// The point on this polyline nearest to `target`, with the index of the
    /// segment it lies on. `None` for an empty polyline.
    #[must_use]
    pub fn nearest_point(&self, target: Point) -> Option<(usize, Point)> {
        if self.points.is_empty() {
            return None;
        }
        if self.points.len() == 1 {
            return Some((0, self.points[0]));
        }
        let mut best: Option<(usize, Point, f32)> = None;
        for (i, (a, b)) in self.segments().enumerate() {
            let candidate = project_onto_segment(target, a, b);
            let d = candidate.dist_sq(target);
            if best.map_or(true, |(_, _, bd)| d < bd) {
                best = Some((i, candidate, d));
            }
        }
        best.map(|(i, p, _)| (i, p))
    }

    /// Split this polyline at the point nearest to `target`.
    ///
    /// Both halves include the split point, so they share exactly one point.
    /// Panics on an empty polyline (caller contract).
    #[must_use]
    pub fn split_at_nearest(&self, target: Point) -> (Point, Polyline, Polyline) {
        let (seg, split) = self
            .nearest_point(target)
            .expect("cannot split an empty polyline");
        let mut first: Vec<Point> = self.points[..=seg].to_vec();
        if *first.last().expect("nonempty prefix") != split {
            first.push(split);
        }
        let mut second: Vec<Point> = vec![split];
        second.extend(
            self.points[seg + 1..]
                .iter()
                .copied()
                .filter(|p| *p != split),
        );
        (split, Polyline::new(first), Polyline::new(second))
    }
}

fn project_onto_segment(target: Point, a: Point, b: Point) -> Point {
    let len_sq = a.dist_sq(b);
    if len_sq == 0.0 {
        return a;
    }
    let t = ((target.x - a.x) * (b.x - a.x) + (target.y - a.y) * (b.y - a.y)) / len_sq;
    a.lerp(b, t.clamp(0.0, 1.0))
}
