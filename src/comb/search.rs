//! Graph-aware geometric searches.
//!
//! Pure, read-only queries built from the primitives in [`crate::geom`]:
//! nearest-sprout lookup, a stroke's self-intersection, and the crossing of
//! a probe segment against a face boundary. All of them return `Option` —
//! there is no sentinel "void" vertex.

use crate::geom::{polyline_crossing, segment_crossing, Point};

use super::edge::CompoundEdge;
use super::graph::Graph;
use super::vertex::Vertex;

/// A probe segment crossing a face boundary edge.
#[derive(Clone, Debug, PartialEq)]
pub struct FaceCrossing {
    /// Where the probe crosses the edge.
    pub point: Point,
    /// The map edge that was crossed.
    pub edge: CompoundEdge,
}

/// The sprout closest to `point` by Euclidean distance, or `None` on a
/// sproutless map.
#[must_use]
pub fn nearest_sprout(map: &Graph, point: Point) -> Option<Vertex> {
    map.sprouts()
        .into_iter()
        .min_by(|a, b| {
            a.position()
                .dist_sq(point)
                .total_cmp(&b.position().dist_sq(point))
        })
}

/// First crossing of segment `p0-p1` against the stroke's own consumed
/// prefix, in polyline order.
#[must_use]
pub fn self_intersection(prefix: &[Point], p0: Point, p1: Point) -> Option<Point> {
    polyline_crossing(p0, p1, prefix)
}

/// Crossing of segment `p0-p1` against the extended geometry of the face's
/// edges.
///
/// A touch is not a crossing: the probe must properly cross an edge. When
/// the probe crosses several boundary edges, the crossing closest to `p0`
/// wins, which makes the result independent of the face's iteration order.
#[must_use]
pub fn face_intersection(face: &[CompoundEdge], p0: Point, p1: Point) -> Option<FaceCrossing> {
    let mut best: Option<(f32, FaceCrossing)> = None;
    for edge in face {
        let extended = edge.extended_points();
        for w in extended.windows(2) {
            if let Some(point) = segment_crossing(p0, p1, w[0], w[1]) {
                let d = p0.dist_sq(point);
                if best.as_ref().map_or(true, |(bd, _)| d < *bd) {
                    best = Some((d, FaceCrossing { point, edge: edge.clone() }));
                }
            }
        }
    }
    best.map(|(_, crossing)| crossing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comb::edge::EdgeKind;
    use crate::comb::graph::Graph;
    use crate::geom::Point;

    fn p(x: f32, y: f32) -> Point {
        Point::new(x, y)
    }

    fn two_sprout_board() -> Graph {
        Graph::from_edge_pairs([CompoundEdge::straight(
            Vertex::sprout(p(-50.0, 0.0)),
            Vertex::sprout(p(50.0, 0.0)),
            EdgeKind::Cobweb,
        )])
    }

    #[test]
    fn test_nearest_sprout_picks_the_closest() {
        let board = two_sprout_board();
        let hit = nearest_sprout(&board, p(30.0, 5.0)).unwrap();
        assert_eq!(hit.position(), p(50.0, 0.0));
    }

    #[test]
    fn test_nearest_sprout_none_without_sprouts() {
        assert_eq!(nearest_sprout(&Graph::empty(), p(0.0, 0.0)), None);
    }

    #[test]
    fn test_nearest_sprout_is_pure() {
        let board = two_sprout_board();
        let first = nearest_sprout(&board, p(-10.0, 3.0));
        let second = nearest_sprout(&board, p(-10.0, 3.0));
        assert_eq!(first, second);
    }

    #[test]
    fn test_self_intersection_finds_loop_closure() {
        // A hook: the probe closes back over the first segment.
        let prefix = [p(0.0, 0.0), p(10.0, 0.0), p(10.0, 10.0)];
        let hit = self_intersection(&prefix, p(5.0, 8.0), p(5.0, -2.0)).unwrap();
        assert_eq!(hit, p(5.0, 0.0));
    }

    #[test]
    fn test_self_intersection_ignores_shared_joints() {
        // Probe continues from the prefix tip; sharing that point is not a
        // self-crossing.
        let prefix = [p(0.0, 0.0), p(10.0, 0.0)];
        assert_eq!(self_intersection(&prefix, p(10.0, 0.0), p(20.0, 0.0)), None);
    }

    #[test]
    fn test_face_intersection_reports_crossed_edge() {
        let board = two_sprout_board();
        let face: Vec<CompoundEdge> = board.edges().iter().cloned().collect();
        let hit = face_intersection(&face, p(10.0, 10.0), p(10.0, -10.0)).unwrap();
        assert_eq!(hit.point, p(10.0, 0.0));
        assert_eq!(hit.edge.kind(), EdgeKind::Cobweb);
    }

    #[test]
    fn test_face_intersection_touch_is_not_a_crossing() {
        let board = two_sprout_board();
        let face: Vec<CompoundEdge> = board.edges().iter().cloned().collect();
        // Stops exactly on the boundary.
        assert_eq!(face_intersection(&face, p(10.0, 10.0), p(10.0, 0.0)), None);
        // Runs collinear along it.
        assert_eq!(face_intersection(&face, p(-10.0, 0.0), p(10.0, 0.0)), None);
    }

    #[test]
    fn test_face_intersection_prefers_crossing_nearest_probe_start() {
        let left = CompoundEdge::straight(
            Vertex::sprout(p(-10.0, -10.0)),
            Vertex::sprout(p(-10.0, 10.0)),
            EdgeKind::Cobweb,
        );
        let right = CompoundEdge::straight(
            Vertex::sprout(p(10.0, -10.0)),
            Vertex::sprout(p(10.0, 10.0)),
            EdgeKind::Cobweb,
        );
        let face = vec![right.clone(), left.clone()];
        let hit = face_intersection(&face, p(-20.0, 0.0), p(20.0, 0.0)).unwrap();
        assert_eq!(hit.edge, left, "nearest crossing wins regardless of order");
        assert_eq!(hit.point, p(-10.0, 0.0));
    }
}
