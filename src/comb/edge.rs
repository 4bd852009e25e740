//! Directed compound edges.
//!
//! Every connection of the map is stored twice, once per direction; the
//! reverse of an edge carries the reversed geometry. A compound edge may have
//! been assembled from several atomic pieces (a committed move concatenates
//! its submove chain, and splitting accretes sub-segments); the concatenated
//! polyline is stored directly so queries never re-derive it.

use serde::{Deserialize, Serialize};

use crate::geom::{Point, Polyline};

use super::vertex::Vertex;

/// How far the terminal segments of an edge are extended (as a fraction of
/// their own length) when probing for face crossings. Boundary edges are
/// conceptually open-ended: a stroke must fully cross them, and the
/// extension closes the gap where edges meet at a vertex.
const EXTENSION_SCALE: f32 = 0.25;

/// What an edge is made of.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EdgeKind {
    /// Scaffolding: initial-board connections and the halves produced by
    /// splitting them. Crossing a cobweb edge is a legal face exit and
    /// never consumes a sprout life.
    Cobweb,
    /// Ink drawn by a player. Crossing a move edge is as illegal as
    /// crossing your own stroke, and each incident move edge consumes one
    /// life of a sprout.
    Move,
}

/// A directed edge `(from → to)` with its polyline geometry.
///
/// The polyline always runs from `from.position()` to `to.position()`.
/// Equality and hashing cover endpoints, kind and geometry, so two parallel
/// moves between the same pair of sprouts stay distinct set members.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompoundEdge {
    from: Vertex,
    to: Vertex,
    kind: EdgeKind,
    polyline: Polyline,
}

impl CompoundEdge {
    /// Build an edge from endpoints and geometry.
    ///
    /// The geometry must start at `from` and end at `to`.
    #[must_use]
    pub fn new(from: Vertex, to: Vertex, kind: EdgeKind, polyline: Polyline) -> Self {
        debug_assert!(
            polyline.first() == Some(from.position()) && polyline.last() == Some(to.position()),
            "edge geometry must run from `from` to `to`"
        );
        Self { from, to, kind, polyline }
    }

    /// A straight edge between two vertices.
    #[must_use]
    pub fn straight(from: Vertex, to: Vertex, kind: EdgeKind) -> Self {
        let polyline = Polyline::new(vec![from.position(), to.position()]);
        Self::new(from, to, kind, polyline)
    }

    #[must_use]
    pub fn from(&self) -> &Vertex {
        &self.from
    }

    #[must_use]
    pub fn to(&self) -> &Vertex {
        &self.to
    }

    #[must_use]
    pub fn kind(&self) -> EdgeKind {
        self.kind
    }

    #[must_use]
    pub fn polyline(&self) -> &Polyline {
        &self.polyline
    }

    /// The paired reverse edge: `(to → from)` with reversed geometry.
    #[must_use]
    pub fn reversed(&self) -> CompoundEdge {
        CompoundEdge {
            from: self.to.clone(),
            to: self.from.clone(),
            kind: self.kind,
            polyline: self.polyline.reversed(),
        }
    }

    /// Angle (radians, counter-clockwise from positive x) of the direction
    /// in which this edge leaves its origin. This is the key under which the
    /// edge sorts into its origin's rotation.
    ///
    /// Panics when the geometry has no point distinct from the origin — a
    /// direction needs at least one sample point.
    #[must_use]
    pub fn direction_angle(&self) -> f32 {
        let origin = self.from.position();
        let toward = self
            .polyline
            .points()
            .iter()
            .copied()
            .find(|p| *p != origin)
            .expect("at least one sample point distinct from the origin is needed to establish a direction");
        origin.angle_to(toward)
    }

    /// The edge geometry with both terminal segments extended outward.
    ///
    /// Face-crossing probes run against this extended run so a stroke
    /// slipping through the vertex gap between two boundary edges still
    /// registers as a crossing.
    #[must_use]
    pub fn extended_points(&self) -> Vec<Point> {
        let pts = self.polyline.points();
        if pts.len() < 2 {
            return pts.to_vec();
        }
        let head = extend_past(pts[1], pts[0]);
        let tail = extend_past(pts[pts.len() - 2], pts[pts.len() - 1]);
        let mut out = Vec::with_capacity(pts.len() + 2);
        out.push(head);
        out.extend_from_slice(pts);
        out.push(tail);
        out
    }

    /// Concatenate a chain of directed pieces into one compound edge.
    ///
    /// Pieces must link up (`pieces[i].to == pieces[i + 1].from`); the result
    /// runs from the first piece's origin to the last piece's tip with the
    /// joined geometry. Joint points are not duplicated.
    #[must_use]
    pub fn concat(pieces: &[CompoundEdge], kind: EdgeKind) -> CompoundEdge {
        assert!(!pieces.is_empty(), "cannot concatenate an empty chain");
        let mut points: Vec<Point> = Vec::new();
        for (i, piece) in pieces.iter().enumerate() {
            if i > 0 {
                assert_eq!(
                    pieces[i - 1].to, piece.from,
                    "chain pieces must share endpoints"
                );
            }
            for &p in piece.polyline.points() {
                if points.last() != Some(&p) {
                    points.push(p);
                }
            }
        }
        CompoundEdge::new(
            pieces[0].from.clone(),
            pieces[pieces.len() - 1].to.clone(),
            kind,
            Polyline::new(points),
        )
    }
}

fn extend_past(from: Point, through: Point) -> Point {
    through.lerp(
        Point::new(
            through.x + (through.x - from.x),
            through.y + (through.y - from.y),
        ),
        EXTENSION_SCALE,
    )
}

impl std::fmt::Display for CompoundEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}
