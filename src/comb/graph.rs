//! The combinatorial map: a persistent, doubled edge set with derived
//! rotations and face tracing.
//!
//! A `Graph` is immutable-by-value. Every transformation produces a new
//! `Graph` sharing structure with the previous one (`im::HashSet` makes the
//! snapshot O(1) to clone), which is what lets submove resolution apply a
//! transformation speculatively and keep resolving against the updated face
//! structure without ever touching the authoritative board.
//!
//! Invariants:
//! - for every edge `(u → v)` the reverse `(v → u)` is present;
//! - every vertex's rotation holds each outgoing edge once per distinct
//!   direction;
//! - faces are well-defined: tracing from any edge closes back on it.

use im::HashSet as ImHashSet;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geom::Point;

use super::edge::{CompoundEdge, EdgeKind};
use super::rotations::Rotation;
use super::vertex::Vertex;

/// Number of move edges a sprout can receive before it dies.
pub const SPROUT_LIVES: usize = 3;

/// Recoverable map construction failures.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MapError {
    #[error("position {at} already hosts a vertex")]
    VertexOccupied { at: Point },
    #[error("only sprouts can be added to the map")]
    NotASprout,
}

/// The game board as an embedded planar multigraph.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    /// All directed edges, both directions of every connection.
    edges: ImHashSet<CompoundEdge>,
    /// Sprouts without any incident edge yet (a mid-move sprout between its
    /// two half-move commits). Cleared as soon as an edge reaches them.
    loose: ImHashSet<Vertex>,
}

impl Graph {
    /// An empty board.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a map from undirected connections: every edge passed in is
    /// inserted together with its reverse.
    #[must_use]
    pub fn from_edge_pairs(pairs: impl IntoIterator<Item = CompoundEdge>) -> Self {
        let mut edges = ImHashSet::new();
        for edge in pairs {
            edges.insert(edge.reversed());
            edges.insert(edge);
        }
        Self { edges, loose: ImHashSet::new() }
    }

    /// All directed edges.
    #[must_use]
    pub fn edges(&self) -> &ImHashSet<CompoundEdge> {
        &self.edges
    }

    /// Every vertex of the map, including loose sprouts.
    #[must_use]
    pub fn vertices(&self) -> FxHashSet<Vertex> {
        let mut out: FxHashSet<Vertex> =
            self.edges.iter().map(|e| e.from().clone()).collect();
        out.extend(self.loose.iter().cloned());
        out
    }

    /// The sprouts of the map (alive or dead).
    #[must_use]
    pub fn sprouts(&self) -> Vec<Vertex> {
        self.vertices().into_iter().filter(Vertex::is_sprout).collect()
    }

    /// Whether some vertex occupies `position`.
    #[must_use]
    pub fn is_occupied(&self, position: Point) -> bool {
        self.vertices().iter().any(|v| v.position() == position)
    }

    /// Number of move edges leaving `vertex` (cobweb scaffolding does not
    /// consume lives).
    #[must_use]
    pub fn move_degree(&self, vertex: &Vertex) -> usize {
        self.edges
            .iter()
            .filter(|e| e.from() == vertex && e.kind() == EdgeKind::Move)
            .count()
    }

    /// True iff `vertex` is a sprout with at least one life left.
    #[must_use]
    pub fn is_alive_sprout(&self, vertex: &Vertex) -> bool {
        vertex.is_sprout() && self.move_degree(vertex) < SPROUT_LIVES
    }

    /// A new map with an isolated sprout added.
    ///
    /// Fails when the position already hosts a vertex, or when the vertex is
    /// not a sprout — boundary vertices only enter the map by splitting.
    pub fn with_sprout(&self, sprout: Vertex) -> Result<Graph, MapError> {
        if !sprout.is_sprout() {
            return Err(MapError::NotASprout);
        }
        if self.is_occupied(sprout.position()) {
            return Err(MapError::VertexOccupied { at: sprout.position() });
        }
        let mut next = self.clone();
        next.loose.insert(sprout);
        Ok(next)
    }

    /// The clockwise rotation of edges leaving `vertex`, derived from the
    /// edge set.
    #[must_use]
    pub fn rotation(&self, vertex: &Vertex) -> Rotation {
        let mut rotation = Rotation::new(vertex.clone());
        for edge in self.edges.iter().filter(|e| e.from() == vertex) {
            rotation.insert(edge.clone());
        }
        rotation
    }

    /// The face successor of a directed edge: step to the reverse, then take
    /// the next clockwise edge out of its origin.
    #[must_use]
    fn successor(&self, edge: &CompoundEdge) -> CompoundEdge {
        self.rotation(edge.to()).next(&edge.reversed())
    }

    /// Trace the face of `edge`: the closed walk obtained by repeatedly
    /// taking the successor until `edge` recurs, in trace order.
    ///
    /// Panics when `edge` is not in the map (caller contract) or when the
    /// trace fails to close within `2·|edges|` steps (invariant breach).
    #[must_use]
    pub fn edge_face(&self, edge: &CompoundEdge) -> Vec<CompoundEdge> {
        assert!(
            self.edges.contains(edge),
            "edge_face requires an edge of the map: {edge}"
        );
        let limit = 2 * self.edges.len() + 1;
        let mut face = vec![edge.clone()];
        let mut cur = self.successor(edge);
        while cur != *edge {
            assert!(face.len() < limit, "face trace failed to close at {cur}");
            face.push(cur.clone());
            cur = self.successor(&cur);
        }
        face
    }

    /// The face a stroke leaving `origin` toward `toward` starts in.
    ///
    /// Traces from a synthetic dart `origin → toward` that is not part of
    /// the map: the walk bounces off the unknown tip, enters the rotation
    /// system at `origin` and cycles around the enclosing face. Returns the
    /// map edges of that cycle (empty for an isolated origin).
    #[must_use]
    pub fn face_around(&self, origin: &Vertex, toward: Point) -> Vec<CompoundEdge> {
        let probe = CompoundEdge::straight(
            origin.clone(),
            Vertex::boundary(toward),
            EdgeKind::Move,
        );
        let mut seen: FxHashSet<CompoundEdge> = FxHashSet::default();
        let mut face = Vec::new();
        let mut cur = probe;
        let limit = 2 * self.edges.len() + 4;
        for _ in 0..limit {
            cur = self.successor(&cur);
            if !seen.insert(cur.clone()) {
                break;
            }
            if self.edges.contains(&cur) {
                face.push(cur.clone());
            }
        }
        face
    }

    /// Number of faces of the embedding (orbits of the face successor).
    #[must_use]
    pub fn face_count(&self) -> usize {
        let mut visited: FxHashSet<CompoundEdge> = FxHashSet::default();
        let mut count = 0;
        for edge in self.edges.iter() {
            if visited.contains(edge) {
                continue;
            }
            for dart in self.edge_face(edge) {
                visited.insert(dart);
            }
            count += 1;
        }
        count
    }

    /// A new map with `edge` and its reverse inserted. Endpoints stop being
    /// loose.
    pub(crate) fn with_edge_pair(&self, edge: CompoundEdge) -> Graph {
        let mut next = self.clone();
        next.loose.remove(edge.from());
        next.loose.remove(edge.to());
        next.edges.insert(edge.reversed());
        next.edges.insert(edge);
        next
    }

    /// A new map with `edge` and its reverse removed.
    pub(crate) fn without_edge_pair(&self, edge: &CompoundEdge) -> Graph {
        let mut next = self.clone();
        next.edges.remove(&edge.reversed());
        next.edges.remove(edge);
        next
    }
}
