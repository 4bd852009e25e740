//! Per-vertex rotation: the clockwise cyclic order of outgoing edges.
//!
//! The rotation system is what turns a bare multigraph into a planar
//! embedding. Edges sort by their outgoing direction angle; the angle is the
//! discriminating key — at most one edge is kept per distinct direction, and
//! registering a second edge in an occupied direction replaces the first.
//!
//! `next(edge)` is the sole primitive face tracing needs: the entry
//! immediately clockwise of `edge`'s direction, wrapping around.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::edge::CompoundEdge;
use super::vertex::Vertex;

/// Clockwise cyclic ordering of the edges leaving one vertex.
///
/// Entries are kept sorted by descending direction angle, which is clockwise
/// order when angles are measured counter-clockwise from the positive x-axis.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rotation {
    center: Vertex,
    entries: SmallVec<[CompoundEdge; 4]>,
}

impl Rotation {
    /// An empty rotation around `center`.
    #[must_use]
    pub fn new(center: Vertex) -> Self {
        Self { center, entries: SmallVec::new() }
    }

    #[must_use]
    pub fn center(&self) -> &Vertex {
        &self.center
    }

    /// The registered edges in clockwise order.
    #[must_use]
    pub fn edges(&self) -> &[CompoundEdge] {
        &self.entries
    }

    /// Register an outgoing edge.
    ///
    /// An existing entry with the same direction angle is replaced: two
    /// edges leaving in the same direction are duplicates regardless of
    /// where they eventually end.
    ///
    /// Panics when `edge` does not leave this rotation's center.
    pub fn insert(&mut self, edge: CompoundEdge) {
        assert_eq!(
            edge.from(),
            &self.center,
            "edge must leave the rotation center"
        );
        let angle = edge.direction_angle();
        self.entries.retain(|e| e.direction_angle() != angle);
        let at = self
            .entries
            .iter()
            .position(|e| e.direction_angle() < angle)
            .unwrap_or(self.entries.len());
        self.entries.insert(at, edge);
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, edge: CompoundEdge) -> Self {
        self.insert(edge);
        self
    }

    /// Remove the entry occupying `edge`'s direction, if any.
    pub fn remove_direction(&mut self, edge: &CompoundEdge) {
        let angle = edge.direction_angle();
        self.entries.retain(|e| e.direction_angle() != angle);
    }

    /// The edge immediately clockwise of `edge`'s outgoing direction,
    /// wrapping around. `edge` itself does not have to be registered; an
    /// entry sharing its exact direction is skipped, and the query edge is
    /// returned unchanged when the rotation is empty.
    #[must_use]
    pub fn next(&self, edge: &CompoundEdge) -> CompoundEdge {
        if self.entries.is_empty() {
            return edge.clone();
        }
        let angle = edge.direction_angle();
        self.entries
            .iter()
            .find(|e| e.direction_angle() < angle)
            .unwrap_or(&self.entries[0])
            .clone()
    }
}
