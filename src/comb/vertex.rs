//! Map vertices.
//!
//! A vertex is a pinned point of the board: either a living game point (a
//! sprout) or a boundary point created where a stroke crossed a cobweb edge.
//! Whether a resolution *stopped* because of a self-crossing, a face exit or
//! a glued sprout is not a property of the vertex; that lives in
//! [`crate::moves::Termination`].

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::geom::Point;

/// Semantic role of a map vertex.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VertexKind {
    /// A living game point. Receives up to three incident move edges.
    Sprout,
    /// A point pinned onto a cobweb edge where a stroke crossed it.
    /// A continuation point for the next submove, never a move endpoint
    /// a player can aim for.
    Boundary,
}

/// A vertex of the combinatorial map.
///
/// Two vertices are equal iff their positions and kinds match; the label is
/// diagnostic only (it shows up in test assertions and trace output) and is
/// excluded from equality and hashing.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Vertex {
    position: Point,
    kind: VertexKind,
    label: Option<String>,
}

impl Vertex {
    /// A sprout at `position`.
    #[must_use]
    pub fn sprout(position: Point) -> Self {
        Self { position, kind: VertexKind::Sprout, label: None }
    }

    /// A boundary vertex at `position`.
    #[must_use]
    pub fn boundary(position: Point) -> Self {
        Self { position, kind: VertexKind::Boundary, label: None }
    }

    /// Attach a diagnostic label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }

    #[must_use]
    pub fn kind(&self) -> VertexKind {
        self.kind
    }

    #[must_use]
    pub fn is_sprout(&self) -> bool {
        self.kind == VertexKind::Sprout
    }

    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position && self.kind == other.kind
    }
}

impl Eq for Vertex {}

impl Hash for Vertex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.position.hash(state);
        self.kind.hash(state);
    }
}

impl std::fmt::Display for Vertex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.label, self.kind) {
            (Some(l), _) => write!(f, "{l}"),
            (None, VertexKind::Sprout) => write!(f, "sprout@{}", self.position),
            (None, VertexKind::Boundary) => write!(f, "boundary@{}", self.position),
        }
    }
}
