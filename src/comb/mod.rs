//! The combinatorial map: vertices, doubled directed edges, per-vertex
//! rotations, face tracing and the graph-aware geometric searches.

pub mod edge;
pub mod graph;
pub mod rotations;
pub mod search;
pub mod vertex;

pub use edge::{CompoundEdge, EdgeKind};
pub use graph::{Graph, MapError, SPROUT_LIVES};
pub use rotations::Rotation;
pub use search::{face_intersection, nearest_sprout, self_intersection, FaceCrossing};
pub use vertex::{Vertex, VertexKind};
