//! # sprouts-core
//!
//! The rule engine of the pencil-and-paper game Sprouts: a combinatorial
//! planar-map implementation with geometric predicates feeding topological
//! mutation. Players alternately draw curves connecting living points
//! ("sprouts"); the engine either rejects a stroke or transforms the board
//! into a new, topologically consistent board.
//!
//! ## Design principles
//!
//! 1. **Immutable values everywhere**: `Graph`, `Vertex` and `CompoundEdge`
//!    are value types with structural equality. Every transformation
//!    produces a new `Graph`; nothing is mutated in place.
//!
//! 2. **Persistent snapshots**: the edge set lives in `im` collections, so
//!    the speculative apply-then-continue recursion of stroke resolution
//!    clones the board in O(1) per face crossing.
//!
//! 3. **Invalid is not an error**: a self-crossing stroke or a move onto a
//!    dead sprout is a normal outcome reported through `is_valid`/
//!    `is_completed`. Panics are reserved for caller contract violations.
//!
//! ## Modules
//!
//! - `geom`: points, polylines, strict crossing predicates
//! - `comb`: vertices, doubled edges, rotations, face tracing, searches
//! - `moves`: submove resolution, move sequencing, board transformation
//! - `board`: initial-state generator and raw-input resampling
//!
//! ## Pipeline
//!
//! ```
//! use sprouts_core::board;
//! use sprouts_core::comb::nearest_sprout;
//! use sprouts_core::geom::{Point, Polyline};
//! use sprouts_core::moves::Move;
//!
//! let state = board::initial_state(2, Point::new(0.0, 0.0), 50.0);
//! let origin = nearest_sprout(&state, Point::new(50.0, 0.0)).unwrap();
//!
//! // A stroke arcing from sprout 0 over to sprout 1.
//! let stroke = Polyline::new(vec![
//!     Point::new(30.0, 40.0),
//!     Point::new(-30.0, 40.0),
//!     Point::new(-48.0, 6.0),
//! ]);
//! let mv = Move::new(origin, stroke, state.clone(), 10.0);
//! assert!(mv.is_valid() && mv.is_completed());
//!
//! let next = mv.commit();
//! assert_eq!(next.edges().len(), state.edges().len() + 2);
//! ```

pub mod board;
pub mod comb;
pub mod geom;
pub mod moves;

// Re-export commonly used types
pub use crate::comb::{
    face_intersection, nearest_sprout, self_intersection, CompoundEdge, EdgeKind, FaceCrossing,
    Graph, MapError, Rotation, Vertex, VertexKind, SPROUT_LIVES,
};
pub use crate::geom::{Point, Polyline};
pub use crate::moves::{commit, commit_with_sprout, Move, ResolvedStroke, Submove, Termination};
