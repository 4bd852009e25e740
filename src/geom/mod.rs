//! Geometric primitives: points, polylines and strict crossing predicates.
//!
//! Nothing in this module knows about the combinatorial map; these are the
//! pure building blocks the graph-aware searches in `comb::search` are
//! assembled from.

pub mod intersect;
pub mod point;
pub mod polyline;

pub use intersect::{polyline_crossing, segment_crossing};
pub use point::Point;
pub use polyline::Polyline;
