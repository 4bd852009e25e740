//! Board transformations: edge splitting, speculative submove application
//! and the final move commit.
//!
//! All transformations are pure functions from one `Graph` value to the
//! next; there is no partial application. The speculative path (used while a
//! stroke is still being resolved) applies a single submove; the commit path
//! replays a whole validated move against the authoritative board.

use tracing::debug;

use crate::comb::{CompoundEdge, EdgeKind, Graph, Vertex};
use crate::geom::{Point, Polyline};

use super::sequence::Move;
use super::submove::ResolvedStroke;

/// Split `edge` (and its reverse) at the boundary vertex `at`, replacing the
/// pair with the two half pairs.
fn split_edge(state: &Graph, edge: &CompoundEdge, at: &Vertex) -> Graph {
    let (first, second) = split_geometry(edge, at.position());
    let head = CompoundEdge::new(edge.from().clone(), at.clone(), edge.kind(), first);
    let tail = CompoundEdge::new(at.clone(), edge.to().clone(), edge.kind(), second);
    state
        .without_edge_pair(edge)
        .with_edge_pair(head)
        .with_edge_pair(tail)
}

/// Cut an edge's geometry at `at`, which lies on (or within rounding of) one
/// of its segments. Both halves contain the cut point exactly once.
fn split_geometry(edge: &CompoundEdge, at: Point) -> (Polyline, Polyline) {
    let points = edge.polyline().points();
    let (seg, _) = edge
        .polyline()
        .nearest_point(at)
        .expect("edge geometry is never empty");
    let mut first: Vec<Point> = points[..=seg].to_vec();
    if first.last() != Some(&at) {
        first.push(at);
    }
    let mut second: Vec<Point> = vec![at];
    second.extend(points[seg + 1..].iter().copied().filter(|p| *p != at));
    (Polyline::new(first), Polyline::new(second))
}

/// Speculatively apply one resolved submove: split the crossed edge (if
/// any) and add the submove's own edge pair.
///
/// `Submove::next` resolves the continuation against this board, which is
/// how a single stroke can legally cross several faces while no single
/// submove ever does.
pub(crate) fn apply_resolved(state: &Graph, origin: &Vertex, resolved: &ResolvedStroke) -> Graph {
    let mut next = state.clone();
    if let Some(crossed) = resolved.crossed() {
        next = split_edge(&next, crossed, resolved.end());
    }
    next.with_edge_pair(resolved.edge(origin))
}

/// Commit a valid, completed move to the board.
///
/// Every cobweb edge the chain crossed is split at its crossing point, and
/// the move's full traversed path becomes one new pair of directed compound
/// edges between its two sprout endpoints. Panics unless the move is valid
/// and completed; check first.
#[must_use]
pub fn commit(state: &Graph, mv: &Move) -> Graph {
    assert!(
        mv.is_valid() && mv.is_completed(),
        "only valid, completed moves can be committed"
    );
    let mut working = state.clone();
    let mut pieces = Vec::new();
    for submove in mv.submoves() {
        let resolved = submove.resolve();
        if let Some(crossed) = resolved.crossed() {
            working = split_edge(&working, crossed, resolved.end());
        }
        pieces.push(resolved.edge(submove.origin()));
    }
    let move_edge = CompoundEdge::concat(&pieces, EdgeKind::Move);
    debug!(
        from = %move_edge.from(),
        to = %move_edge.to(),
        faces_crossed = pieces.len() - 1,
        "move committed"
    );
    working.with_edge_pair(move_edge)
}
