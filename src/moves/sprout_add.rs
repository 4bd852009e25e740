//! Mid-move sprout insertion.
//!
//! Placing a sprout on a just-drawn move is resolved as two independent
//! moves sharing the new sprout as an endpoint: the first half is committed,
//! then the second half is resolved and committed against the post-first-half
//! board. The transformation engine stays a two-endpoint operation
//! throughout; there is no atomic three-way split.

use tracing::debug;

use crate::comb::{Graph, Vertex};
use crate::geom::{Point, Polyline};

use super::sequence::Move;
use super::transform;

/// Commit a drawn stroke with a sprout inserted at the point of the stroke
/// nearest to `tap`.
///
/// Returns the next board, or `None` when the insertion does not yield two
/// valid, completed half-moves (the caller keeps the pre-move board, as with
/// any invalid move).
#[must_use]
pub fn commit_with_sprout(
    state: &Graph,
    origin: &Vertex,
    stroke: &Polyline,
    tap: Point,
    glue_radius: f32,
) -> Option<Graph> {
    if stroke.is_empty() {
        return None;
    }
    let (split, first_half, second_half) = stroke.split_at_nearest(tap);
    let second_half = second_half.trimmed(split, glue_radius);
    if first_half.len() < 2 || second_half.is_empty() {
        return None;
    }

    let sprout = Vertex::sprout(split);
    let with_sprout = state.with_sprout(sprout.clone()).ok()?;

    let first = Move::new(origin.clone(), first_half, with_sprout.clone(), glue_radius);
    if !(first.is_valid() && first.is_completed()) {
        return None;
    }
    let after_first = transform::commit(&with_sprout, &first);

    let second = Move::new(sprout.clone(), second_half, after_first.clone(), glue_radius);
    if !(second.is_valid() && second.is_completed()) {
        return None;
    }
    let next = transform::commit(&after_first, &second);
    debug!(sprout = %sprout, "sprout inserted on move");
    Some(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comb::{CompoundEdge, EdgeKind};
    use crate::geom::Point;

    fn p(x: f32, y: f32) -> Point {
        Point::new(x, y)
    }

    fn board() -> (Graph, Vertex, Vertex, CompoundEdge) {
        let a = Vertex::sprout(p(-50.0, 0.0)).with_label("v1");
        let b = Vertex::sprout(p(50.0, 0.0)).with_label("v2");
        let cobweb = CompoundEdge::straight(a.clone(), b.clone(), EdgeKind::Cobweb);
        (Graph::from_edge_pairs([cobweb.clone()]), a, b, cobweb)
    }

    #[test]
    fn test_sprout_lands_on_the_stroke_with_one_life_left() {
        let (state, a, _, _) = board();
        let stroke = Polyline::new(vec![
            p(-50.0, 0.0),
            p(-20.0, 30.0),
            p(20.0, 30.0),
            p(48.0, 6.0),
        ]);
        let next = commit_with_sprout(&state, &a, &stroke, p(0.0, 33.0), 10.0).unwrap();

        let sprout = Vertex::sprout(p(0.0, 30.0));
        assert!(next.vertices().contains(&sprout));
        assert_eq!(next.move_degree(&sprout), 2);
        assert!(next.is_alive_sprout(&sprout));
    }

    #[test]
    fn test_rejects_tap_past_the_stroke_tail() {
        let (state, a, _, _) = board();
        let stroke = Polyline::new(vec![p(-50.0, 0.0), p(-20.0, 30.0), p(20.0, 30.0)]);
        // Nearest stroke point is the tail itself: no second half remains.
        assert_eq!(
            commit_with_sprout(&state, &a, &stroke, p(30.0, 35.0), 10.0),
            None
        );
    }

    #[test]
    fn test_rejects_occupied_position() {
        let (state, a, b, _) = board();
        // The tap snaps onto v2's exact position.
        let stroke = Polyline::new(vec![p(-20.0, 30.0), p(50.0, 0.0), p(20.0, -30.0)]);
        assert_eq!(
            commit_with_sprout(&state, &a, &stroke, b.position(), 10.0),
            None
        );
    }
}
