//! Property-based invariant tests for the planar map and the stroke
//! pipeline:
//!
//! 1. Every directed edge has its reverse in the map
//! 2. A chain board has one face whose trace covers every dart
//! 3. A convex cycle board has exactly two faces
//! 4. Rotation `next` cycles through all entries and returns to the start
//! 5. One rotation entry per direction
//! 6. Resampling respects the minimum spacing and keeps the first sample
//! 7. Nearest-sprout lookup agrees with brute force
//! 8. Stroke resolution is pure and deterministic, and committing a valid
//!    completed move grows the board by exactly one edge pair per stroke

use proptest::prelude::*;
use sprouts_core::board;
use sprouts_core::comb::nearest_sprout;
use sprouts_core::geom::{Point, Polyline};
use sprouts_core::moves::Move;
use sprouts_core::{CompoundEdge, EdgeKind, Graph, Rotation, Vertex};

// ── Strategies ──────────────────────────────────────────────────────────

/// Distinct directions around a center, at least 5 degrees apart so no two
/// spokes collapse into the same rotation slot.
fn direction_set(size: impl Into<proptest::collection::SizeRange>) -> impl Strategy<Value = Vec<f32>> {
    prop::collection::btree_set(0u32..72, size)
        .prop_map(|degs| degs.into_iter().map(|d| ((d * 5) as f32).to_radians()).collect())
}

fn circle_point(angle: f32, radius: f32) -> Point {
    Point::new(radius * angle.cos(), radius * angle.sin())
}

fn stroke_points() -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec(
        (-45.0f32..45.0, -45.0f32..45.0).prop_map(|(x, y)| Point::new(x, y)),
        0..10,
    )
}

/// Sprouts on a circle joined into a closed convex cycle of cobweb edges.
fn cycle_board(angles: &[f32]) -> Graph {
    let sprouts: Vec<Vertex> = angles
        .iter()
        .map(|&a| Vertex::sprout(circle_point(a, 100.0)))
        .collect();
    let mut pairs: Vec<CompoundEdge> = sprouts
        .windows(2)
        .map(|w| CompoundEdge::straight(w[0].clone(), w[1].clone(), EdgeKind::Cobweb))
        .collect();
    pairs.push(CompoundEdge::straight(
        sprouts[sprouts.len() - 1].clone(),
        sprouts[0].clone(),
        EdgeKind::Cobweb,
    ));
    Graph::from_edge_pairs(pairs)
}

// ── Properties ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn prop_every_edge_has_its_reverse(n in 2usize..10, radius in 20.0f32..200.0) {
        let state = board::initial_state(n, Point::new(0.0, 0.0), radius);
        for edge in state.edges().iter() {
            prop_assert!(state.edges().contains(&edge.reversed()));
        }
    }

    #[test]
    fn prop_chain_board_has_one_face_covering_all_darts(n in 2usize..10) {
        let state = board::initial_state(n, Point::new(0.0, 0.0), 100.0);
        prop_assert_eq!(state.face_count(), 1);
        let any = state.edges().iter().next().unwrap();
        prop_assert_eq!(state.edge_face(any).len(), state.edges().len());
    }

    #[test]
    fn prop_cycle_board_has_two_faces(angles in direction_set(3..9)) {
        let state = cycle_board(&angles);
        prop_assert_eq!(state.face_count(), 2);
        // Each trace walks the cycle once, one way around.
        for edge in state.edges().iter() {
            prop_assert_eq!(state.edge_face(edge).len(), angles.len());
        }
    }

    #[test]
    fn prop_rotation_next_cycles_through_all_entries(angles in direction_set(1..10)) {
        let center = Vertex::sprout(Point::new(0.0, 0.0));
        let mut rot = Rotation::new(center.clone());
        for &a in &angles {
            rot.insert(CompoundEdge::straight(
                center.clone(),
                Vertex::sprout(circle_point(a, 50.0)),
                EdgeKind::Move,
            ));
        }
        prop_assert_eq!(rot.edges().len(), angles.len());

        let start = rot.edges()[0].clone();
        let mut cur = start.clone();
        let mut seen = std::collections::HashSet::new();
        for _ in 0..angles.len() {
            cur = rot.next(&cur);
            prop_assert!(seen.insert(cur.clone()), "revisited an entry early");
        }
        prop_assert_eq!(cur, start);
    }

    #[test]
    fn prop_one_rotation_entry_per_direction(angles in direction_set(1..10)) {
        let center = Vertex::sprout(Point::new(0.0, 0.0));
        let mut rot = Rotation::new(center.clone());
        for &a in &angles {
            // Same direction twice, different lengths: the slot is reused.
            for radius in [50.0, 80.0] {
                rot.insert(CompoundEdge::straight(
                    center.clone(),
                    Vertex::sprout(circle_point(a, radius)),
                    EdgeKind::Move,
                ));
            }
        }
        prop_assert_eq!(rot.edges().len(), angles.len());
    }

    #[test]
    fn prop_resample_respects_spacing(raw in stroke_points(), spacing in 1.0f32..15.0) {
        let line = board::resample(&raw, spacing);
        prop_assert_eq!(line.first(), raw.first().copied());
        for (a, b) in line.segments() {
            prop_assert!(a.dist(b) > spacing);
        }
        // Kept points are a subsequence of the raw trail.
        let mut cursor = 0;
        for &kept in line.points() {
            cursor += raw[cursor..]
                .iter()
                .position(|&r| r == kept)
                .expect("resampled point missing from the raw trail");
        }
    }

    #[test]
    fn prop_nearest_sprout_agrees_with_brute_force(
        n in 1usize..8,
        x in -200.0f32..200.0,
        y in -200.0f32..200.0,
    ) {
        let state = board::initial_state(n, Point::new(0.0, 0.0), 100.0);
        let query = Point::new(x, y);
        let hit = nearest_sprout(&state, query).unwrap();
        let best = state
            .sprouts()
            .iter()
            .map(|s| s.position().dist_sq(query))
            .fold(f32::INFINITY, f32::min);
        prop_assert_eq!(hit.position().dist_sq(query), best);
    }

    #[test]
    fn prop_resolution_is_pure_and_commit_grows_by_one_pair(points in stroke_points()) {
        let a = Vertex::sprout(Point::new(-50.0, 0.0));
        let b = Vertex::sprout(Point::new(50.0, 0.0));
        let state = Graph::from_edge_pairs([CompoundEdge::straight(
            a.clone(),
            b.clone(),
            EdgeKind::Cobweb,
        )]);

        let mv = Move::new(a, Polyline::new(points), state.clone(), 10.0);
        prop_assert_eq!(mv.head().resolve(), mv.head().resolve());
        prop_assert_eq!(mv.state(), &state);

        if mv.is_valid() && mv.is_completed() {
            let next = mv.commit();
            // Each face crossing swaps one pair for two; the move itself
            // lands as exactly one pair.
            let crossings = mv.submoves().len() - 1;
            prop_assert_eq!(next.edges().len(), state.edges().len() + 2 + 2 * crossings);
            prop_assert_eq!(next.edges().len() % 2, 0);
        }
    }
}
