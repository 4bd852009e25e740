//! Board genesis and raw-input resampling.
//!
//! The initial board puts `count` sprouts evenly spaced on a circle and
//! joins consecutive sprouts with straight cobweb edges into a single
//! chain: the graph is connected, every edge is scaffolding, and there is
//! exactly one face (at most two vertices of degree one, the rest degree
//! two). The resampler turns a raw pointer trail into the simplified
//! polyline the resolution pipeline consumes.

use std::f32::consts::TAU;

use crate::comb::{CompoundEdge, EdgeKind, Graph, Vertex};
use crate::geom::{Point, Polyline};

/// The starting board: `count` sprouts on a circle around `center`, chained
/// by cobweb edges.
#[must_use]
pub fn initial_state(count: usize, center: Point, radius: f32) -> Graph {
    let sprouts: Vec<Vertex> = (0..count)
        .map(|i| {
            let angle = TAU * i as f32 / count as f32;
            Vertex::sprout(Point::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            ))
            .with_label(i.to_string())
        })
        .collect();

    if sprouts.len() == 1 {
        return Graph::empty()
            .with_sprout(sprouts.into_iter().next().expect("one sprout"))
            .expect("empty board has no occupied positions");
    }

    Graph::from_edge_pairs(
        sprouts
            .windows(2)
            .map(|w| CompoundEdge::straight(w[0].clone(), w[1].clone(), EdgeKind::Cobweb)),
    )
}

/// Simplify a raw pointer trail: keep a sample only when it is farther than
/// `min_spacing` from the last retained one. The first point is always kept.
#[must_use]
pub fn resample(raw: &[Point], min_spacing: f32) -> Polyline {
    let mut kept: Vec<Point> = Vec::new();
    for &p in raw {
        match kept.last() {
            None => kept.push(p),
            Some(last) if last.dist(p) > min_spacing => kept.push(p),
            Some(_) => {}
        }
    }
    Polyline::new(kept)
}
