//! Stroke resolution: turning a raw polyline into a submove.
//!
//! A submove is the maximal prefix of a stroke confined to a single face of
//! the current board. Resolution is lazy and pure: the submove holds its
//! origin, the candidate stroke, the board it resolves against and the glue
//! radius; [`Submove::resolve`] scans the samples in order and decides where
//! the stroke must stop.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::comb::{
    face_intersection, nearest_sprout, self_intersection, CompoundEdge, EdgeKind, Graph, Vertex,
};
use crate::geom::{Point, Polyline};

use super::transform;

/// Why a resolution stopped where it did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Termination {
    /// The stroke ran out of samples without resolving. Not an error: the
    /// stroke is simply not long enough yet.
    Pending,
    /// Glued to a living game point. A definitive, potentially valid end.
    Sprout,
    /// Crossed a cobweb edge out of the current face. A continuation point:
    /// the stroke must go on in the next face.
    FaceExit,
    /// Crossed its own consumed prefix. Always invalid.
    SelfCross,
    /// Crossed a drawn move edge. Always invalid, like a self-crossing.
    MoveCross,
}

/// The outcome of resolving a submove.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedStroke {
    points: Vec<Point>,
    end: Vertex,
    reason: Termination,
    crossed: Option<CompoundEdge>,
    consumed: usize,
}

impl ResolvedStroke {
    /// The traversed polyline, origin included.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The vertex the resolution stopped at.
    #[must_use]
    pub fn end(&self) -> &Vertex {
        &self.end
    }

    #[must_use]
    pub fn reason(&self) -> Termination {
        self.reason
    }

    /// The face edge the stroke crossed, for `FaceExit`/`MoveCross` ends.
    #[must_use]
    pub fn crossed(&self) -> Option<&CompoundEdge> {
        self.crossed.as_ref()
    }

    /// How many stroke samples the resolution consumed.
    #[must_use]
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// The directed move edge this resolution traces from `origin`.
    #[must_use]
    pub fn edge(&self, origin: &Vertex) -> CompoundEdge {
        CompoundEdge::new(
            origin.clone(),
            self.end.clone(),
            EdgeKind::Move,
            Polyline::new(self.points.clone()),
        )
    }
}

/// One maximal portion of a move confined to a single face.
#[derive(Clone, Debug)]
pub struct Submove {
    origin: Vertex,
    stroke: Polyline,
    state: Graph,
    glue_radius: f32,
}

impl Submove {
    /// A submove starting at `origin`, resolving `stroke` against `state`.
    #[must_use]
    pub fn new(origin: Vertex, stroke: Polyline, state: Graph, glue_radius: f32) -> Self {
        debug_assert!(glue_radius > 0.0, "glue radius must be positive");
        Self { origin, stroke, state, glue_radius }
    }

    #[must_use]
    pub fn origin(&self) -> &Vertex {
        &self.origin
    }

    #[must_use]
    pub fn stroke(&self) -> &Polyline {
        &self.stroke
    }

    /// The board this submove resolves against (pre-submove state).
    #[must_use]
    pub fn state(&self) -> &Graph {
        &self.state
    }

    #[must_use]
    pub fn glue_radius(&self) -> f32 {
        self.glue_radius
    }

    /// Scan the stroke and decide where it stops.
    ///
    /// Per sample, in order: the segment from the previous point is tested
    /// against the stroke's own prefix (self-crossing wins over everything
    /// later), then against the boundary of the origin's face, and finally
    /// the sample is tested against the glue radius of the nearest sprout.
    /// A stroke that survives all samples is `Pending`.
    #[must_use]
    pub fn resolve(&self) -> ResolvedStroke {
        let samples = self.stroke.points();
        let origin_pos = self.origin.position();
        if samples.is_empty() {
            return ResolvedStroke {
                points: vec![origin_pos],
                end: self.origin.clone(),
                reason: Termination::Pending,
                crossed: None,
                consumed: 0,
            };
        }

        // The probe aims at the first sample that actually leaves the
        // origin; raw strokes often begin on the sprout itself.
        let Some(toward) = samples.iter().copied().find(|&p| p != origin_pos) else {
            return ResolvedStroke {
                points: vec![origin_pos],
                end: self.origin.clone(),
                reason: Termination::Pending,
                crossed: None,
                consumed: samples.len(),
            };
        };
        let face = self.state.face_around(&self.origin, toward);
        let mut traversed = vec![origin_pos];

        for (i, &p) in samples.iter().enumerate() {
            let prev = *traversed.last().expect("traversed starts nonempty");
            if p == prev {
                // Coincident sample: degenerate geometry, skip.
                continue;
            }

            if let Some(x) = self_intersection(&traversed, prev, p) {
                traversed.push(x);
                trace!(at = %x, "stroke crossed itself");
                return ResolvedStroke {
                    points: traversed,
                    end: Vertex::boundary(x),
                    reason: Termination::SelfCross,
                    crossed: None,
                    consumed: i,
                };
            }

            if let Some(crossing) = face_intersection(&face, prev, p) {
                let reason = match crossing.edge.kind() {
                    EdgeKind::Cobweb => Termination::FaceExit,
                    EdgeKind::Move => Termination::MoveCross,
                };
                traversed.push(crossing.point);
                trace!(at = %crossing.point, ?reason, "stroke left its face");
                return ResolvedStroke {
                    points: traversed,
                    end: Vertex::boundary(crossing.point),
                    reason,
                    crossed: Some(crossing.edge),
                    consumed: i,
                };
            }

            if let Some(sprout) = nearest_sprout(&self.state, p) {
                if sprout.position().dist(p) < self.glue_radius {
                    if p != sprout.position() {
                        traversed.push(p);
                    }
                    if *traversed.last().expect("traversed starts nonempty")
                        != sprout.position()
                    {
                        traversed.push(sprout.position());
                    }
                    trace!(sprout = %sprout, "stroke glued to a sprout");
                    return ResolvedStroke {
                        points: traversed,
                        end: sprout,
                        reason: Termination::Sprout,
                        crossed: None,
                        consumed: i + 1,
                    };
                }
            }

            traversed.push(p);
        }

        let tip = *traversed.last().expect("traversed starts nonempty");
        ResolvedStroke {
            points: traversed,
            end: Vertex::boundary(tip),
            reason: Termination::Pending,
            crossed: None,
            consumed: samples.len(),
        }
    }

    /// At least one sample point has been drawn.
    #[must_use]
    pub fn is_ready_to_render(&self) -> bool {
        !self.stroke.is_empty()
    }

    /// Resolution terminated on a game vertex (a sprout or a face exit)
    /// rather than running off the end of the sample.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        matches!(
            self.resolve().reason(),
            Termination::Sprout | Termination::FaceExit
        )
    }

    /// No illegal crossing, and every sprout endpoint is alive in the
    /// pre-submove board.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        if !self.is_ready_to_render() {
            return false;
        }
        let resolved = self.resolve();
        match resolved.reason() {
            Termination::SelfCross | Termination::MoveCross => false,
            _ => {
                let mut ok = true;
                if self.origin.is_sprout() {
                    ok &= self.state.is_alive_sprout(&self.origin);
                }
                if resolved.end().is_sprout() {
                    ok &= self.state.is_alive_sprout(resolved.end());
                }
                ok
            }
        }
    }

    /// Completed without reaching a sprout: the stroke continues into the
    /// next face.
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.resolve().reason() == Termination::FaceExit
    }

    /// The continuation submove in the next face.
    ///
    /// Its origin is the boundary vertex this submove stopped at, its stroke
    /// is the untraversed remainder, and its board is the *speculative*
    /// application of this submove — so the continuation resolves against
    /// the updated face structure. Panics unless [`has_next`](Self::has_next).
    #[must_use]
    pub fn next(&self) -> Submove {
        let resolved = self.resolve();
        assert_eq!(
            resolved.reason(),
            Termination::FaceExit,
            "this is the tail submove"
        );
        let remainder = Polyline::new(self.stroke.points()[resolved.consumed()..].to_vec());
        let state = transform::apply_resolved(&self.state, &self.origin, &resolved);
        Submove::new(resolved.end().clone(), remainder, state, self.glue_radius)
    }
}
