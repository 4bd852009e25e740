//! A move: the chain of submoves drawn in one player turn.
//!
//! The chain is linked lazily through `Submove::next`; a move only ever
//! holds its head and materializes the chain on demand. Validity is the
//! conjunction of every link's validity, completion requires the tail to
//! end on a sprout.

use crate::comb::{Graph, Vertex};
use crate::geom::Polyline;

use super::submove::{Submove, Termination};
use super::transform;

/// One full player turn: a curve from one living sprout to another (or the
/// same) sprout, possibly crossing several faces on the way.
#[derive(Clone, Debug)]
pub struct Move {
    head: Submove,
}

impl Move {
    /// A move drawn from `origin` along `stroke` against `state`.
    #[must_use]
    pub fn new(origin: Vertex, stroke: Polyline, state: Graph, glue_radius: f32) -> Self {
        Self { head: Submove::new(origin, stroke, state, glue_radius) }
    }

    #[must_use]
    pub fn head(&self) -> &Submove {
        &self.head
    }

    /// The board this move was drawn against.
    #[must_use]
    pub fn state(&self) -> &Graph {
        self.head.state()
    }

    /// Materialize the submove chain, head first.
    ///
    /// Each continuation resolves against the speculative application of
    /// its predecessor, so walking the chain is what actually carries a
    /// stroke across face boundaries.
    #[must_use]
    pub fn submoves(&self) -> Vec<Submove> {
        let mut chain = vec![self.head.clone()];
        while chain.last().expect("chain starts nonempty").has_next() {
            let next = chain.last().expect("chain starts nonempty").next();
            chain.push(next);
        }
        chain
    }

    /// Every submove in the chain is valid.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.submoves().iter().all(Submove::is_valid)
    }

    /// The chain terminates definitively on a sprout.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.submoves()
            .last()
            .map_or(false, |tail| tail.resolve().reason() == Termination::Sprout)
    }

    /// Commit this move against the board it was drawn on.
    ///
    /// Panics unless the move is valid and completed; check first.
    #[must_use]
    pub fn commit(&self) -> Graph {
        transform::commit(self.head.state(), self)
    }
}
