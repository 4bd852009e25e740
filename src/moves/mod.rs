//! Move resolution and board transformation.
//!
//! A raw stroke resolves into a chain of submoves (one per face it
//! traverses), the chain forms a move, and committing the move transforms
//! the board. Resolution is speculative: each continuation submove resolves
//! against a provisional board with its predecessor already applied, while
//! the authoritative board is only transformed once, at commit.

pub mod sequence;
pub mod sprout_add;
pub mod submove;
pub mod transform;

pub use sequence::Move;
pub use sprout_add::commit_with_sprout;
pub use submove::{ResolvedStroke, Submove, Termination};
pub use transform::commit;
