//! Chain-reaction engine.
//!
//! [`ChainReaction::resolve`] is a pure state transition: it mutates the
//! board to its settled state and returns the sequence of per-round diffs.
//! There is no pacing here; a renderer replays the rounds at whatever speed
//! it likes.
//!
//! ```
//! use chain_reaction::board::{Board, Position};
//! use chain_reaction::core::Player;
//! use chain_reaction::reaction::ChainReaction;
//!
//! let mut board = Board::new();
//! board.set(Position::new(2, 2), 4, Some(Player::Red));
//! board.set(Position::new(0, 0), 1, Some(Player::Blue));
//!
//! let resolution = ChainReaction::resolve(&mut board);
//! assert_eq!(resolution.rounds.len(), 1);
//! assert!(board.is_stable());
//! ```

mod engine;
mod round;

pub use engine::ChainReaction;
pub use round::{CellChange, ExplosionRound, Resolution};
