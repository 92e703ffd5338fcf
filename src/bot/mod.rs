//! Automated players.
//!
//! Policies are trait-based so a session can seat any of them:
//! - [`Heuristic`]: one-ply scoring, the default bot
//! - [`UniformRandom`]: uniform choice among legal moves
//!
//! Randomness is always drawn from the caller's [`GameRng`], so a fixed
//! seed makes every choice reproducible.

mod heuristic;
mod random;

pub use heuristic::{Heuristic, ScoredMove};
pub use random::UniformRandom;

use crate::board::{Board, Position};
use crate::core::{GameRng, Player};

/// Chooses a move for a player.
pub trait MovePolicy {
    /// Pick one legal target for `player`, or `None` if there is none.
    fn choose_move(&self, board: &Board, player: Player, rng: &mut GameRng) -> Option<Position>;
}
