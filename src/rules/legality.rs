//! Move legality.
//!
//! A player with no cells on the board is in the placement phase and may
//! play any unowned cell. Once they own something they are in the
//! reinforcement phase and may only play cells they already own.

use serde::{Deserialize, Serialize};

use crate::board::{Board, Position};
use crate::core::Player;

/// Which targets a player may currently choose from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Owns nothing; any unowned cell is legal.
    Placement,
    /// Owns at least one cell; only owned cells are legal.
    Reinforcement,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Placement => f.write_str("placement"),
            Phase::Reinforcement => f.write_str("reinforcement"),
        }
    }
}

/// Current phase of `player`.
#[must_use]
pub fn phase_of(board: &Board, player: Player) -> Phase {
    if board.owner_has_presence(player) {
        Phase::Reinforcement
    } else {
        Phase::Placement
    }
}

/// Whether `player` may place at `pos`. Off-board positions are never legal.
#[must_use]
pub fn is_legal(board: &Board, pos: Position, player: Player) -> bool {
    board
        .get(pos)
        .is_some_and(|cell| accepts(cell.owner, phase_of(board, player), player))
}

/// Every legal target for `player`, in row-major order.
#[must_use]
pub fn legal_moves(board: &Board, player: Player) -> Vec<Position> {
    let phase = phase_of(board, player);
    board
        .cells()
        .filter(|c| accepts(c.owner, phase, player))
        .map(|c| c.position)
        .collect()
}

fn accepts(owner: Option<Player>, phase: Phase, player: Player) -> bool {
    match phase {
        Phase::Placement => owner.is_none(),
        Phase::Reinforcement => owner == Some(player),
    }
}
