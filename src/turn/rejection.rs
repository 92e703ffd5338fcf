//! Reasons a move request is turned away.

use serde::{Deserialize, Serialize};

use crate::board::Position;
use crate::core::Player;
use crate::rules::Phase;

/// Why a move was not applied. A rejected move never changes state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum MoveRejection {
    /// Another move is still being resolved.
    #[display("a move is already in progress")]
    Busy,
    /// The game has been decided; only a reset is accepted.
    #[display("game over, {} won", winner)]
    GameOver { winner: Player },
    /// The requesting player is not the active player.
    #[display("{} tried to move on {}'s turn", requested, active)]
    NotYourTurn { active: Player, requested: Player },
    /// The target is off the board.
    #[display("{} is off the board", _0)]
    OutOfBounds(Position),
    /// The target is not legal for the player's current phase.
    #[display("{} is not a legal {} target", position, phase)]
    IllegalTarget { position: Position, phase: Phase },
}

impl std::error::Error for MoveRejection {}
