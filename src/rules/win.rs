//! Win detection.

use crate::board::Board;
use crate::core::{Player, MIN_UNITS_FOR_WIN};

/// Return the winner, if the board is decided.
///
/// A side wins when the opponent owns no cells, but only once the board
/// holds at least [`MIN_UNITS_FOR_WIN`] units. This keeps the very first
/// placement of the game from ending it.
#[must_use]
pub fn winner(board: &Board) -> Option<Player> {
    if board.total_units() < MIN_UNITS_FOR_WIN {
        return None;
    }

    let counts = board.owned_counts();
    Player::ALL
        .into_iter()
        .find(|&p| counts[p] == 0)
        .map(Player::opponent)
}
