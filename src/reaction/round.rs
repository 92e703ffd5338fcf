//! Per-round diffs handed to renderers.

use serde::{Deserialize, Serialize};

use crate::board::{Board, Position};
use crate::core::Player;

/// New contents of one cell after a step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellChange {
    pub position: Position,
    pub dots: u32,
    pub owner: Option<Player>,
}

impl CellChange {
    /// Capture the current contents of `pos`.
    #[must_use]
    pub fn capture(board: &Board, pos: Position) -> Self {
        let cell = board.cell(pos);
        Self {
            position: pos,
            dots: cell.dots,
            owner: cell.owner,
        }
    }

    /// Every cell that differs between `before` and `after`, row-major.
    #[must_use]
    pub fn diff(before: &Board, after: &Board) -> Vec<Self> {
        before
            .cells()
            .zip(after.cells())
            .filter(|(a, b)| a != b)
            .map(|(_, b)| Self {
                position: b.position,
                dots: b.dots,
                owner: b.owner,
            })
            .collect()
    }
}

/// One batch of simultaneous explosions.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplosionRound {
    /// Cells that exploded this round, in scan order.
    pub exploded: Vec<Position>,

    /// Final contents of every cell the round changed.
    pub changes: Vec<CellChange>,
}

/// Outcome of resolving a board to stability.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    /// Rounds in the order they were applied.
    pub rounds: Vec<ExplosionRound>,

    /// Set if a win was detected; resolution stops at that point.
    pub winner: Option<Player>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diff_reports_only_changed_cells() {
        let before = Board::new();
        let mut after = before.clone();
        after.set(Position::new(1, 1), 2, Some(Player::Red));
        after.set(Position::new(3, 0), 1, Some(Player::Blue));

        let diff = CellChange::diff(&before, &after);
        assert_eq!(diff.len(), 2);
        assert_eq!(diff[0].position, Position::new(1, 1));
        assert_eq!(diff[0].dots, 2);
        assert_eq!(diff[1].owner, Some(Player::Blue));
    }

    #[test]
    fn test_capture() {
        let mut board = Board::new();
        board.add_unit(Position::new(4, 2), Player::Blue);

        let change = CellChange::capture(&board, Position::new(4, 2));
        assert_eq!(change.dots, 1);
        assert_eq!(change.owner, Some(Player::Blue));
    }
}
