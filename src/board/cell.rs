//! A single board cell.

use serde::{Deserialize, Serialize};

use super::Position;
use crate::core::{Player, CELL_CAPACITY};

/// One square of the board.
///
/// `owner` is `None` exactly when `dots == 0`. A cell may briefly hold
/// `dots >= capacity` between a placement and the next explosion round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    /// Fixed address of this cell.
    pub position: Position,

    /// Units currently stored.
    pub dots: u32,

    /// Current owner, if any units are present.
    pub owner: Option<Player>,
}

impl Cell {
    /// An empty, unowned cell.
    #[must_use]
    pub const fn empty(position: Position) -> Self {
        Self {
            position,
            dots: 0,
            owner: None,
        }
    }

    /// Explosion threshold. Identical for every cell.
    #[must_use]
    pub const fn capacity(&self) -> u32 {
        CELL_CAPACITY
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.dots == 0
    }

    /// At or above capacity; will explode in the next round.
    #[must_use]
    pub const fn is_unstable(&self) -> bool {
        self.dots >= CELL_CAPACITY
    }

    /// Exactly one unit short of exploding.
    #[must_use]
    pub const fn is_critical(&self) -> bool {
        self.dots + 1 == CELL_CAPACITY
    }

    #[must_use]
    pub fn is_owned_by(&self, player: Player) -> bool {
        self.owner == Some(player)
    }
}
