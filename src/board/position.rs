//! Grid coordinates.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{COLS, ROWS};

/// Orthogonal neighbors of a position. Never more than four.
pub type Neighbors = SmallVec<[Position; 4]>;

/// A (row, column) address on the board. Row 0 is the top row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a position. Bounds are not checked; see [`Position::in_bounds`].
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Whether the position lies on the board.
    #[must_use]
    pub const fn in_bounds(self) -> bool {
        self.row < ROWS && self.col < COLS
    }

    /// Row-major index into a flat `ROWS * COLS` array.
    #[must_use]
    pub const fn index(self) -> usize {
        self.row * COLS + self.col
    }

    /// Whether the position is one of the four corners.
    #[must_use]
    pub const fn is_corner(self) -> bool {
        (self.row == 0 || self.row == ROWS - 1) && (self.col == 0 || self.col == COLS - 1)
    }

    /// Whether the position is on the border but not a corner.
    #[must_use]
    pub const fn is_edge(self) -> bool {
        let border = self.row == 0 || self.row == ROWS - 1 || self.col == 0 || self.col == COLS - 1;
        border && !self.is_corner()
    }

    /// In-bounds orthogonal neighbors, in the order up, down, left, right.
    ///
    /// ```
    /// use chain_reaction::board::Position;
    ///
    /// assert_eq!(Position::new(0, 0).neighbors().len(), 2);
    /// assert_eq!(Position::new(0, 2).neighbors().len(), 3);
    /// assert_eq!(Position::new(2, 2).neighbors().len(), 4);
    /// ```
    #[must_use]
    pub fn neighbors(self) -> Neighbors {
        let mut out = Neighbors::new();
        if self.row > 0 {
            out.push(Position::new(self.row - 1, self.col));
        }
        if self.row + 1 < ROWS {
            out.push(Position::new(self.row + 1, self.col));
        }
        if self.col > 0 {
            out.push(Position::new(self.row, self.col - 1));
        }
        if self.col + 1 < COLS {
            out.push(Position::new(self.row, self.col + 1));
        }
        out
    }

    /// Every board position in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..ROWS).flat_map(|row| (0..COLS).map(move |col| Position::new(row, col)))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
