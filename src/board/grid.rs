//! The 5x5 grid and its mutation primitives.
//!
//! The board performs no legality checks. Callers (the turn controller and
//! the reaction engine) decide what is allowed; the board only applies it.

use serde::{Deserialize, Serialize};

use super::{Cell, Neighbors, Position};
use crate::core::{Player, PlayerMap, CELL_CAPACITY, COLS, ROWS};

/// Grid of cells addressed by [`Position`]. No wraparound.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; ROWS * COLS],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// A fresh board with every cell empty.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cells: std::array::from_fn(|i| Cell::empty(Position::new(i / COLS, i % COLS))),
        }
    }

    /// Zero every cell and clear all owners.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Get a cell.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is off the board, including positions such as
    /// `(0, 7)` whose flat index would land on another cell.
    #[must_use]
    pub fn cell(&self, pos: Position) -> &Cell {
        assert!(pos.in_bounds(), "position {} off the board", pos);
        &self.cells[pos.index()]
    }

    /// Get a cell, or `None` if `pos` is off the board.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<&Cell> {
        pos.in_bounds().then(|| &self.cells[pos.index()])
    }

    fn cell_mut(&mut self, pos: Position) -> &mut Cell {
        assert!(pos.in_bounds(), "position {} off the board", pos);
        &mut self.cells[pos.index()]
    }

    /// Iterate over all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Add one unit at `pos` and hand the cell to `player`.
    pub fn add_unit(&mut self, pos: Position, player: Player) {
        let cell = self.cell_mut(pos);
        cell.dots += 1;
        cell.owner = Some(player);
    }

    /// Remove one capacity's worth of units from `pos`. The owner is kept
    /// unless the cell empties.
    pub fn discharge(&mut self, pos: Position) {
        let cell = self.cell_mut(pos);
        debug_assert!(cell.dots >= CELL_CAPACITY, "discharging stable cell {}", pos);
        cell.dots = cell.dots.saturating_sub(CELL_CAPACITY);
        if cell.dots == 0 {
            cell.owner = None;
        }
    }

    /// Overwrite a cell. An owner passed with `dots == 0` is dropped.
    ///
    /// Used to seed positions for analysis and tests.
    pub fn set(&mut self, pos: Position, dots: u32, owner: Option<Player>) {
        let cell = self.cell_mut(pos);
        cell.dots = dots;
        cell.owner = if dots == 0 { None } else { owner };
    }

    /// Whether `player` owns at least one cell.
    #[must_use]
    pub fn owner_has_presence(&self, player: Player) -> bool {
        self.cells.iter().any(|c| c.is_owned_by(player))
    }

    /// In-bounds orthogonal neighbors of `pos`.
    #[must_use]
    pub fn neighbors_of(&self, pos: Position) -> Neighbors {
        pos.neighbors()
    }

    /// Sum of units across the board.
    #[must_use]
    pub fn total_units(&self) -> u32 {
        self.cells.iter().map(|c| c.dots).sum()
    }

    /// Number of cells owned by `player`.
    #[must_use]
    pub fn count_owned_by(&self, player: Player) -> usize {
        self.cells.iter().filter(|c| c.is_owned_by(player)).count()
    }

    /// Owned-cell counts for both players in one scan.
    #[must_use]
    pub fn owned_counts(&self) -> PlayerMap<usize> {
        let mut counts = PlayerMap::default();
        for owner in self.cells.iter().filter_map(|c| c.owner) {
            counts[owner] += 1;
        }
        counts
    }

    /// Positions at or above capacity, in row-major scan order.
    #[must_use]
    pub fn unstable_positions(&self) -> Vec<Position> {
        self.cells
            .iter()
            .filter(|c| c.is_unstable())
            .map(|c| c.position)
            .collect()
    }

    /// No cell is at or above capacity.
    #[must_use]
    pub fn is_stable(&self) -> bool {
        !self.cells.iter().any(Cell::is_unstable)
    }
}
