//! Fixed board constants and tunable bot weights.
//!
//! Board geometry and cell capacity are part of the game's rules and are
//! not configurable. Only the bot's scoring weights live in a config
//! struct.

use serde::{Deserialize, Serialize};

/// Number of board rows.
pub const ROWS: usize = 5;

/// Number of board columns.
pub const COLS: usize = 5;

/// Units a cell holds before it explodes. Same for every cell.
pub const CELL_CAPACITY: u32 = 4;

/// A win is only declared once the board holds at least this many units.
pub const MIN_UNITS_FOR_WIN: u32 = 2;

/// Scoring weights for the heuristic bot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HeuristicConfig {
    /// Bonus when the placement makes the cell explode.
    pub explosion_bonus: f64,

    /// Bonus per enemy-owned orthogonal neighbor of an exploding cell.
    pub enemy_neighbor_bonus: f64,

    /// Bonus when the placement leaves the cell one short of capacity.
    pub near_capacity_bonus: f64,

    /// Penalty when an orthogonal neighbor is an enemy cell one short of
    /// capacity.
    pub critical_enemy_penalty: f64,

    /// Bonus for corner cells.
    pub corner_bonus: f64,

    /// Bonus for non-corner edge cells.
    pub edge_bonus: f64,

    /// Upper bound (exclusive) of the uniform random jitter added to every
    /// candidate. 0 makes the bot deterministic.
    pub jitter: f64,
}

impl Default for HeuristicConfig {
    fn default() -> Self {
        Self {
            explosion_bonus: 100.0,
            enemy_neighbor_bonus: 20.0,
            near_capacity_bonus: 10.0,
            critical_enemy_penalty: 50.0,
            corner_bonus: 5.0,
            edge_bonus: 2.0,
            jitter: 5.0,
        }
    }
}

impl HeuristicConfig {
    /// Set the jitter magnitude.
    #[must_use]
    pub fn with_jitter(mut self, jitter: f64) -> Self {
        self.jitter = jitter;
        self
    }

    /// Disable jitter (pure argmax, first candidate wins ties).
    #[must_use]
    pub fn deterministic(self) -> Self {
        self.with_jitter(0.0)
    }
}
