//! Core types: player identity, RNG, fixed constants and bot configuration.

pub mod config;
pub mod player;
pub mod rng;

pub use config::{HeuristicConfig, CELL_CAPACITY, COLS, MIN_UNITS_FOR_WIN, ROWS};
pub use player::{Player, PlayerInfo, PlayerMap};
pub use rng::GameRng;
