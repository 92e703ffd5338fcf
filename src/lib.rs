//! # chain-reaction
//!
//! Game engine for a two-player territorial capture game on a fixed 5x5
//! grid. Players drop units into cells; a cell holding four units explodes,
//! pushing one unit into each orthogonal neighbor and taking it over. A side
//! that loses every cell loses the game.
//!
//! ## Design Principles
//!
//! 1. **Headless**: The engine never sleeps or renders. Every move returns
//!    the full list of per-round diffs; a presentation layer paces them.
//!
//! 2. **Explicit State**: A [`GameSession`] owns the board, turn state and
//!    bot. Nothing lives in globals.
//!
//! 3. **Injectable Randomness**: The starting side and the bot's
//!    tie-breaking jitter come from a seedable [`GameRng`].
//!
//! ## Modules
//!
//! - `core`: Player identity, RNG, fixed constants, bot weights
//! - `board`: Positions, cells and the grid
//! - `rules`: Move legality and win detection
//! - `reaction`: The explosion-propagation engine
//! - `turn`: Turn controller and move rejections
//! - `bot`: Move policies for the automated player
//! - `session`: Start/restart lifecycle and the presentation-facing API

pub mod board;
pub mod bot;
pub mod core;
pub mod reaction;
pub mod rules;
pub mod session;
pub mod turn;

// Re-export commonly used types
pub use crate::core::{
    GameRng, HeuristicConfig, Player, PlayerInfo, PlayerMap, CELL_CAPACITY, COLS,
    MIN_UNITS_FOR_WIN, ROWS,
};

pub use crate::board::{Board, Cell, Position};

pub use crate::rules::Phase;

pub use crate::reaction::{CellChange, ChainReaction, ExplosionRound, Resolution};

pub use crate::turn::{MoveRejection, MoveReport, PendingMove, TurnController, TurnState};

pub use crate::bot::{Heuristic, MovePolicy, ScoredMove, UniformRandom};

pub use crate::session::{GameMode, GameSession, SessionBuilder, SessionEvent, Snapshot};
