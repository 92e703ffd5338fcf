//! Turn controller: legality gating, the move-in-progress flag, and turn
//! handoff.

mod controller;
mod rejection;

pub use controller::{MoveReport, PendingMove, TurnController, TurnState};
pub use rejection::MoveRejection;
