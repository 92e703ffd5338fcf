//! Game rules: who may play where, and when the game is decided.
//!
//! Both checks are pure functions of the board so the turn controller,
//! the reaction engine and the bot all share one definition.

mod legality;
mod win;

pub use legality::{is_legal, legal_moves, phase_of, Phase};
pub use win::winner;
