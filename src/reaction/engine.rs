//! Explosion propagation.
//!
//! Each round scans the whole board, collects every cell at or above
//! capacity, and explodes that batch together: the cell loses one
//! capacity's worth of units and every in-bounds neighbor gains one unit
//! and is taken over by the exploding side. Rounds repeat until the board
//! is stable or a win is detected.
//!
//! A cell holding two or more capacities' worth of units only discharges
//! once per round; whatever remains above capacity is collected again in
//! the next scan.

use log::debug;

use super::{CellChange, ExplosionRound, Resolution};
use crate::board::{Board, Position};
use crate::core::Player;
use crate::rules;

/// Drives a board from an unstable state to a stable (or decided) one.
#[derive(Clone, Copy, Debug, Default)]
pub struct ChainReaction;

impl ChainReaction {
    /// Resolve all pending explosions on `board`.
    ///
    /// The win check runs before the first scan, after every round, and
    /// therefore also on the final stable board. A detected win stops the
    /// loop immediately, even if unstable cells remain.
    pub fn resolve(board: &mut Board) -> Resolution {
        let mut resolution = Resolution::default();

        loop {
            if let Some(winner) = rules::winner(board) {
                debug!(
                    "{} wins after {} round(s)",
                    winner,
                    resolution.rounds.len()
                );
                resolution.winner = Some(winner);
                break;
            }

            let unstable = board.unstable_positions();
            if unstable.is_empty() {
                break;
            }

            let round = Self::explode(board, &unstable);
            debug!(
                "round {}: {} explosion(s), {} cell(s) changed",
                resolution.rounds.len() + 1,
                round.exploded.len(),
                round.changes.len()
            );
            resolution.rounds.push(round);
        }

        resolution
    }

    /// Apply one batch of simultaneous explosions.
    ///
    /// Owners are read before any cell in the batch is touched.
    pub fn explode(board: &mut Board, batch: &[Position]) -> ExplosionRound {
        let before = board.clone();

        let sources: Vec<(Position, Player)> = batch
            .iter()
            .filter_map(|&pos| {
                let owner = board.cell(pos).owner;
                debug_assert!(owner.is_some(), "unowned cell {} over capacity", pos);
                owner.map(|o| (pos, o))
            })
            .collect();

        for &(pos, owner) in &sources {
            board.discharge(pos);
            for neighbor in board.neighbors_of(pos) {
                board.add_unit(neighbor, owner);
            }
        }

        ExplosionRound {
            exploded: sources.into_iter().map(|(pos, _)| pos).collect(),
            changes: CellChange::diff(&before, board),
        }
    }
}
