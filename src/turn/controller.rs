//! Turn sequencing and move gating.
//!
//! State machine:
//!
//! ```text
//! Idle --begin_move--> Processing --finish_move--> Idle (other player)
//!                                              \-> Won(player)
//! any  --reset--> Idle
//! ```
//!
//! While `Processing`, every further request is rejected with
//! [`MoveRejection::Busy`]. This is the only serialization the game needs:
//! moves are never re-entrant.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::MoveRejection;
use crate::board::{Board, Position};
use crate::core::Player;
use crate::reaction::{CellChange, ChainReaction, ExplosionRound};
use crate::rules;

/// Where the controller is in its move cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnState {
    /// Waiting for the active player's move.
    Idle,
    /// A unit has been placed and its explosions are not yet resolved.
    Processing,
    /// Terminal. Carries the winner.
    Won(Player),
}

/// A placed unit awaiting resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingMove {
    pub player: Player,
    pub position: Position,
    /// Contents of the target cell right after the placement.
    pub placed: CellChange,
}

/// Everything a renderer needs to animate one accepted move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveReport {
    pub player: Player,
    pub position: Position,
    /// Contents of the target cell right after the placement.
    pub placed: CellChange,
    /// Explosion rounds, in order.
    pub rounds: Vec<ExplosionRound>,
    /// Set if this move decided the game.
    pub winner: Option<Player>,
    /// Who moves next; `None` once the game is over.
    pub next_player: Option<Player>,
}

/// Owns the active player and the move-in-progress flag.
#[derive(Clone, Debug)]
pub struct TurnController {
    active: Player,
    state: TurnState,
    pending: Option<PendingMove>,
    moves_played: u32,
}

impl TurnController {
    /// A fresh controller, idle, with `starting` to move.
    #[must_use]
    pub fn new(starting: Player) -> Self {
        Self {
            active: starting,
            state: TurnState::Idle,
            pending: None,
            moves_played: 0,
        }
    }

    /// Return to a fresh idle state, discarding any move in flight.
    pub fn reset(&mut self, starting: Player) {
        *self = Self::new(starting);
    }

    #[must_use]
    pub fn active_player(&self) -> Player {
        self.active
    }

    #[must_use]
    pub fn state(&self) -> TurnState {
        self.state
    }

    /// Number of moves accepted since the last reset.
    #[must_use]
    pub fn moves_played(&self) -> u32 {
        self.moves_played
    }

    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        match self.state {
            TurnState::Won(p) => Some(p),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_processing(&self) -> bool {
        self.state == TurnState::Processing
    }

    /// The placed-but-unresolved move, if any.
    #[must_use]
    pub fn pending(&self) -> Option<&PendingMove> {
        self.pending.as_ref()
    }

    /// Check a request without applying it.
    pub fn validate(
        &self,
        board: &Board,
        pos: Position,
        player: Player,
    ) -> Result<(), MoveRejection> {
        match self.state {
            TurnState::Processing => return Err(MoveRejection::Busy),
            TurnState::Won(winner) => return Err(MoveRejection::GameOver { winner }),
            TurnState::Idle => {}
        }

        if player != self.active {
            return Err(MoveRejection::NotYourTurn {
                active: self.active,
                requested: player,
            });
        }

        if !pos.in_bounds() {
            return Err(MoveRejection::OutOfBounds(pos));
        }

        if !rules::is_legal(board, pos, player) {
            return Err(MoveRejection::IllegalTarget {
                position: pos,
                phase: rules::phase_of(board, player),
            });
        }

        Ok(())
    }

    /// Validate and place the unit, leaving the controller `Processing`.
    ///
    /// Call [`finish_move`](Self::finish_move) to resolve explosions.
    pub fn begin_move(
        &mut self,
        board: &mut Board,
        pos: Position,
        player: Player,
    ) -> Result<PendingMove, MoveRejection> {
        let pending = self.place(board, pos, player)?;
        self.pending = Some(pending);
        Ok(pending)
    }

    /// Resolve the pending move. Returns `None` if nothing is pending.
    pub fn finish_move(&mut self, board: &mut Board) -> Option<MoveReport> {
        let pending = self.pending.take()?;
        Some(self.complete(board, pending))
    }

    /// Place and fully resolve a move in one step.
    pub fn submit_move(
        &mut self,
        board: &mut Board,
        pos: Position,
        player: Player,
    ) -> Result<MoveReport, MoveRejection> {
        let pending = self.place(board, pos, player)?;
        Ok(self.complete(board, pending))
    }

    fn place(
        &mut self,
        board: &mut Board,
        pos: Position,
        player: Player,
    ) -> Result<PendingMove, MoveRejection> {
        if let Err(rejection) = self.validate(board, pos, player) {
            debug!("rejected move at {}: {}", pos, rejection);
            return Err(rejection);
        }

        self.state = TurnState::Processing;
        board.add_unit(pos, player);
        self.moves_played += 1;

        Ok(PendingMove {
            player,
            position: pos,
            placed: CellChange::capture(board, pos),
        })
    }

    fn complete(&mut self, board: &mut Board, pending: PendingMove) -> MoveReport {
        let resolution = ChainReaction::resolve(board);

        let next_player = match resolution.winner {
            Some(winner) => {
                info!("{} wins on move {}", winner, self.moves_played);
                self.state = TurnState::Won(winner);
                None
            }
            None => {
                self.active = self.active.opponent();
                self.state = TurnState::Idle;
                Some(self.active)
            }
        };

        MoveReport {
            player: pending.player,
            position: pending.position,
            placed: pending.placed,
            rounds: resolution.rounds,
            winner: resolution.winner,
            next_player,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_controller_is_idle() {
        let controller = TurnController::new(Player::Blue);

        assert_eq!(controller.state(), TurnState::Idle);
        assert_eq!(controller.active_player(), Player::Blue);
        assert_eq!(controller.winner(), None);
        assert!(controller.pending().is_none());
    }

    #[test]
    fn test_first_move_passes_turn() {
        let mut board = Board::new();
        let mut controller = TurnController::new(Player::Red);

        let report = controller
            .submit_move(&mut board, Position::new(0, 0), Player::Red)
            .unwrap();

        assert!(report.rounds.is_empty());
        assert_eq!(report.next_player, Some(Player::Blue));
        assert_eq!(controller.active_player(), Player::Blue);
        assert_eq!(board.cell(Position::new(0, 0)).dots, 1);
        assert_eq!(board.total_units(), 1);
    }

    #[test]
    fn test_wrong_player_rejected() {
        let mut board = Board::new();
        let mut controller = TurnController::new(Player::Red);

        let result = controller.submit_move(&mut board, Position::new(0, 0), Player::Blue);

        assert_eq!(
            result,
            Err(MoveRejection::NotYourTurn {
                active: Player::Red,
                requested: Player::Blue
            })
        );
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_busy_while_processing() {
        let mut board = Board::new();
        let mut controller = TurnController::new(Player::Red);

        controller
            .begin_move(&mut board, Position::new(1, 1), Player::Red)
            .unwrap();
        assert!(controller.is_processing());

        let before = board.clone();
        let result = controller.submit_move(&mut board, Position::new(1, 1), Player::Red);
        assert_eq!(result, Err(MoveRejection::Busy));
        assert_eq!(board, before);

        let report = controller.finish_move(&mut board).unwrap();
        assert_eq!(report.position, Position::new(1, 1));
        assert_eq!(controller.state(), TurnState::Idle);
        assert!(controller.finish_move(&mut board).is_none());
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let mut board = Board::new();
        let mut controller = TurnController::new(Player::Red);

        let result = controller.submit_move(&mut board, Position::new(7, 1), Player::Red);
        assert_eq!(result, Err(MoveRejection::OutOfBounds(Position::new(7, 1))));
    }

    #[test]
    fn test_reset_clears_terminal_state() {
        let mut board = Board::new();
        board.set(Position::new(0, 0), 3, Some(Player::Red));
        board.set(Position::new(0, 1), 1, Some(Player::Blue));
        let mut controller = TurnController::new(Player::Red);

        let report = controller
            .submit_move(&mut board, Position::new(0, 0), Player::Red)
            .unwrap();
        assert_eq!(report.winner, Some(Player::Red));
        assert_eq!(controller.state(), TurnState::Won(Player::Red));

        controller.reset(Player::Blue);
        assert_eq!(controller.state(), TurnState::Idle);
        assert_eq!(controller.active_player(), Player::Blue);
        assert_eq!(controller.moves_played(), 0);
    }
}
