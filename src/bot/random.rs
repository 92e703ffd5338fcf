//! Uniform random play.

use super::MovePolicy;
use crate::board::{Board, Position};
use crate::core::{GameRng, Player};
use crate::rules;

/// Picks uniformly among legal moves. Useful as a sparring partner.
#[derive(Clone, Copy, Debug, Default)]
pub struct UniformRandom;

impl MovePolicy for UniformRandom {
    fn choose_move(&self, board: &Board, player: Player, rng: &mut GameRng) -> Option<Position> {
        let moves = rules::legal_moves(board, player);
        rng.choose(&moves).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_move_is_legal() {
        let mut board = Board::new();
        board.set(Position::new(1, 1), 2, Some(Player::Red));
        board.set(Position::new(3, 3), 1, Some(Player::Red));
        let mut rng = GameRng::new(5);

        for _ in 0..20 {
            let pos = UniformRandom.choose_move(&board, Player::Red, &mut rng).unwrap();
            assert!(rules::is_legal(&board, pos, Player::Red));
        }
    }
}
