//! One-ply scoring heuristic.

use log::{trace, warn};
use serde::Serialize;

use super::MovePolicy;
use crate::board::{Board, Position};
use crate::core::{GameRng, HeuristicConfig, Player, CELL_CAPACITY};
use crate::rules;

/// A legal target and its (jittered) score.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ScoredMove {
    pub position: Position,
    pub score: f64,
}

/// Scores every legal move in isolation and plays the best one.
///
/// Per candidate, starting from 0:
/// - explosion bonus if the placement reaches capacity, plus a bonus per
///   enemy-owned neighbor that the explosion would capture;
/// - otherwise a smaller bonus if it leaves the cell one short of capacity;
/// - a penalty if any neighbor is an enemy cell one short of capacity;
/// - a small positional bonus for corners, a smaller one for edges;
/// - uniform jitter in `[0, jitter)` so equal moves are picked at random.
#[derive(Clone, Debug, Default)]
pub struct Heuristic {
    config: HeuristicConfig,
}

impl Heuristic {
    #[must_use]
    pub fn new(config: HeuristicConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &HeuristicConfig {
        &self.config
    }

    /// Deterministic score of placing at `pos` for `player`.
    #[must_use]
    pub fn base_score(&self, board: &Board, pos: Position, player: Player) -> f64 {
        let c = &self.config;
        let enemy = player.opponent();
        let after = board.cell(pos).dots + 1;
        let neighbors = board.neighbors_of(pos);

        let mut score = 0.0;

        if after >= CELL_CAPACITY {
            let enemy_neighbors = neighbors
                .iter()
                .filter(|&&n| board.cell(n).is_owned_by(enemy))
                .count();
            score += c.explosion_bonus + c.enemy_neighbor_bonus * enemy_neighbors as f64;
        } else if after + 1 == CELL_CAPACITY {
            score += c.near_capacity_bonus;
        }

        let next_to_critical_enemy = neighbors.iter().any(|&n| {
            let cell = board.cell(n);
            cell.is_owned_by(enemy) && cell.dots + 1 >= CELL_CAPACITY
        });
        if next_to_critical_enemy {
            score -= c.critical_enemy_penalty;
        }

        if pos.is_corner() {
            score += c.corner_bonus;
        } else if pos.is_edge() {
            score += c.edge_bonus;
        }

        score
    }

    /// Every legal move for `player` with jitter applied, in row-major order.
    pub fn evaluate(&self, board: &Board, player: Player, rng: &mut GameRng) -> Vec<ScoredMove> {
        rules::legal_moves(board, player)
            .into_iter()
            .map(|position| {
                let mut score = self.base_score(board, position, player);
                if self.config.jitter > 0.0 {
                    score += rng.gen_range_f64(0.0..self.config.jitter);
                }
                trace!("{} candidate {} scores {:.2}", player, position, score);
                ScoredMove { position, score }
            })
            .collect()
    }
}

impl MovePolicy for Heuristic {
    fn choose_move(&self, board: &Board, player: Player, rng: &mut GameRng) -> Option<Position> {
        let mut best: Option<ScoredMove> = None;

        for candidate in self.evaluate(board, player, rng) {
            // Strict comparison: the first of equal scores is kept.
            if best.map_or(true, |b| candidate.score > b.score) {
                best = Some(candidate);
            }
        }

        if best.is_none() {
            warn!("{} has no legal moves", player);
        }
        best.map(|b| b.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deterministic() -> Heuristic {
        Heuristic::new(HeuristicConfig::default().deterministic())
    }

    #[test]
    fn test_positional_bonuses() {
        let board = Board::new();
        let bot = deterministic();

        assert_eq!(bot.base_score(&board, Position::new(0, 0), Player::Blue), 5.0);
        assert_eq!(bot.base_score(&board, Position::new(0, 2), Player::Blue), 2.0);
        assert_eq!(bot.base_score(&board, Position::new(2, 2), Player::Blue), 0.0);
    }

    #[test]
    fn test_explosion_with_enemy_neighbors() {
        let mut board = Board::new();
        board.set(Position::new(2, 2), 3, Some(Player::Blue));
        board.set(Position::new(1, 2), 1, Some(Player::Red));
        board.set(Position::new(2, 1), 1, Some(Player::Red));

        let score = deterministic().base_score(&board, Position::new(2, 2), Player::Blue);
        assert_eq!(score, 100.0 + 2.0 * 20.0);
    }

    #[test]
    fn test_near_capacity_bonus() {
        let mut board = Board::new();
        board.set(Position::new(2, 2), 2, Some(Player::Blue));

        let score = deterministic().base_score(&board, Position::new(2, 2), Player::Blue);
        assert_eq!(score, 10.0);

        board.set(Position::new(2, 2), 1, Some(Player::Blue));
        let score = deterministic().base_score(&board, Position::new(2, 2), Player::Blue);
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_critical_enemy_penalty() {
        let mut board = Board::new();
        board.set(Position::new(2, 2), 1, Some(Player::Blue));
        board.set(Position::new(2, 3), 3, Some(Player::Red));

        let score = deterministic().base_score(&board, Position::new(2, 2), Player::Blue);
        assert_eq!(score, -50.0);
    }

    #[test]
    fn test_exploding_next_to_critical_enemy() {
        let mut board = Board::new();
        board.set(Position::new(0, 0), 3, Some(Player::Blue));
        board.set(Position::new(0, 1), 3, Some(Player::Red));

        let score = deterministic().base_score(&board, Position::new(0, 0), Player::Blue);
        assert_eq!(score, 100.0 + 20.0 - 50.0 + 5.0);
    }

    #[test]
    fn test_deterministic_choice_prefers_explosion() {
        let mut board = Board::new();
        board.set(Position::new(0, 0), 1, Some(Player::Blue));
        board.set(Position::new(2, 2), 3, Some(Player::Blue));
        board.set(Position::new(4, 4), 1, Some(Player::Red));

        let mut rng = GameRng::new(1);
        let choice = deterministic().choose_move(&board, Player::Blue, &mut rng);
        assert_eq!(choice, Some(Position::new(2, 2)));
    }

    #[test]
    fn test_ties_keep_first_candidate() {
        let board = Board::new();
        let mut rng = GameRng::new(1);

        // Four corners tie at 5; (0, 0) comes first.
        let choice = deterministic().choose_move(&board, Player::Red, &mut rng);
        assert_eq!(choice, Some(Position::new(0, 0)));
    }

    #[test]
    fn test_jitter_bounded() {
        let board = Board::new();
        let bot = Heuristic::default();
        let mut rng = GameRng::new(3);

        for scored in bot.evaluate(&board, Player::Red, &mut rng) {
            let base = bot.base_score(&board, scored.position, Player::Red);
            assert!(scored.score >= base && scored.score < base + 5.0);
        }
    }

    #[test]
    fn test_same_seed_same_choice() {
        let board = Board::new();
        let bot = Heuristic::default();

        let a = bot.choose_move(&board, Player::Blue, &mut GameRng::new(99));
        let b = bot.choose_move(&board, Player::Blue, &mut GameRng::new(99));
        assert_eq!(a, b);
    }
}
