//! Property tests for the board, rules and reaction engine.

use proptest::prelude::*;

use chain_reaction::board::{Board, Position};
use chain_reaction::core::{Player, CELL_CAPACITY, COLS, MIN_UNITS_FOR_WIN, ROWS};
use chain_reaction::reaction::ChainReaction;
use chain_reaction::rules;
use chain_reaction::turn::TurnController;

/// A stable board: every cell below capacity, owners only on non-empty cells.
fn stable_board() -> impl Strategy<Value = Board> {
    prop::collection::vec((0..CELL_CAPACITY, any::<bool>()), ROWS * COLS).prop_map(|cells| {
        let mut board = Board::new();
        for (pos, (dots, red)) in Position::all().zip(cells) {
            let owner = if red { Player::Red } else { Player::Blue };
            board.set(pos, dots, Some(owner));
        }
        board
    })
}

fn player() -> impl Strategy<Value = Player> {
    prop_oneof![Just(Player::Red), Just(Player::Blue)]
}

proptest! {
    /// After a move resolves, either the game is decided or no cell is at capacity.
    #[test]
    fn prop_resolution_reaches_stability_or_win(
        board in stable_board(),
        mover in player(),
        pick in any::<prop::sample::Index>(),
    ) {
        prop_assume!(board.owner_has_presence(Player::Red));
        prop_assume!(board.owner_has_presence(Player::Blue));

        let moves = rules::legal_moves(&board, mover);
        prop_assume!(!moves.is_empty());
        let target = moves[pick.index(moves.len())];

        let mut board = board;
        let mut controller = TurnController::new(mover);
        let report = controller.submit_move(&mut board, target, mover).unwrap();

        match report.winner {
            Some(winner) => {
                prop_assert_eq!(winner, mover);
                prop_assert_eq!(board.count_owned_by(mover.opponent()), 0);
            }
            None => {
                prop_assert!(board.is_stable());
                prop_assert!(board.cells().all(|c| c.dots < c.capacity()));
            }
        }
        prop_assert!(board.cells().all(|c| (c.dots == 0) == c.owner.is_none()));
    }

    /// Each round loses exactly `capacity - k` units per exploding cell with
    /// `k` in-bounds neighbors.
    #[test]
    fn prop_round_unit_accounting(
        board in stable_board(),
        mover in player(),
        pick in any::<prop::sample::Index>(),
    ) {
        let moves = rules::legal_moves(&board, mover);
        prop_assume!(!moves.is_empty());
        let target = moves[pick.index(moves.len())];

        let mut board = board;
        board.add_unit(target, mover);

        while !board.is_stable() && rules::winner(&board).is_none() {
            let batch = board.unstable_positions();
            let before = board.total_units();
            let lost: u32 = batch
                .iter()
                .map(|p| CELL_CAPACITY - p.neighbors().len() as u32)
                .sum();

            let round = ChainReaction::explode(&mut board, &batch);

            prop_assert_eq!(round.exploded.len(), batch.len());
            prop_assert_eq!(board.total_units(), before - lost);
        }
    }

    /// Legal targets are exactly the empty cells (no presence) or own cells.
    #[test]
    fn prop_legality_matches_phase(board in stable_board(), mover in player()) {
        let has_presence = board.owner_has_presence(mover);

        for pos in Position::all() {
            let owner = board.cell(pos).owner;
            let expected = if has_presence {
                owner == Some(mover)
            } else {
                owner.is_none()
            };
            prop_assert_eq!(rules::is_legal(&board, pos, mover), expected);
        }
    }

    /// No winner while the board holds fewer than two units.
    #[test]
    fn prop_no_win_below_unit_threshold(cell in 0..ROWS * COLS, owner in player(), dots in 0..MIN_UNITS_FOR_WIN) {
        let mut board = Board::new();
        board.set(Position::new(cell / COLS, cell % COLS), dots, Some(owner));

        prop_assert_eq!(rules::winner(&board), None);
    }
}

/// Empty-board opening: the placement set is every cell.
#[test]
fn test_opening_legal_set_is_whole_board() {
    let board = Board::new();
    for player in Player::ALL {
        assert_eq!(rules::legal_moves(&board, player).len(), ROWS * COLS);
    }
}
