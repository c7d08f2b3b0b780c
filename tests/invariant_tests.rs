//! Property tests over random games.
//!
//! Each case plays a random mix of generated moves and arbitrary
//! (mostly illegal) coordinate pairs, checking the engine invariants after
//! every call.

use grid_games::{BoardEntry, Checkers, Coord, GameEngine, Side};
use proptest::prelude::*;

/// One step of a random game.
#[derive(Clone, Debug)]
enum Step {
    /// Pick a generated move by index (modulo the number available).
    Generated(usize),
    /// Try an arbitrary, possibly off-board, move.
    Arbitrary(Coord, Coord),
}

fn coord() -> impl Strategy<Value = Coord> {
    (0usize..10, 0usize..10).prop_map(|(row, col)| Coord::new(row, col))
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        3 => any::<usize>().prop_map(Step::Generated),
        1 => (coord(), coord()).prop_map(|(from, to)| Step::Arbitrary(from, to)),
    ]
}

fn resolve(game: &Checkers, step: &Step) -> Option<(Coord, Coord)> {
    match *step {
        Step::Generated(i) => {
            let moves = game.legal_moves();
            (!moves.is_empty()).then(|| moves[i % moves.len()])
        }
        Step::Arbitrary(from, to) => Some((from, to)),
    }
}

proptest! {
    #[test]
    fn prop_history_counts_successful_moves(steps in prop::collection::vec(step(), 0..120)) {
        let mut game = Checkers::new();
        let mut successes = 0;

        for step in &steps {
            let Some((from, to)) = resolve(&game, step) else { break };
            if game.make_move(from, to) {
                successes += 1;
            }
            prop_assert_eq!(game.history().len(), game.moves());
            prop_assert_eq!(game.moves(), successes);
        }
    }

    #[test]
    fn prop_is_valid_move_is_pure(steps in prop::collection::vec(step(), 0..60), probes in prop::collection::vec((coord(), coord()), 1..40)) {
        let mut game = Checkers::new();
        for step in &steps {
            let Some((from, to)) = resolve(&game, step) else { break };
            game.make_move(from, to);
        }

        let board = game.board().clone();
        let player = game.current_player();
        let history = game.history().clone();

        for (from, to) in probes {
            let first = game.is_valid_move(from, to);
            prop_assert_eq!(game.is_valid_move(from, to), first);
            game.is_valid_move_as(from, to, player.opponent());
        }

        prop_assert_eq!(game.board(), &board);
        prop_assert_eq!(game.current_player(), player);
        prop_assert_eq!(game.history(), &history);
    }

    #[test]
    fn prop_rejected_move_changes_nothing(steps in prop::collection::vec(step(), 0..120)) {
        let mut game = Checkers::new();

        for step in &steps {
            let Some((from, to)) = resolve(&game, step) else { break };
            let board = game.board().clone();
            let player = game.current_player();
            let moves = game.moves();

            if !game.make_move(from, to) {
                prop_assert_eq!(game.board(), &board);
                prop_assert_eq!(game.current_player(), player);
                prop_assert_eq!(game.moves(), moves);
            } else {
                prop_assert_eq!(game.current_player(), player.opponent());
            }
        }
    }

    #[test]
    fn prop_captures_remove_at_most_one_opponent(steps in prop::collection::vec(any::<usize>(), 0..150)) {
        let mut game = Checkers::new();

        for i in steps {
            let moves = game.legal_moves();
            if moves.is_empty() {
                break;
            }
            let (from, to) = moves[i % moves.len()];
            let mover = game.current_player();
            let was_king = game.board().get(from).is_some_and(|p| p.king);
            let own_before = game.piece_count(mover);
            let opp_before = game.piece_count(mover.opponent());

            prop_assert!(game.make_move(from, to));

            let removed = opp_before - game.piece_count(mover.opponent());
            prop_assert_eq!(game.piece_count(mover), own_before);
            let distance = from.row.abs_diff(to.row);
            if was_king {
                prop_assert!(removed <= 1);
            } else if distance == 2 {
                prop_assert_eq!(removed, 1);
                let mid = Coord::new((from.row + to.row) / 2, (from.col + to.col) / 2);
                prop_assert!(game.board().get(mid).is_none());
            } else {
                prop_assert_eq!(removed, 0);
            }

            let promotion_row = mover.promotion_row(game.board_size());
            if to.row == promotion_row || was_king {
                prop_assert!(game.board().get(to).is_some_and(|p| p.king));
            }
        }
    }

    #[test]
    fn prop_generated_moves_are_legal_for_owner(steps in prop::collection::vec(any::<usize>(), 0..100)) {
        let mut game = Checkers::new();

        for i in steps {
            for (at, piece) in game.board().occupied() {
                let owner = piece.player();
                for to in game.possible_moves_as(at, owner) {
                    prop_assert!(game.is_valid_move_as(at, to, owner), "{} -> {} for {}", at, to, owner);
                }
            }

            let moves = game.legal_moves();
            if moves.is_empty() {
                break;
            }
            let (from, to) = moves[i % moves.len()];
            game.make_move(from, to);
        }
    }

    #[test]
    fn prop_reset_restores_start(steps in prop::collection::vec(any::<usize>(), 0..80)) {
        let mut game = Checkers::new();
        for i in steps {
            let moves = game.legal_moves();
            if moves.is_empty() {
                break;
            }
            let (from, to) = moves[i % moves.len()];
            game.make_move(from, to);
        }

        game.reset_game();

        let fresh = Checkers::new();
        prop_assert_eq!(game.board(), fresh.board());
        prop_assert_eq!(game.board(), &game.initialize_board());
        prop_assert_eq!(game.current_player(), Side::White);
        prop_assert_eq!(game.moves(), 0);
    }
}
