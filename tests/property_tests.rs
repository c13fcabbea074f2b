//! Property tests over randomly played positions.

use proptest::prelude::*;

use ttt_search::core::symmetry::{transform_cells, transform_move, TRANSFORMS};
use ttt_search::core::{canonical_key, legal_moves, Board, GameRng, Mark, MoveList};
use ttt_search::eval::{heuristic, MAX_HEURISTIC, MIN_DECISIVE_SCORE};
use ttt_search::search::{search, Algorithm, SearchConfig};

/// Play `choices` from the empty board, each picking a legal move by index,
/// stopping early at a finished game.
fn play(choices: &[usize]) -> Board {
    let mut board = Board::new();
    for &choice in choices {
        let moves = legal_moves(&board);
        if moves.is_empty() {
            break;
        }
        board = board.apply(moves[choice % moves.len()]).unwrap();
    }
    board
}

fn arb_board() -> impl Strategy<Value = Board> {
    prop::collection::vec(0usize..9, 0..9).prop_map(|choices| play(&choices))
}

fn arb_ongoing_board() -> impl Strategy<Value = Board> {
    arb_board().prop_filter("game over", |board| !board.is_terminal())
}

fn transformed(board: &Board, t: usize) -> Board {
    Board::from_cells(transform_cells(board.cells(), t), board.to_move()).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_played_boards_are_valid(board in arb_board()) {
        prop_assert!(board.validate().is_ok());
        let x = board.count(Mark::X);
        let o = board.count(Mark::O);
        prop_assert!(x == o || x == o + 1);
    }

    #[test]
    fn prop_legal_moves_cover_empty_cells(board in arb_board()) {
        let moves = legal_moves(&board);
        if board.is_terminal() {
            prop_assert!(moves.is_empty());
        } else {
            prop_assert_eq!(moves.len(), board.empty_count());
            for mv in &moves {
                prop_assert!(board.cell(*mv).is_empty());
            }
        }
    }

    #[test]
    fn prop_heuristic_is_bounded_and_zero_sum(board in arb_board()) {
        let x = heuristic(&board, Mark::X);
        prop_assert!(x.abs() <= MAX_HEURISTIC);
        prop_assert!(x.abs() < MIN_DECISIVE_SCORE);
        prop_assert_eq!(x, -heuristic(&board, Mark::O));
    }

    #[test]
    fn prop_canonical_key_is_symmetric(board in arb_board(), t in 0..TRANSFORMS.len()) {
        prop_assert_eq!(canonical_key(&board), canonical_key(&transformed(&board, t)));
    }

    #[test]
    fn prop_symmetric_boards_search_alike(board in arb_ongoing_board(), t in 0..TRANSFORMS.len()) {
        let config = SearchConfig::new(Algorithm::AlphaBeta);
        let original = search(&board, &config, &mut GameRng::new(0)).unwrap();
        let image = search(&transformed(&board, t), &config, &mut GameRng::new(0)).unwrap();

        prop_assert_eq!(original.score, image.score);

        let mut expected: MoveList = original
            .optimal_moves
            .iter()
            .map(|&mv| transform_move(mv, t))
            .collect();
        let mut actual = image.optimal_moves.clone();
        expected.sort();
        actual.sort();
        prop_assert_eq!(expected, actual);
    }

    #[test]
    fn prop_full_depth_limit_matches_minimax(board in arb_ongoing_board()) {
        let minimax = search(&board, &SearchConfig::new(Algorithm::Minimax), &mut GameRng::new(0)).unwrap();
        let limited = search(
            &board,
            &SearchConfig::new(Algorithm::DepthLimited).with_max_depth(9),
            &mut GameRng::new(0),
        ).unwrap();

        prop_assert_eq!(minimax.score, limited.score);
        prop_assert_eq!(minimax.optimal_moves, limited.optimal_moves);
        prop_assert_eq!(minimax.analysis.nodes_explored, limited.analysis.nodes_explored);
    }

    #[test]
    fn prop_random_tie_break_stays_optimal(board in arb_ongoing_board(), seed in any::<u64>()) {
        let config = SearchConfig::new(Algorithm::AlphaBeta).with_randomize_among_best(true);
        let result = search(&board, &config, &mut GameRng::new(seed)).unwrap();
        prop_assert!(result.optimal_moves.contains(&result.best_move));

        let deterministic = search(&board, &SearchConfig::new(Algorithm::AlphaBeta), &mut GameRng::new(seed)).unwrap();
        prop_assert_eq!(result.score, deterministic.score);
        prop_assert_eq!(result.optimal_moves, deterministic.optimal_moves);
    }

    #[test]
    fn prop_nodes_at_least_legal_moves(board in arb_ongoing_board()) {
        for algorithm in Algorithm::ALL {
            let result = search(&board, &SearchConfig::new(algorithm), &mut GameRng::new(0)).unwrap();
            let analysis = &result.analysis;
            prop_assert!(analysis.nodes_explored > legal_moves(&board).len() as u64);
            prop_assert!(analysis.max_depth_reached >= 1);
            prop_assert!(analysis.max_depth_reached <= board.empty_count() as u32);
        }
    }
}
