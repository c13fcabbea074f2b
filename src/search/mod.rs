//! Game-tree search for tic-tac-toe.
//!
//! ## Overview
//!
//! Three algorithms share one minimax traversal:
//!
//! - **Minimax**: explores the whole tree below the position
//! - **Alpha-beta**: same answers as minimax while skipping subtrees that
//!   cannot change the result
//! - **Depth-limited**: minimax cut off at `max_depth` plies, where a
//!   heuristic scores the unfinished position
//!
//! Every search returns the best move, its score, the full set of equally
//! good moves and an [`Analysis`] with node counts and a readable
//! explanation.
//!
//! ## Usage
//!
//! ```rust
//! use ttt_search::core::{Board, GameRng, Move};
//! use ttt_search::search::{search, Algorithm, SearchConfig};
//!
//! let board: Board = "XX./OO./...".parse().unwrap();
//! let config = SearchConfig::new(Algorithm::AlphaBeta);
//! let mut rng = GameRng::new(42);
//!
//! let result = search(&board, &config, &mut rng).unwrap();
//! assert_eq!(result.best_move, Move::new(0, 2));
//! println!("{}", result.analysis.reasoning);
//! ```
//!
//! ## Difficulty
//!
//! [`SearchConfig::for_difficulty`] maps a [`Difficulty`] onto search
//! parameters without changing the algorithm. The [`request`] module wraps
//! all of this behind serializable request and response types.

pub mod config;
pub mod engine;
pub mod request;
pub mod stats;
pub mod table;
pub mod tree;

pub use config::{Algorithm, Difficulty, SearchConfig};
pub use engine::{search, MinimaxSearch, SearchResult, Strategy};
pub use request::{
    algorithm_catalog, choose_move, AlgorithmInfo, ErrorBody, MoveRequest, MoveResponse, Winner,
};
pub use stats::{Analysis, SearchRecorder};
pub use table::{Bound, TranspositionTable};
pub use tree::SearchTreeNode;
