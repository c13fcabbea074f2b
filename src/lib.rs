//! # ttt-search
//!
//! A game-tree search engine for tic-tac-toe.
//!
//! ## Design Principles
//!
//! 1. **Boards Are Values**: `Board` is `Copy`. Applying a move returns a new
//!    board, so search never undoes moves.
//!
//! 2. **Explicit Randomness**: the only source of randomness is the
//!    `GameRng` passed into each search, and it is only used to break ties.
//!
//! 3. **One Traversal**: minimax, alpha-beta and depth-limited search are
//!    the same recursion with different strategy parameters.
//!
//! ## Modules
//!
//! - `core`: Marks, boards, moves, symmetry and the RNG
//! - `eval`: Terminal scores and the depth-cutoff heuristic
//! - `search`: Configuration, the search engine, analysis and the
//!   request/response boundary
//! - `error`: Error types

pub mod core;
pub mod error;
pub mod eval;
pub mod search;

// Re-export commonly used types
pub use crate::core::{legal_moves, Board, Cell, GameRng, Mark, Move, Outcome};

pub use crate::error::{Error, Result};

pub use crate::eval::{heuristic, terminal_score, Verdict};

pub use crate::search::{
    algorithm_catalog, choose_move, search, Algorithm, Analysis, Difficulty, MinimaxSearch,
    MoveRequest, MoveResponse, SearchConfig, SearchResult, SearchTreeNode,
};
