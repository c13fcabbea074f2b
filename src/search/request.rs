//! Serializable request and response types for asking the engine for a move.
//!
//! Boards travel as a 3x3 grid of `"X"`, `"O"` or `""` strings. The side to
//! move is inferred from the mark counts.

use serde::{Deserialize, Serialize};

use crate::core::{Board, GameRng, Mark, Move, Outcome};
use crate::error::{Error, Result};

use super::config::{Algorithm, Difficulty, SearchConfig};
use super::engine::search;
use super::stats::Analysis;

/// Plies of tree snapshot included when an explanation is requested.
pub const EXPLAIN_SNAPSHOT_DEPTH: u32 = 2;

/// A request for the engine's move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRequest {
    pub board: Vec<Vec<String>>,

    #[serde(default = "default_algorithm")]
    pub algorithm: Algorithm,

    #[serde(default)]
    pub difficulty: Difficulty,

    /// Overrides the difficulty's depth.
    #[serde(default)]
    pub max_depth: Option<u32>,

    /// Include the analysis and a tree snapshot in the response.
    #[serde(default)]
    pub explain: bool,
}

fn default_algorithm() -> Algorithm {
    Algorithm::Minimax
}

impl MoveRequest {
    /// Request with default algorithm and difficulty.
    pub fn new(board: &Board) -> Self {
        Self {
            board: board.to_grid(),
            algorithm: default_algorithm(),
            difficulty: Difficulty::default(),
            max_depth: None,
            explain: false,
        }
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn with_max_depth(mut self, depth: u32) -> Self {
        self.max_depth = Some(depth);
        self
    }

    pub fn with_explain(mut self, explain: bool) -> Self {
        self.explain = explain;
        self
    }

    /// The search configuration this request asks for.
    #[must_use]
    pub fn config(&self) -> SearchConfig {
        let mut config = SearchConfig::for_difficulty(self.algorithm, self.difficulty);
        if let Some(depth) = self.max_depth {
            config = config.with_max_depth(depth);
        }
        if self.explain {
            config = config.with_snapshot_depth(EXPLAIN_SNAPSHOT_DEPTH);
        }
        config
    }
}

/// Result of a finished game, as reported on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Winner {
    X,
    O,
    #[serde(rename = "draw")]
    Draw,
}

impl Winner {
    /// `None` while the game is still going.
    #[must_use]
    pub fn from_outcome(outcome: Outcome) -> Option<Self> {
        match outcome {
            Outcome::Ongoing => None,
            Outcome::Draw => Some(Winner::Draw),
            Outcome::Win(Mark::X) => Some(Winner::X),
            Outcome::Win(Mark::O) => Some(Winner::O),
        }
    }
}

/// The engine's move and the state of the game after it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MoveResponse {
    #[serde(rename = "move")]
    pub mv: Move,

    pub score: i32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<Analysis>,

    /// Whether the move ended the game.
    pub game_over: bool,

    pub winner: Option<Winner>,
}

/// Error payload for a failed request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl From<&Error> for ErrorBody {
    fn from(err: &Error) -> Self {
        Self {
            code: err.code().to_string(),
            message: err.to_string(),
        }
    }
}

/// Pick the engine's move for a request.
///
/// # Errors
///
/// `InvalidBoard` for a malformed or unreachable grid, `GameAlreadyOver`
/// for a finished game, `InvalidConfig` for an unusable depth.
pub fn choose_move(request: &MoveRequest, rng: &mut GameRng) -> Result<MoveResponse> {
    let board = Board::from_grid(&request.board)?;
    let result = search(&board, &request.config(), rng)?;

    let outcome = board.apply(result.best_move)?.winner();

    Ok(MoveResponse {
        mv: result.best_move,
        score: result.score,
        analysis: request.explain.then_some(result.analysis),
        game_over: outcome.is_terminal(),
        winner: Winner::from_outcome(outcome),
    })
}

/// Description of one available algorithm.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlgorithmInfo {
    pub name: String,
    pub description: String,
    pub complexity: String,
    pub best_for: String,
}

impl AlgorithmInfo {
    fn new(algorithm: Algorithm, description: &str, complexity: &str, best_for: &str) -> Self {
        Self {
            name: algorithm.name().to_string(),
            description: description.to_string(),
            complexity: complexity.to_string(),
            best_for: best_for.to_string(),
        }
    }
}

/// The available algorithms, in catalog order.
#[must_use]
pub fn algorithm_catalog() -> Vec<AlgorithmInfo> {
    Algorithm::ALL
        .iter()
        .map(|&algorithm| match algorithm {
            Algorithm::Minimax => AlgorithmInfo::new(
                algorithm,
                "Classic minimax exploring the full game tree",
                "O(b^d)",
                "Learning the fundamentals and guaranteed optimal play",
            ),
            Algorithm::AlphaBeta => AlgorithmInfo::new(
                algorithm,
                "Minimax with alpha-beta pruning",
                "O(b^(d/2)) best case",
                "Optimal play with fewer nodes, and seeing pruning at work",
            ),
            Algorithm::DepthLimited => AlgorithmInfo::new(
                algorithm,
                "Minimax cut off at a fixed depth and scored by a heuristic",
                "O(b^d) with d limited",
                "Controlling cost and difficulty",
            ),
        })
        .collect()
}
