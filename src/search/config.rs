//! Search configuration and difficulty presets.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{Mark, MAX_PLIES};
use crate::error::{Error, Result};

/// Search algorithm.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// Exhaustive minimax to terminal depth.
    Minimax,
    /// Minimax with alpha-beta pruning to terminal depth.
    AlphaBeta,
    /// Minimax that falls back to the heuristic at `max_depth`.
    DepthLimited,
}

impl Algorithm {
    /// All algorithms in catalog order.
    pub const ALL: [Algorithm; 3] = [
        Algorithm::Minimax,
        Algorithm::AlphaBeta,
        Algorithm::DepthLimited,
    ];

    /// Wire name of the algorithm.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Minimax => "minimax",
            Algorithm::AlphaBeta => "alpha_beta",
            Algorithm::DepthLimited => "depth_limited",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Difficulty level, mapped onto search parameters by
/// [`SearchConfig::for_difficulty`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Look-ahead in plies used by depth-limited search at this level.
    #[must_use]
    pub const fn depth(self) -> u32 {
        match self {
            Difficulty::Easy => 2,
            Difficulty::Medium => 4,
            Difficulty::Hard => MAX_PLIES,
        }
    }

    /// Whether equally good moves are picked at random at this level.
    #[must_use]
    pub const fn randomizes(self) -> bool {
        matches!(self, Difficulty::Easy)
    }
}

/// Search configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Which traversal to run.
    pub algorithm: Algorithm,

    /// Depth limit in plies. Required (and at least 1) for
    /// `DepthLimited`; ignored by `Minimax` and `AlphaBeta`.
    pub max_depth: Option<u32>,

    /// Pick uniformly among equally scored best moves instead of the first
    /// in generation order.
    pub randomize_among_best: bool,

    /// Side whose score is maximized. `None` means the side to move.
    pub side_to_maximize: Option<Mark>,

    /// Cache subtree values by canonical position for the duration of one
    /// search. Changes node counts but never scores.
    pub use_transposition_table: bool,

    /// Record a tree snapshot this many plies deep.
    pub snapshot_depth: Option<u32>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new(Algorithm::AlphaBeta)
    }
}

impl SearchConfig {
    /// Deterministic full-strength configuration for `algorithm`.
    ///
    /// `DepthLimited` starts with a limit covering the whole game.
    #[must_use]
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            max_depth: match algorithm {
                Algorithm::DepthLimited => Some(MAX_PLIES),
                _ => None,
            },
            randomize_among_best: false,
            side_to_maximize: None,
            use_transposition_table: false,
            snapshot_depth: None,
        }
    }

    /// Preset for a difficulty level.
    ///
    /// Difficulty changes parameters, never the algorithm: easy looks two
    /// plies ahead and breaks ties at random, medium looks four plies ahead,
    /// hard searches the whole game. Only `DepthLimited` honours the depth.
    #[must_use]
    pub fn for_difficulty(algorithm: Algorithm, difficulty: Difficulty) -> Self {
        Self {
            max_depth: Some(difficulty.depth()),
            randomize_among_best: difficulty.randomizes(),
            ..Self::new(algorithm)
        }
    }

    /// Set the depth limit.
    pub fn with_max_depth(mut self, depth: u32) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Enable or disable random tie-breaking.
    pub fn with_randomize_among_best(mut self, randomize: bool) -> Self {
        self.randomize_among_best = randomize;
        self
    }

    /// Maximize for a fixed side instead of the side to move.
    pub fn with_side_to_maximize(mut self, side: Mark) -> Self {
        self.side_to_maximize = Some(side);
        self
    }

    /// Enable or disable the per-search transposition table.
    pub fn with_transposition_table(mut self, enabled: bool) -> Self {
        self.use_transposition_table = enabled;
        self
    }

    /// Record a tree snapshot `depth` plies deep.
    pub fn with_snapshot_depth(mut self, depth: u32) -> Self {
        self.snapshot_depth = Some(depth);
        self
    }

    /// Check that the configuration can be run.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` when `DepthLimited` has no depth or a zero
    /// depth.
    pub fn validate(&self) -> Result<()> {
        if self.algorithm == Algorithm::DepthLimited {
            match self.max_depth {
                None => {
                    return Err(Error::invalid_config(
                        "depth_limited search requires max_depth",
                    ))
                }
                Some(0) => {
                    return Err(Error::invalid_config(
                        "depth_limited search requires max_depth of at least 1",
                    ))
                }
                Some(_) => {}
            }
        }
        Ok(())
    }

    /// Depth at which the heuristic replaces search, if any.
    #[must_use]
    pub fn depth_limit(&self) -> Option<u32> {
        match self.algorithm {
            Algorithm::DepthLimited => self.max_depth,
            Algorithm::Minimax | Algorithm::AlphaBeta => None,
        }
    }

    /// Whether alpha-beta cutoffs are enabled.
    #[must_use]
    pub fn pruning(&self) -> bool {
        self.algorithm == Algorithm::AlphaBeta
    }
}
