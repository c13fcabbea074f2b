//! Minimax game-tree search.
//!
//! A single recursive traversal serves all three algorithms. The
//! [`Strategy`] derived from the configuration decides whether alpha-beta
//! cutoffs are taken and where the heuristic replaces further search.
//!
//! Scores are always from the maximizer's point of view. Terminal scores
//! are biased by the distance from the search root, so a win found sooner
//! outranks one found later.

use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{debug, info_span, trace};

use crate::core::{canonical_key, legal_moves, Board, GameRng, Mark, Move, MoveList};
use crate::error::{Error, Result};
use crate::eval::{heuristic, terminal_score, verdict, Verdict, WIN_SCORE};

use super::config::{Algorithm, SearchConfig};
use super::stats::{Analysis, SearchRecorder};
use super::table::TranspositionTable;
use super::tree::SearchTreeNode;

/// Strictly outside every reachable score.
const INFINITY: i32 = WIN_SCORE + 1;

/// Traversal parameters derived from an [`Algorithm`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Strategy {
    /// Take alpha-beta cutoffs.
    pub pruning: bool,
    /// Depth at which non-terminal nodes are scored by the heuristic.
    pub depth_limit: Option<u32>,
}

impl Strategy {
    #[must_use]
    pub fn from_config(config: &SearchConfig) -> Self {
        Self {
            pruning: config.pruning(),
            depth_limit: config.depth_limit(),
        }
    }
}

/// Outcome of a successful search.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// The move to play.
    pub best_move: Move,

    /// Value of the position after `best_move`, from the maximizer's side.
    pub score: i32,

    /// Every root move scoring exactly `score`, in move-generation order.
    pub optimal_moves: MoveList,

    /// Statistics and explanation.
    pub analysis: Analysis,
}

impl SearchResult {
    /// What the score says about the game.
    #[must_use]
    pub fn verdict(&self) -> Verdict {
        verdict(self.score)
    }
}

/// Search context for one configuration.
///
/// Holds no state between calls; every call owns its own recorder and
/// transposition table.
#[derive(Clone, Debug, Default)]
pub struct MinimaxSearch {
    config: SearchConfig,
}

impl MinimaxSearch {
    /// Create a new search context.
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Find the best move for the side to move on `board`.
    ///
    /// `rng` is only consulted to break ties when
    /// `randomize_among_best` is set.
    ///
    /// # Errors
    ///
    /// In order of precedence: `InvalidBoard` for an unreachable position,
    /// `GameAlreadyOver` for a won or drawn board, `InvalidConfig` for an
    /// unusable configuration.
    pub fn search(&self, board: &Board, rng: &mut GameRng) -> Result<SearchResult> {
        board.validate()?;
        let outcome = board.winner();
        if outcome.is_terminal() {
            return Err(Error::GameAlreadyOver { outcome });
        }
        self.config.validate()?;

        let span = info_span!(
            "search",
            algorithm = %self.config.algorithm,
            max_depth = ?self.config.depth_limit(),
            ply = board.ply(),
            to_move = %board.to_move()
        );
        let _enter = span.enter();

        let start = Instant::now();
        let maximizer = self.config.side_to_maximize.unwrap_or(board.to_move());
        let mut recorder = SearchRecorder::new();
        let mut traversal = Traversal {
            strategy: Strategy::from_config(&self.config),
            maximizer,
            snapshot_depth: self.config.snapshot_depth,
            recorder: &mut recorder,
            table: self
                .config
                .use_transposition_table
                .then(TranspositionTable::new),
            used_heuristic: false,
        };

        let root = traversal.root(board)?;
        let used_heuristic = traversal.used_heuristic;
        let table_entries = traversal.table.as_ref().map_or(0, TranspositionTable::entry_count);

        let pick = if self.config.randomize_among_best {
            rng.pick_index(root.optimal.len())
        } else {
            0
        };
        let best_move = root.optimal[pick];

        let reasoning = self.reasoning(best_move, &root, used_heuristic);
        let ties = root.optimal.len();
        let analysis = recorder.finish(start.elapsed(), reasoning, root.tree);
        debug!(
            best_move = %best_move,
            score = root.score,
            ties,
            nodes = analysis.nodes_explored,
            pruned = analysis.branches_pruned,
            table_entries,
            nodes_per_second = analysis.nodes_per_second(),
            "search complete"
        );

        Ok(SearchResult {
            best_move,
            score: root.score,
            optimal_moves: root.optimal,
            analysis,
        })
    }

    fn reasoning(&self, best_move: Move, root: &RootResult, used_heuristic: bool) -> String {
        let algorithm = match self.config.algorithm {
            Algorithm::Minimax => "minimax".to_string(),
            Algorithm::AlphaBeta => "alpha-beta".to_string(),
            Algorithm::DepthLimited => format!(
                "depth-limited search to depth {}",
                self.config.max_depth.unwrap_or_default()
            ),
        };

        let assessment = match verdict(root.score) {
            Verdict::ForcedWin { plies } => format!("forced win in {}", plies_text(plies)),
            Verdict::ForcedLoss { plies } => format!("forced loss in {}", plies_text(plies)),
            Verdict::Undecided if used_heuristic => "heuristic estimate".to_string(),
            Verdict::Undecided => "draw with best play".to_string(),
        };

        let mut text = format!(
            "{} chose {} with score {} ({})",
            algorithm, best_move, root.score, assessment
        );
        if root.legal == 1 {
            text.push_str("; only one legal move");
        } else if root.optimal.len() > 1 {
            let tie_break = if self.config.randomize_among_best {
                "picked at random"
            } else {
                "first in move order"
            };
            text.push_str(&format!(
                "; {} of {} moves equally good, {}",
                root.optimal.len(),
                root.legal,
                tie_break
            ));
        }
        text
    }
}

/// Find the best move on `board` under `config`.
///
/// # Errors
///
/// See [`MinimaxSearch::search`].
pub fn search(board: &Board, config: &SearchConfig, rng: &mut GameRng) -> Result<SearchResult> {
    MinimaxSearch::new(config.clone()).search(board, rng)
}

fn plies_text(plies: u32) -> String {
    if plies == 1 {
        "1 ply".to_string()
    } else {
        format!("{} plies", plies)
    }
}

struct RootResult {
    score: i32,
    optimal: MoveList,
    legal: usize,
    tree: Option<SearchTreeNode>,
}

/// A node value plus its snapshot, when the node lies inside the snapshot.
struct Scored {
    value: i32,
    tree: Option<SearchTreeNode>,
}

struct Traversal<'a> {
    strategy: Strategy,
    maximizer: Mark,
    snapshot_depth: Option<u32>,
    recorder: &'a mut SearchRecorder,
    table: Option<TranspositionTable>,
    used_heuristic: bool,
}

impl Traversal<'_> {
    fn in_snapshot(&self, depth: u32) -> bool {
        matches!(self.snapshot_depth, Some(limit) if depth <= limit)
    }

    /// Score every root move exactly enough to tell which ones tie for best.
    ///
    /// With pruning on, each child is searched with a window opened one
    /// point past the best score so far. Children that tie or beat it come
    /// back exact; weaker children only need an upper bound.
    fn root(&mut self, board: &Board) -> Result<RootResult> {
        self.recorder.visit(0);
        let maximizing = board.to_move() == self.maximizer;
        let moves = legal_moves(board);
        debug_assert!(!moves.is_empty());

        let mut best: Option<i32> = None;
        let mut scores: Vec<i32> = Vec::with_capacity(moves.len());
        let mut children = Vec::new();

        for &mv in &moves {
            let (alpha, beta) = match best {
                Some(b) if self.strategy.pruning && maximizing => (b - 1, INFINITY),
                Some(b) if self.strategy.pruning => (-INFINITY, b + 1),
                _ => (-INFINITY, INFINITY),
            };

            let child = board.apply(mv)?;
            let scored = self.node(&child, 1, alpha, beta)?;
            if let Some(mut tree) = scored.tree {
                tree.mv = Some(mv);
                children.push(tree);
            }

            let improves = match best {
                None => true,
                Some(b) if maximizing => scored.value > b,
                Some(b) => scored.value < b,
            };
            if improves {
                best = Some(scored.value);
            }
            scores.push(scored.value);
        }

        let score = best.unwrap_or_default();
        let optimal: MoveList = moves
            .iter()
            .zip(&scores)
            .filter(|(_, s)| **s == score)
            .map(|(&mv, _)| mv)
            .collect();

        let tree = self.in_snapshot(0).then(|| SearchTreeNode {
            mv: None,
            score,
            maximizing,
            pruned: 0,
            children,
        });

        Ok(RootResult {
            score,
            optimal,
            legal: moves.len(),
            tree,
        })
    }

    fn node(&mut self, board: &Board, depth: u32, mut alpha: i32, mut beta: i32) -> Result<Scored> {
        self.recorder.visit(depth);
        let maximizing = board.to_move() == self.maximizer;
        let snapshot = self.in_snapshot(depth);
        let leaf = |value: i32| Scored {
            value,
            tree: snapshot.then(|| SearchTreeNode::leaf(None, value, maximizing)),
        };

        if let Some(value) = terminal_score(board.winner(), self.maximizer, depth) {
            return Ok(leaf(value));
        }

        if matches!(self.strategy.depth_limit, Some(limit) if depth >= limit) {
            self.used_heuristic = true;
            return Ok(leaf(heuristic(board, self.maximizer)));
        }

        let key = self.table.as_ref().map(|_| canonical_key(board));
        // nodes inside the snapshot are always expanded
        if let (Some(table), Some(key), false) = (&self.table, key, snapshot) {
            if let Some(value) = table.lookup(key, alpha, beta) {
                self.recorder.table_hit();
                return Ok(leaf(value));
            }
        }

        let (alpha_orig, beta_orig) = (alpha, beta);
        let moves = legal_moves(board);
        let mut best = if maximizing { -INFINITY } else { INFINITY };
        let mut children = Vec::new();
        let mut pruned = 0;

        for (i, &mv) in moves.iter().enumerate() {
            let child = board.apply(mv)?;
            let scored = self.node(&child, depth + 1, alpha, beta)?;
            if let Some(mut tree) = scored.tree {
                tree.mv = Some(mv);
                children.push(tree);
            }

            if maximizing {
                best = best.max(scored.value);
                if self.strategy.pruning {
                    alpha = alpha.max(best);
                }
            } else {
                best = best.min(scored.value);
                if self.strategy.pruning {
                    beta = beta.min(best);
                }
            }

            if self.strategy.pruning && alpha >= beta {
                pruned = moves.len() - i - 1;
                if pruned > 0 {
                    trace!(depth, alpha, beta, skipped = pruned, "cutoff");
                }
                self.recorder.prune(pruned);
                break;
            }
        }

        if let (Some(table), Some(key)) = (&mut self.table, key) {
            table.store(key, best, alpha_orig, beta_orig);
        }

        Ok(Scored {
            value: best,
            tree: snapshot.then(|| SearchTreeNode {
                mv: None,
                score: best,
                maximizing,
                pruned: pruned as u32,
                children,
            }),
        })
    }
}
