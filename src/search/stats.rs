//! Search instrumentation and the analysis attached to each result.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::tree::SearchTreeNode;

/// Counters accumulated while one search runs.
///
/// Owned by a single top-level search and passed down the recursion by
/// `&mut`; never shared between searches.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchRecorder {
    /// Nodes visited, root included.
    pub nodes_explored: u64,

    /// Sibling subtrees skipped by alpha-beta cutoffs.
    pub branches_pruned: u64,

    /// Deepest ply visited below the root.
    pub max_depth_reached: u32,

    /// Nodes answered from the transposition table.
    pub table_hits: u64,
}

impl SearchRecorder {
    /// Create new empty counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a visit to a node `depth` plies below the root.
    #[inline]
    pub fn visit(&mut self, depth: u32) {
        self.nodes_explored += 1;
        self.max_depth_reached = self.max_depth_reached.max(depth);
    }

    /// Count `skipped` sibling subtrees as pruned.
    #[inline]
    pub fn prune(&mut self, skipped: usize) {
        self.branches_pruned += skipped as u64;
    }

    #[inline]
    pub fn table_hit(&mut self) {
        self.table_hits += 1;
    }

    /// Finish recording and produce the analysis.
    #[must_use]
    pub fn finish(
        self,
        elapsed: Duration,
        reasoning: String,
        tree: Option<SearchTreeNode>,
    ) -> Analysis {
        Analysis {
            nodes_explored: self.nodes_explored,
            branches_pruned: self.branches_pruned,
            max_depth_reached: self.max_depth_reached,
            table_hits: self.table_hits,
            elapsed,
            reasoning,
            tree,
        }
    }
}

/// Statistics and explanation for one search.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    /// Nodes visited, root included.
    pub nodes_explored: u64,

    /// Sibling subtrees skipped by alpha-beta cutoffs.
    pub branches_pruned: u64,

    /// Deepest ply visited below the root.
    pub max_depth_reached: u32,

    /// Nodes answered from the transposition table.
    pub table_hits: u64,

    /// Wall-clock time spent searching, sent as `thinking_time` in seconds.
    #[serde(rename = "thinking_time", with = "seconds")]
    pub elapsed: Duration,

    /// Human-readable explanation of the chosen move.
    pub reasoning: String,

    /// Top of the searched tree, when a snapshot was requested.
    pub tree: Option<SearchTreeNode>,
}

impl Analysis {
    /// Calculate nodes explored per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs == 0.0 {
            0.0
        } else {
            self.nodes_explored as f64 / secs
        }
    }
}

mod seconds {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(elapsed: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(elapsed.as_secs_f64())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = f64::deserialize(deserializer)?;
        Duration::try_from_secs_f64(secs).map_err(serde::de::Error::custom)
    }
}
