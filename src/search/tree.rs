//! Snapshot of the top of the searched game tree, for visualization.

use serde::{Deserialize, Serialize};
use text_trees::StringTreeNode;

use crate::core::Move;

/// One node of a tree snapshot.
///
/// Children appear in the order they were searched. A node's score equals
/// the best child score for the side moving at that node.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchTreeNode {
    /// Move leading here; `None` at the root.
    pub mv: Option<Move>,
    /// Backed-up score from the maximizer's point of view.
    pub score: i32,
    /// Whether the maximizer moves at this node.
    pub maximizing: bool,
    /// Children skipped by alpha-beta cutoffs.
    pub pruned: u32,
    /// Searched children, empty at leaves and below the snapshot depth.
    pub children: Vec<SearchTreeNode>,
}

impl SearchTreeNode {
    /// A node without children.
    #[must_use]
    pub fn leaf(mv: Option<Move>, score: i32, maximizing: bool) -> Self {
        Self {
            mv,
            score,
            maximizing,
            pruned: 0,
            children: Vec::new(),
        }
    }

    /// Number of nodes in the snapshot.
    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(SearchTreeNode::node_count)
            .sum::<usize>()
    }

    /// Depth of the snapshot in plies.
    #[must_use]
    pub fn depth(&self) -> u32 {
        self.children
            .iter()
            .map(|c| c.depth() + 1)
            .max()
            .unwrap_or(0)
    }

    /// The line of play the search expects, as far as the snapshot reaches.
    ///
    /// Follows the first child whose score matches its parent's.
    #[must_use]
    pub fn principal_variation(&self) -> Vec<Move> {
        let chosen = self
            .children
            .iter()
            .find(|child| child.score == self.score);

        match chosen {
            Some(child) => {
                let mut line: Vec<Move> = child.mv.into_iter().collect();
                line.extend(child.principal_variation());
                line
            }
            None => Vec::new(),
        }
    }

    /// Render as an indented text tree.
    #[must_use]
    pub fn to_text_tree(&self) -> String {
        format!("{}", self.to_string_tree_node())
    }

    fn to_string_tree_node(&self) -> StringTreeNode {
        let side = if self.maximizing { "max" } else { "min" };
        let mut label = match self.mv {
            Some(mv) => format!("{} {} [{}]", mv, self.score, side),
            None => format!("root {} [{}]", self.score, side),
        };
        if self.pruned > 0 {
            label.push_str(&format!(" pruned {}", self.pruned));
        }

        let mut node = StringTreeNode::new(label);
        for child in &self.children {
            node.push_node(child.to_string_tree_node());
        }
        node
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SearchTreeNode {
        let mut a = SearchTreeNode::leaf(Some(Move::new(1, 1)), 0, false);
        a.children.push(SearchTreeNode::leaf(Some(Move::new(0, 0)), 5, true));
        a.children.push(SearchTreeNode::leaf(Some(Move::new(0, 1)), 0, true));

        let b = SearchTreeNode::leaf(Some(Move::new(0, 0)), -3, false);

        SearchTreeNode {
            mv: None,
            score: 0,
            maximizing: true,
            pruned: 1,
            children: vec![a, b],
        }
    }

    #[test]
    fn test_len_and_depth() {
        let tree = sample();
        assert_eq!(tree.node_count(), 5);
        assert_eq!(tree.depth(), 2);
    }

    #[test]
    fn test_principal_variation() {
        let tree = sample();
        assert_eq!(
            tree.principal_variation(),
            vec![Move::new(1, 1), Move::new(0, 1)]
        );
    }

    #[test]
    fn test_text_tree() {
        let text = sample().to_text_tree();
        assert!(text.starts_with("root 0 [max] pruned 1"));
        assert!(text.contains("(1, 1) 0 [min]"));
        assert!(text.contains("(0, 1) 0 [max]"));
        assert_eq!(text.lines().count(), 5);
    }
}
