//! Moves and legal move generation.
//!
//! Moves are generated center first, then corners, then edges. Alpha-beta
//! cutoffs happen earlier when strong moves come first, and node/prune counts
//! reported in the analysis depend on this exact order.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::board::{Board, CELL_COUNT};

/// A `(row, col)` cell reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    pub row: u8,
    pub col: u8,
}

impl Move {
    /// Create a move. Coordinates are not checked; see [`Move::is_on_board`].
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Move for a row-major cell index (0-8).
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self {
            row: (index / 3) as u8,
            col: (index % 3) as u8,
        }
    }

    /// Row-major cell index.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.row as usize * 3 + self.col as usize
    }

    #[must_use]
    pub const fn is_on_board(self) -> bool {
        self.row < 3 && self.col < 3
    }

    #[must_use]
    pub const fn is_center(self) -> bool {
        self.row == 1 && self.col == 1
    }

    #[must_use]
    pub const fn is_corner(self) -> bool {
        self.row != 1 && self.col != 1
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Legal moves for one position. Never more than 9, so kept inline.
pub type MoveList = SmallVec<[Move; CELL_COUNT]>;

/// Cell indices in generation order: center, corners, edges.
pub const MOVE_ORDER: [usize; CELL_COUNT] = [4, 0, 2, 6, 8, 1, 3, 5, 7];

/// Enumerate the legal moves of `board` in [`MOVE_ORDER`].
///
/// A finished game has no legal moves.
#[must_use]
pub fn legal_moves(board: &Board) -> MoveList {
    if board.is_terminal() {
        return MoveList::new();
    }

    let cells = board.cells();
    MOVE_ORDER
        .iter()
        .filter(|&&idx| cells[idx].is_empty())
        .map(|&idx| Move::from_index(idx))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_order() {
        let moves = legal_moves(&Board::new());
        let expected = [
            Move::new(1, 1),
            Move::new(0, 0),
            Move::new(0, 2),
            Move::new(2, 0),
            Move::new(2, 2),
            Move::new(0, 1),
            Move::new(1, 0),
            Move::new(1, 2),
            Move::new(2, 1),
        ];
        assert_eq!(moves.as_slice(), &expected);
    }

    #[test]
    fn test_skips_occupied() {
        let board = Board::from_rows(["X..", ".O.", "..."]).unwrap();
        let moves = legal_moves(&board);

        assert_eq!(moves.len(), 7);
        assert_eq!(moves[0], Move::new(0, 2));
        assert!(!moves.contains(&Move::new(0, 0)));
        assert!(!moves.contains(&Move::new(1, 1)));
    }

    #[test]
    fn test_terminal_has_no_moves() {
        let won = Board::from_rows(["XXX", "OO.", "..."]).unwrap();
        assert!(legal_moves(&won).is_empty());

        let drawn = Board::from_rows(["XOX", "OXO", "OXO"]).unwrap();
        assert!(legal_moves(&drawn).is_empty());
    }

    #[test]
    fn test_every_generated_move_applies() {
        let board = Board::from_rows(["XO.", "...", ".X."]).unwrap();
        for mv in legal_moves(&board) {
            assert!(board.apply(mv).is_ok(), "{} should be legal", mv);
        }
    }

    #[test]
    fn test_cell_classes() {
        assert!(Move::new(1, 1).is_center());
        assert!(!Move::new(1, 1).is_corner());
        assert!(Move::new(2, 0).is_corner());
        assert!(!Move::new(0, 1).is_corner());
        assert_eq!(Move::from_index(5), Move::new(1, 2));
        assert_eq!(Move::new(2, 1).index(), 7);
    }
}
