//! D4 symmetries of the board and canonical position keys.
//!
//! The 8 rotations and reflections of the square map won/lost/drawn
//! positions onto positions with the same game value, so search results
//! can be shared between symmetric boards.

use super::board::{Board, Cell, Mark, CELL_COUNT};
use super::moves::Move;

/// The 8 elements of D4 as cell permutations: `TRANSFORMS[t][i]` is where
/// cell `i` lands under transform `t`. Index 0 is the identity.
pub const TRANSFORMS: [[usize; CELL_COUNT]; 8] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8], // identity
    [2, 5, 8, 1, 4, 7, 0, 3, 6], // rotate 90 counter-clockwise
    [8, 7, 6, 5, 4, 3, 2, 1, 0], // rotate 180
    [6, 3, 0, 7, 4, 1, 8, 5, 2], // rotate 90 clockwise
    [2, 1, 0, 5, 4, 3, 8, 7, 6], // mirror left-right
    [6, 7, 8, 3, 4, 5, 0, 1, 2], // mirror top-bottom
    [0, 3, 6, 1, 4, 7, 2, 5, 8], // main diagonal
    [8, 5, 2, 7, 4, 1, 6, 3, 0], // anti-diagonal
];

/// Apply transform `t` to a set of cells.
#[must_use]
pub fn transform_cells(cells: &[Cell; CELL_COUNT], t: usize) -> [Cell; CELL_COUNT] {
    let mut out = [Cell::Empty; CELL_COUNT];
    for (i, &cell) in cells.iter().enumerate() {
        out[TRANSFORMS[t][i]] = cell;
    }
    out
}

/// Apply transform `t` to a move.
#[must_use]
pub fn transform_move(mv: Move, t: usize) -> Move {
    Move::from_index(TRANSFORMS[t][mv.index()])
}

/// Base-3 encoding of cells (Empty=0, X=1, O=2), cell 0 most significant.
#[must_use]
pub fn encode(cells: &[Cell; CELL_COUNT]) -> u32 {
    cells.iter().fold(0, |acc, cell| {
        acc * 3
            + match cell {
                Cell::Empty => 0,
                Cell::X => 1,
                Cell::O => 2,
            }
    })
}

/// Key shared by all boards in the same symmetry class with the same side
/// to move: the minimal encoding over all 8 transforms, tagged with the
/// side to move in the low bit.
#[must_use]
pub fn canonical_key(board: &Board) -> u32 {
    let cells = board.cells();
    let min = (0..TRANSFORMS.len())
        .map(|t| encode(&transform_cells(cells, t)))
        .min()
        .unwrap_or_else(|| encode(cells));

    let side = match board.to_move() {
        Mark::X => 0,
        Mark::O => 1,
    };
    (min << 1) | side
}
