//! Static evaluation of unfinished positions for depth-limited search.
//!
//! Open lines (lines holding marks of only one side) are worth more the
//! closer they are to completion; the center and corners are worth more than
//! edges because they sit on more lines. The result is only ever compared
//! against other heuristic values in the same search and always stays below
//! the magnitude of any decisive score.

use crate::core::{Board, Mark, Move, LINES};

/// Open line holding two of one side's marks.
pub const TWO_IN_LINE: i32 = 10;
/// Open line holding one of one side's marks.
pub const ONE_IN_LINE: i32 = 1;
/// Occupying the center.
pub const CENTER: i32 = 3;
/// Occupying a corner.
pub const CORNER: i32 = 2;

/// Largest absolute value [`heuristic`] can return.
pub const MAX_HEURISTIC: i32 = TWO_IN_LINE * LINES.len() as i32 + CENTER + CORNER * 4;

/// Score `board` from `side_to_maximize`'s point of view.
#[must_use]
pub fn heuristic(board: &Board, side_to_maximize: Mark) -> i32 {
    let cells = board.cells();
    let mut score = 0;

    for line in &LINES {
        let mut ours = 0;
        let mut theirs = 0;
        for &idx in line {
            match cells[idx].mark() {
                Some(mark) if mark == side_to_maximize => ours += 1,
                Some(_) => theirs += 1,
                None => {}
            }
        }
        score += match (ours, theirs) {
            (2, 0) => TWO_IN_LINE,
            (1, 0) => ONE_IN_LINE,
            (0, 2) => -TWO_IN_LINE,
            (0, 1) => -ONE_IN_LINE,
            _ => 0,
        };
    }

    for (idx, cell) in cells.iter().enumerate() {
        score += placement(cell.mark(), side_to_maximize, cell_weight(Move::from_index(idx)));
    }

    debug_assert!(score.abs() <= MAX_HEURISTIC);
    score
}

fn cell_weight(mv: Move) -> i32 {
    if mv.is_center() {
        CENTER
    } else if mv.is_corner() {
        CORNER
    } else {
        0
    }
}

fn placement(owner: Option<Mark>, side_to_maximize: Mark, weight: i32) -> i32 {
    match owner {
        Some(mark) if mark == side_to_maximize => weight,
        Some(_) => -weight,
        None => 0,
    }
}

const _: () = assert!(MAX_HEURISTIC < super::MIN_DECISIVE_SCORE);
