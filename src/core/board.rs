//! Board model: marks, cells, outcomes and the 3x3 grid.
//!
//! `Board` is a small `Copy` value. Applying a move returns a new board and
//! never touches the original, so recursive search can backtrack simply by
//! letting the child board go out of scope.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::moves::Move;
use crate::error::{Error, Result};

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// Maximum number of plies in a game.
pub const MAX_PLIES: u32 = CELL_COUNT as u32;

/// The 8 winning lines as cell indices: rows, columns, diagonals.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// A player's mark.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// The cell holding this mark.
    #[must_use]
    pub const fn cell(self) -> Cell {
        match self {
            Mark::X => Cell::X,
            Mark::O => Cell::O,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Contents of a single cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    /// The mark in this cell, if any.
    #[must_use]
    pub const fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Mark::X),
            Cell::O => Some(Mark::O),
        }
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn as_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    /// Parse a single cell character.
    ///
    /// Accepts `X`/`x`, `O`/`o`, and `.`, `_` or a space for empty.
    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '_' | ' ' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' => Some(Cell::O),
            _ => None,
        }
    }

    /// Parse the wire form of a cell: `"X"`, `"O"` or `""`.
    pub fn from_wire(s: &str) -> Option<Cell> {
        match s {
            "" => Some(Cell::Empty),
            "X" => Some(Cell::X),
            "O" => Some(Cell::O),
            _ => None,
        }
    }
}

/// Game status derived from the board contents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Ongoing,
    Win(Mark),
    Draw,
}

impl Outcome {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }

    /// The winning side, if any.
    #[must_use]
    pub const fn winner(self) -> Option<Mark> {
        match self {
            Outcome::Win(mark) => Some(mark),
            _ => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Ongoing => write!(f, "ongoing"),
            Outcome::Win(mark) => write!(f, "{} wins", mark),
            Outcome::Draw => write!(f, "draw"),
        }
    }
}

/// A 3x3 board together with the side to move.
///
/// Cells are stored row-major: index `row * 3 + col`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
    to_move: Mark,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Empty board with X to move.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_first(Mark::X)
    }

    /// Empty board with the given side to move first.
    #[must_use]
    pub const fn with_first(first: Mark) -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
            to_move: first,
        }
    }

    /// Build a board from raw cells and an explicit side to move.
    ///
    /// # Errors
    ///
    /// Returns `InvalidBoard` if the position is unreachable.
    pub fn from_cells(cells: [Cell; CELL_COUNT], to_move: Mark) -> Result<Self> {
        let board = Self { cells, to_move };
        board.validate()?;
        Ok(board)
    }

    /// Parse three text rows such as `["XX.", "OO.", "..."]`.
    ///
    /// The side to move is inferred from the mark counts: the side with
    /// fewer marks moves, and X moves when the counts are equal.
    ///
    /// # Errors
    ///
    /// Returns `InvalidBoard` for malformed rows or an unreachable position.
    pub fn from_rows(rows: [&str; 3]) -> Result<Self> {
        let mut cells = [Cell::Empty; CELL_COUNT];
        for (r, row) in rows.iter().enumerate() {
            let chars: Vec<char> = row.chars().collect();
            if chars.len() != 3 {
                return Err(Error::invalid_board(format!(
                    "row {} has {} cells, expected 3",
                    r,
                    chars.len()
                )));
            }
            for (c, ch) in chars.into_iter().enumerate() {
                cells[r * 3 + c] = Cell::from_char(ch).ok_or_else(|| {
                    Error::invalid_board(format!("invalid cell '{}' at ({}, {})", ch, r, c))
                })?;
            }
        }
        Self::from_cells(cells, infer_to_move(&cells))
    }

    /// Parse the wire grid: 3 rows of 3 strings, each `"X"`, `"O"` or `""`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidBoard` for a grid of the wrong shape, unknown cell
    /// values, or an unreachable position.
    pub fn from_grid<S: AsRef<str>>(grid: &[Vec<S>]) -> Result<Self> {
        if grid.len() != 3 {
            return Err(Error::invalid_board(format!(
                "board has {} rows, expected 3",
                grid.len()
            )));
        }
        let mut cells = [Cell::Empty; CELL_COUNT];
        for (r, row) in grid.iter().enumerate() {
            if row.len() != 3 {
                return Err(Error::invalid_board(format!(
                    "row {} has {} cells, expected 3",
                    r,
                    row.len()
                )));
            }
            for (c, value) in row.iter().enumerate() {
                let value = value.as_ref();
                cells[r * 3 + c] = Cell::from_wire(value).ok_or_else(|| {
                    Error::invalid_board(format!("invalid cell {:?} at ({}, {})", value, r, c))
                })?;
            }
        }
        Self::from_cells(cells, infer_to_move(&cells))
    }

    /// The wire grid form of this board.
    #[must_use]
    pub fn to_grid(&self) -> Vec<Vec<String>> {
        self.cells
            .chunks(3)
            .map(|row| {
                row.iter()
                    .map(|cell| cell.mark().map(|m| m.to_string()).unwrap_or_default())
                    .collect()
            })
            .collect()
    }

    /// Same cells with a different side to move.
    ///
    /// # Errors
    ///
    /// Returns `InvalidBoard` if that side cannot be to move here.
    pub fn with_to_move(self, to_move: Mark) -> Result<Self> {
        Self::from_cells(self.cells, to_move)
    }

    /// Check the alternating-turn invariants.
    ///
    /// # Errors
    ///
    /// Returns `InvalidBoard` naming the violated invariant.
    pub fn validate(&self) -> Result<()> {
        let x = self.count(Mark::X);
        let o = self.count(Mark::O);

        if x.abs_diff(o) > 1 {
            return Err(Error::invalid_board(format!(
                "impossible mark counts: X={}, O={}",
                x, o
            )));
        }

        let behind = match x.cmp(&o) {
            std::cmp::Ordering::Less => Some(Mark::X),
            std::cmp::Ordering::Greater => Some(Mark::O),
            std::cmp::Ordering::Equal => None,
        };
        if let Some(behind) = behind {
            if behind != self.to_move {
                return Err(Error::invalid_board(format!(
                    "{} is to move but has more marks than {}",
                    self.to_move,
                    self.to_move.opponent()
                )));
            }
        }

        let x_line = self.has_line(Mark::X);
        let o_line = self.has_line(Mark::O);
        if x_line && o_line {
            return Err(Error::invalid_board("both sides have three in a row"));
        }
        if (x_line && self.to_move == Mark::X) || (o_line && self.to_move == Mark::O) {
            return Err(Error::invalid_board(format!(
                "{} has three in a row but is to move",
                self.to_move
            )));
        }

        Ok(())
    }

    /// The side whose turn it is.
    #[inline]
    #[must_use]
    pub const fn to_move(&self) -> Mark {
        self.to_move
    }

    /// All cells, row-major.
    #[inline]
    #[must_use]
    pub const fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// The cell at a move's coordinates.
    #[inline]
    #[must_use]
    pub fn cell(&self, mv: Move) -> Cell {
        self.cells[mv.index()]
    }

    /// Number of cells holding `mark`.
    #[must_use]
    pub fn count(&self, mark: Mark) -> usize {
        let target = mark.cell();
        self.cells.iter().filter(|&&c| c == target).count()
    }

    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_empty()).count()
    }

    /// Number of moves played so far.
    #[must_use]
    pub fn ply(&self) -> u32 {
        (CELL_COUNT - self.empty_count()) as u32
    }

    /// True iff no Empty cells remain.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Outcome of the position.
    ///
    /// Lines are checked rows first, then columns, then diagonals; the first
    /// full line decides.
    #[must_use]
    pub fn winner(&self) -> Outcome {
        for line in &LINES {
            let first = self.cells[line[0]];
            if let Some(mark) = first.mark() {
                if self.cells[line[1]] == first && self.cells[line[2]] == first {
                    return Outcome::Win(mark);
                }
            }
        }

        if self.is_full() {
            Outcome::Draw
        } else {
            Outcome::Ongoing
        }
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.winner().is_terminal()
    }

    /// Whether `mark` owns a full line.
    #[must_use]
    pub fn has_line(&self, mark: Mark) -> bool {
        let target = mark.cell();
        LINES
            .iter()
            .any(|line| line.iter().all(|&idx| self.cells[idx] == target))
    }

    /// Place the side-to-move's mark and pass the turn.
    ///
    /// # Errors
    ///
    /// Returns `InvalidMove` if the cell is occupied or off the board.
    pub fn apply(&self, mv: Move) -> Result<Board> {
        self.apply_mark(mv, self.to_move)
    }

    /// Place `mark` at `mv`; the opponent of `mark` moves next.
    ///
    /// # Errors
    ///
    /// Returns `InvalidMove` if the cell is occupied or off the board.
    pub fn apply_mark(&self, mv: Move, mark: Mark) -> Result<Board> {
        if !mv.is_on_board() || !self.cells[mv.index()].is_empty() {
            return Err(Error::InvalidMove {
                row: mv.row,
                col: mv.col,
            });
        }

        let mut next = *self;
        next.cells[mv.index()] = mark.cell();
        next.to_move = mark.opponent();
        Ok(next)
    }
}

/// Side to move implied by mark counts; X moves first on equal counts.
fn infer_to_move(cells: &[Cell; CELL_COUNT]) -> Mark {
    let x = cells.iter().filter(|&&c| c == Cell::X).count();
    let o = cells.iter().filter(|&&c| c == Cell::O).count();
    if x > o {
        Mark::O
    } else {
        Mark::X
    }
}

impl FromStr for Board {
    type Err = Error;

    /// Parse `"XX./OO./..."` (rows separated by `/`) or nine cell characters.
    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split('/').collect();
        match parts.as_slice() {
            [a, b, c] => Board::from_rows([*a, *b, *c]),
            [flat] if flat.chars().count() == CELL_COUNT => {
                let chars: Vec<char> = flat.chars().collect();
                let rows: Vec<String> = chars.chunks(3).map(|r| r.iter().collect()).collect();
                Board::from_rows([rows[0].as_str(), rows[1].as_str(), rows[2].as_str()])
            }
            _ => Err(Error::invalid_board(format!(
                "cannot parse board from {:?}",
                s
            ))),
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.chunks(3).enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.as_char())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board() {
        let board = Board::new();
        assert_eq!(board.to_move(), Mark::X);
        assert_eq!(board.empty_count(), 9);
        assert!(!board.is_full());
        assert_eq!(board.winner(), Outcome::Ongoing);
    }

    #[test]
    fn test_parse_rows_infers_side() {
        let board: Board = "XX./OO./...".parse().unwrap();
        assert_eq!(board.to_move(), Mark::X);

        let board: Board = "X../.O./..X".parse().unwrap();
        assert_eq!(board.to_move(), Mark::O);

        let board: Board = "X........".parse().unwrap();
        assert_eq!(board.to_move(), Mark::O);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(matches!(
            "XQ./.../...".parse::<Board>(),
            Err(Error::InvalidBoard { .. })
        ));
        assert!(matches!(
            "XX/.../...".parse::<Board>(),
            Err(Error::InvalidBoard { .. })
        ));
        assert!(matches!("".parse::<Board>(), Err(Error::InvalidBoard { .. })));
    }

    #[test]
    fn test_invalid_counts() {
        assert!(matches!(
            "XXX/.../...".parse::<Board>(),
            Err(Error::InvalidBoard { .. })
        ));
        // O ahead is allowed only with X to move
        let board = Board::from_rows(["O..", "...", "..."]).unwrap();
        assert_eq!(board.to_move(), Mark::X);
        assert!(board.with_to_move(Mark::O).is_err());
    }

    #[test]
    fn test_both_sides_winning_is_invalid() {
        let err = Board::from_rows(["XXX", "OOO", "..."]).unwrap_err();
        assert!(matches!(err, Error::InvalidBoard { .. }));
    }

    #[test]
    fn test_winner_must_have_moved_last() {
        // X completed the row, so O is to move.
        let board = Board::from_rows(["XXX", "OO.", "..."]).unwrap();
        assert_eq!(board.winner(), Outcome::Win(Mark::X));
        assert!(board.with_to_move(Mark::X).is_err());
    }

    #[test]
    fn test_winner_lines() {
        let cases = [
            ["XXX", "OO.", "..."],
            ["XO.", "XO.", "X.."],
            ["XO.", "OX.", "..X"],
            ["O.X", "OX.", "X.."],
        ];
        for rows in cases {
            let board = Board::from_rows(rows).unwrap();
            assert_eq!(board.winner(), Outcome::Win(Mark::X), "{:?}", rows);
        }
    }

    #[test]
    fn test_draw() {
        let board = Board::from_rows(["XOX", "OXO", "OXO"]).unwrap();
        assert!(board.is_full());
        assert_eq!(board.winner(), Outcome::Draw);
        assert!(board.is_terminal());
    }

    #[test]
    fn test_apply_is_pure() {
        let board = Board::new();
        let next = board.apply(Move::new(1, 1)).unwrap();

        assert_eq!(board.cell(Move::new(1, 1)), Cell::Empty);
        assert_eq!(next.cell(Move::new(1, 1)), Cell::X);
        assert_eq!(next.to_move(), Mark::O);
        assert_eq!(next.ply(), 1);
    }

    #[test]
    fn test_apply_occupied_fails() {
        let board = Board::new().apply(Move::new(0, 0)).unwrap();
        assert_eq!(
            board.apply(Move::new(0, 0)),
            Err(Error::InvalidMove { row: 0, col: 0 })
        );
    }

    #[test]
    fn test_apply_on_full_board_fails() {
        let board = Board::from_rows(["XOX", "OXO", "OXO"]).unwrap();
        for idx in 0..9 {
            let mv = Move::from_index(idx);
            assert!(matches!(
                board.apply(mv),
                Err(Error::InvalidMove { .. })
            ));
        }
    }

    #[test]
    fn test_apply_off_board_fails() {
        let mv = Move { row: 3, col: 0 };
        assert_eq!(
            Board::new().apply(mv),
            Err(Error::InvalidMove { row: 3, col: 0 })
        );
    }

    #[test]
    fn test_apply_mark_explicit() {
        let board = Board::new().apply_mark(Move::new(2, 2), Mark::O).unwrap();
        assert_eq!(board.cell(Move::new(2, 2)), Cell::O);
        assert_eq!(board.to_move(), Mark::X);
    }

    #[test]
    fn test_grid_round_trip() {
        let grid = vec![
            vec!["X".to_string(), "".to_string(), "".to_string()],
            vec!["".to_string(), "O".to_string(), "".to_string()],
            vec!["".to_string(), "".to_string(), "".to_string()],
        ];
        let board = Board::from_grid(&grid).unwrap();
        assert_eq!(board.to_move(), Mark::X);
        assert_eq!(board.to_grid(), grid);
    }

    #[test]
    fn test_grid_rejects_bad_shape_and_values() {
        let short = vec![vec!["X", "", ""], vec!["", "", ""]];
        assert!(matches!(
            Board::from_grid(&short),
            Err(Error::InvalidBoard { .. })
        ));

        let bad = vec![vec!["X", "", ""], vec!["", "Z", ""], vec!["", "", ""]];
        assert!(matches!(
            Board::from_grid(&bad),
            Err(Error::InvalidBoard { .. })
        ));
    }

    #[test]
    fn test_wire_cells_are_strict() {
        assert_eq!(Cell::from_wire("X"), Some(Cell::X));
        assert_eq!(Cell::from_wire("O"), Some(Cell::O));
        assert_eq!(Cell::from_wire(""), Some(Cell::Empty));
        assert_eq!(Cell::from_wire("x"), None);
        assert_eq!(Cell::from_wire("o"), None);
        assert_eq!(Cell::from_wire("0"), None);
        assert_eq!(Cell::from_char('0'), None);

        let lowercase = vec![vec!["x", "", ""], vec!["", "O", ""], vec!["", "", ""]];
        assert!(matches!(
            Board::from_grid(&lowercase),
            Err(Error::InvalidBoard { .. })
        ));
    }

    #[test]
    fn test_display() {
        let board = Board::from_rows(["XX.", "OO.", "..."]).unwrap();
        assert_eq!(board.to_string(), "XX.\nOO.\n...");
    }
}
