//! Core game types: marks, boards, moves, symmetry and the RNG.
//!
//! Everything here is a pure function of its inputs. Boards are values;
//! nothing in this module holds shared mutable state.

pub mod board;
pub mod moves;
pub mod rng;
pub mod symmetry;

pub use board::{Board, Cell, Mark, Outcome, CELL_COUNT, LINES, MAX_PLIES};
pub use moves::{legal_moves, Move, MoveList, MOVE_ORDER};
pub use rng::GameRng;
pub use symmetry::canonical_key;
