//! Position evaluation: exact scores for finished games and a heuristic
//! for positions cut off by a depth limit.

pub mod heuristic;
pub mod terminal;

pub use heuristic::{heuristic, MAX_HEURISTIC};
pub use terminal::{terminal_score, verdict, Verdict, MIN_DECISIVE_SCORE, WIN_SCORE};
