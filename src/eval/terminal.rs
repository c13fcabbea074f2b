//! Scores for finished games.
//!
//! Wins and losses are biased by the ply at which they occur so that the
//! search prefers faster wins and slower losses.

use serde::{Deserialize, Serialize};

use crate::core::{Mark, Outcome, MAX_PLIES};

/// Magnitude of a win found at the root.
pub const WIN_SCORE: i32 = 1000;

/// Smallest magnitude any win or loss can have (a win on the last ply).
pub const MIN_DECISIVE_SCORE: i32 = WIN_SCORE - MAX_PLIES as i32;

/// Score a finished position from `side_to_maximize`'s point of view.
///
/// Returns `None` while the game is ongoing.
#[must_use]
pub fn terminal_score(outcome: Outcome, side_to_maximize: Mark, ply: u32) -> Option<i32> {
    let decisive = WIN_SCORE - ply as i32;
    match outcome {
        Outcome::Ongoing => None,
        Outcome::Draw => Some(0),
        Outcome::Win(mark) if mark == side_to_maximize => Some(decisive),
        Outcome::Win(_) => Some(-decisive),
    }
}

/// What a search score says about the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// The maximizer forces a win within `plies` plies of the root.
    ForcedWin { plies: u32 },
    /// The opponent forces a win within `plies` plies of the root.
    ForcedLoss { plies: u32 },
    /// No forced result inside the searched horizon.
    Undecided,
}

/// Interpret a score produced by a search rooted at ply 0.
#[must_use]
pub fn verdict(score: i32) -> Verdict {
    if score >= MIN_DECISIVE_SCORE {
        Verdict::ForcedWin {
            plies: (WIN_SCORE - score) as u32,
        }
    } else if score <= -MIN_DECISIVE_SCORE {
        Verdict::ForcedLoss {
            plies: (WIN_SCORE + score) as u32,
        }
    } else {
        Verdict::Undecided
    }
}
