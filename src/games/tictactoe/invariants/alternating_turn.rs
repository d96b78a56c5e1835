//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{Board, Player};
use super::Invariant;

/// Invariant: Players alternate turns, X first.
///
/// Observed on the board alone, X has either as many marks as O
/// or exactly one more.
pub struct AlternatingTurnInvariant;

impl Invariant<Board> for AlternatingTurnInvariant {
    fn holds(board: &Board) -> bool {
        let x = board.count(Player::X);
        let o = board.count(Player::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
