//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Rules are kept apart from board
//! storage so the game loop can compose them after each move.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::{LINES, is_winner, winner};

use super::{Board, Outcome, Player};
use tracing::{debug, instrument};

/// Derives the outcome of the move just made by `last_mover`.
///
/// The mover's win is checked before fullness, so a ninth move that
/// completes a line is a win rather than a draw.
#[instrument(skip(board))]
pub fn evaluate(board: &Board, last_mover: Player) -> Outcome {
    let outcome = if is_winner(board, last_mover) {
        Outcome::Won(last_mover)
    } else if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::Ongoing
    };
    debug!(?outcome, "Board evaluated");
    outcome
}
