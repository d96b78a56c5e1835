//! Draw detection logic for tic-tac-toe.

use super::super::Board;
use super::win::winner;
use tracing::instrument;

/// Checks if the game is drawn: the board is full and nobody has a line.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && winner(board).is_none()
}
