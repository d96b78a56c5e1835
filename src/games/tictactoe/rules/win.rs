//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use tracing::instrument;

/// The 8 winning lines: 3 rows, 3 columns, 2 diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks whether `player` owns all three squares of any line.
#[instrument(skip(board))]
pub fn is_winner(board: &Board, player: Player) -> bool {
    let mark = Square::Occupied(player);
    LINES
        .iter()
        .any(|line| line.iter().all(|&pos| board.get(pos) == mark))
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
#[instrument(skip(board))]
pub fn winner(board: &Board) -> Option<Player> {
    for [a, b, c] in LINES {
        let sq = board.get(a);
        if let Square::Occupied(player) = sq
            && sq == board.get(b)
            && sq == board.get(c)
        {
            return Some(player);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert!(!is_winner(&board, Player::X));
        assert!(!is_winner(&board, Player::O));
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_every_line_wins_for_its_owner_only() {
        for player in [Player::X, Player::O] {
            for line in LINES {
                let mut board = Board::new();
                for pos in line {
                    board.apply_move(pos, player);
                }
                assert!(is_winner(&board, player), "{player} should win on {line:?}");
                assert!(
                    !is_winner(&board, player.opponent()),
                    "{} should not win on {line:?}",
                    player.opponent()
                );
                assert_eq!(winner(&board), Some(player));
            }
        }
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new();
        board.apply_move(Position::TopLeft, Player::X);
        board.apply_move(Position::TopCenter, Player::X);
        board.apply_move(Position::TopRight, Player::O);
        assert!(!is_winner(&board, Player::X));
        assert_eq!(winner(&board), None);
    }
}
