//! Text rendering for the board.

use crate::games::tictactoe::{Board, Player, Position, Square};

const RULE: &str = "=================================";

/// Banner printed above the board.
pub fn render_header() -> String {
    format!("\n{RULE}\n    TIC TAC TOE  -  Two Players\n{RULE}\n\n")
}

/// Draws the board as a boxed grid with 1-based row and column labels.
pub fn render(board: &Board) -> String {
    let mut out = String::from("    1   2   3\n  ┌───┬───┬───┐\n");
    for row in 0..3 {
        out.push_str(&format!("{} │", row + 1));
        for col in 0..3 {
            let mark = Position::from_coords(row, col)
                .map(|pos| board.get(pos))
                .map_or(' ', symbol);
            out.push_str(&format!(" {mark} │"));
        }
        out.push('\n');
        if row < 2 {
            out.push_str("  ├───┼───┼───┤\n");
        }
    }
    out.push_str("  └───┴───┴───┘\n\n");
    out
}

fn symbol(square: Square) -> char {
    match square {
        Square::Empty => ' ',
        Square::Occupied(Player::X) => 'X',
        Square::Occupied(Player::O) => 'O',
    }
}
