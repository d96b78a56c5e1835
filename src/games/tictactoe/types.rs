//! Core domain types for tic-tac-toe.

use super::position::Position;
use tracing::instrument;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Places `player`'s mark on the square at `pos`.
    ///
    /// The caller is responsible for checking that the square is empty;
    /// marks are never overwritten during a game.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, pos: Position, player: Player) {
        debug_assert!(self.is_empty(pos), "square {pos} is already occupied");
        self.squares[pos.to_index()] = Square::Occupied(player);
    }

    /// Checks if the board is full (no empty squares left).
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Number of squares holding `player`'s mark.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of evaluating a board after a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No winner yet and empty squares remain.
    Ongoing,
    /// A player completed a line.
    Won(Player),
    /// Board is full with no winner.
    Draw,
}
