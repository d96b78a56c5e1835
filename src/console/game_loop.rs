//! Turn-by-turn state machine for a single game.

use super::input::{MoveRead, read_move};
use super::terminal::Console;
use crate::error::ConsoleError;
use crate::games::tictactoe::invariants::{AlternatingTurnInvariant, Invariant};
use crate::games::tictactoe::{Board, MoveError, Outcome, Player, Position, rules};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};

/// Phase of the game loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    /// Waiting for `Player` to pick a square.
    AwaitingMove(Player),
    /// `Player` just moved; the board has not been judged yet.
    Evaluating(Player),
    /// `Player` completed a line.
    Won(Player),
    /// Board filled without a line.
    Draw,
}

impl TurnState {
    /// Returns true once the game has ended.
    pub fn is_terminal(&self) -> bool {
        matches!(self, TurnState::Won(_) | TurnState::Draw)
    }
}

/// How a game loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEnd {
    /// Game reached a terminal state.
    Finished(Outcome),
    /// A player asked to quit mid-game.
    Quit,
}

/// One game: a board owned for its lifetime and the current turn state.
#[derive(Debug, Clone)]
pub struct GameLoop {
    board: Board,
    state: TurnState,
}

impl GameLoop {
    /// Creates a game with an empty board and X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            state: TurnState::AwaitingMove(Player::X),
        }
    }

    /// Returns a reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current turn state.
    pub fn state(&self) -> TurnState {
        self.state
    }

    /// Places the current player's mark and advances the state machine.
    ///
    /// # Errors
    ///
    /// Returns `MoveError::GameOver` after a win or draw, and
    /// `MoveError::SquareOccupied` if the square is taken. The board is
    /// unchanged on error.
    #[instrument(skip(self), fields(state = ?self.state))]
    pub fn place(&mut self, pos: Position) -> Result<TurnState, MoveError> {
        self.mark(pos)?;
        Ok(self.settle())
    }

    // AwaitingMove(p) -> Evaluating(p)
    fn mark(&mut self, pos: Position) -> Result<(), MoveError> {
        let TurnState::AwaitingMove(player) = self.state else {
            return Err(MoveError::GameOver);
        };
        if !self.board.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        self.board.apply_move(pos, player);
        debug_assert!(
            AlternatingTurnInvariant::holds(&self.board),
            "{}",
            AlternatingTurnInvariant::description()
        );
        self.state = TurnState::Evaluating(player);
        Ok(())
    }

    // Evaluating(p) -> AwaitingMove(opponent) | Won(p) | Draw
    fn settle(&mut self) -> TurnState {
        if let TurnState::Evaluating(player) = self.state {
            self.state = match rules::evaluate(&self.board, player) {
                Outcome::Ongoing => TurnState::AwaitingMove(player.opponent()),
                Outcome::Won(winner) => TurnState::Won(winner),
                Outcome::Draw => TurnState::Draw,
            };
            debug!(state = ?self.state, "Turn settled");
        }
        self.state
    }

    /// Plays the game on `console` until it ends or a player quits.
    #[instrument(skip_all)]
    pub fn play<R: BufRead, W: Write>(
        mut self,
        console: &mut Console<R, W>,
    ) -> Result<GameEnd, ConsoleError> {
        info!("Starting new game");
        console.show_board(&self.board)?;

        loop {
            match self.state {
                TurnState::AwaitingMove(player) => {
                    let pos = match read_move(console, &self.board, player)? {
                        MoveRead::Move(pos) => pos,
                        MoveRead::Quit => return Ok(GameEnd::Quit),
                    };
                    match self.mark(pos) {
                        Ok(()) => console.show_board(&self.board)?,
                        Err(e) => {
                            debug!(error = %e, "Move refused by game");
                            console.say(&e.to_string())?;
                        }
                    }
                }
                TurnState::Evaluating(_) => {
                    self.settle();
                }
                TurnState::Won(winner) => {
                    info!(%winner, "Game won");
                    console.say(&format!(
                        "🎉 Player {} wins! Congratulations! 🎉\n",
                        winner
                    ))?;
                    return Ok(GameEnd::Finished(Outcome::Won(winner)));
                }
                TurnState::Draw => {
                    info!("Game drawn");
                    console.say("It's a tie! No more moves left.\n")?;
                    return Ok(GameEnd::Finished(Outcome::Draw));
                }
            }
        }
    }
}

impl Default for GameLoop {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_with_x() {
        let game = GameLoop::new();
        assert_eq!(game.state(), TurnState::AwaitingMove(Player::X));
        assert!(!game.state().is_terminal());
    }

    #[test]
    fn test_turns_alternate() {
        let mut game = GameLoop::new();
        assert_eq!(
            game.place(Position::Center),
            Ok(TurnState::AwaitingMove(Player::O))
        );
        assert_eq!(
            game.place(Position::TopLeft),
            Ok(TurnState::AwaitingMove(Player::X))
        );
    }

    #[test]
    fn test_occupied_square_rejected_without_turn_change() {
        let mut game = GameLoop::new();
        game.place(Position::Center).expect("first move");
        let before = game.board().clone();
        assert_eq!(
            game.place(Position::Center),
            Err(MoveError::SquareOccupied(Position::Center))
        );
        assert_eq!(game.board(), &before);
        assert_eq!(game.state(), TurnState::AwaitingMove(Player::O));
    }

    #[test]
    fn test_mark_then_settle() {
        let mut game = GameLoop::new();
        game.mark(Position::TopLeft).expect("legal move");
        assert_eq!(game.state(), TurnState::Evaluating(Player::X));
        assert_eq!(game.settle(), TurnState::AwaitingMove(Player::O));
        assert_eq!(game.settle(), TurnState::AwaitingMove(Player::O));
    }

    #[test]
    fn test_no_moves_after_win() {
        let mut game = GameLoop::new();
        for pos in [
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::MiddleLeft,
            Position::TopRight,
        ] {
            game.place(pos).expect("legal move");
        }
        assert_eq!(game.state(), TurnState::Won(Player::X));
        assert_eq!(game.place(Position::BottomRight), Err(MoveError::GameOver));
    }
}
