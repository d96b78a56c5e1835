//! Strictly Tic-Tac-Toe - two players, one terminal
//!
//! A line-oriented tic-tac-toe game: the board is redrawn after every move,
//! players type `row,col` coordinates, and the game ends on three in a row
//! or a full board.
//!
//! # Architecture
//!
//! - **Games**: board, positions, win/draw rules and invariants
//! - **Console**: rendering, move input, the per-game state machine and
//!   the replay session
//!
//! # Example
//!
//! ```no_run
//! use strictly_tictactoe::{Console, ConsoleConfig, run_session};
//!
//! # fn example() -> anyhow::Result<()> {
//! let stdin = std::io::stdin();
//! let mut console = Console::new(stdin.lock(), std::io::stdout(), ConsoleConfig::default());
//! run_session(&mut console)?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod console;
mod error;
mod games;

// Crate-level exports - Configuration and errors
pub use config::ConsoleConfig;
pub use error::ConsoleError;

// Crate-level exports - Console front end
pub use console::{
    Console, GameEnd, GameLoop, InputError, MoveCommand, MoveRead, SessionEnd, TurnState,
    ask_replay, parse_move, read_move, render, render_header, run_session, validate_move,
};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::invariants::{AlternatingTurnInvariant, Invariant};
pub use games::tictactoe::rules::{LINES, evaluate, is_draw, is_winner, winner};
pub use games::tictactoe::{Board, MoveError, Outcome, Player, Position, Square};
