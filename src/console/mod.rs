//! Line-oriented terminal front end.
//!
//! The [`Console`] wraps any buffered reader and writer, so the same game
//! loop drives stdin/stdout in the binary and in-memory buffers in tests.

mod game_loop;
mod input;
mod render;
mod session;
mod terminal;

pub use game_loop::{GameEnd, GameLoop, TurnState};
pub use input::{InputError, MoveCommand, MoveRead, parse_move, read_move, validate_move};
pub use render::{render, render_header};
pub use session::{SessionEnd, ask_replay, run_session};
pub use terminal::Console;
