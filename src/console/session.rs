//! Replay loop wrapping successive games.

use super::game_loop::{GameEnd, GameLoop};
use super::terminal::Console;
use crate::error::ConsoleError;
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};

/// How the whole session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// A player entered a quit token during a game.
    Quit,
    /// The players declined to play again.
    Declined,
}

/// Asks whether to play another game.
///
/// Accepts `y`/`yes`/`n`/`no` in any case and re-prompts on anything else.
/// End of input is taken as "no".
#[instrument(skip_all)]
pub fn ask_replay<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<bool, ConsoleError> {
    loop {
        let Some(answer) = console.prompt("Do you want to play again? (y/n): ")? else {
            console.say("")?;
            return Ok(false);
        };
        match answer.trim().to_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            other => {
                debug!(answer = other, "Unrecognized replay answer");
                console.say("Please enter 'y' or 'n'.")?;
            }
        }
    }
}

/// Plays games back to back until a player quits or declines a rematch.
///
/// Every game starts from a fresh board with X to move.
#[instrument(skip_all)]
pub fn run_session<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<SessionEnd, ConsoleError> {
    let mut games = 0u32;
    loop {
        games += 1;
        debug!(game = games, "Game starting");

        match GameLoop::new().play(console)? {
            GameEnd::Quit => {
                info!(games, "Session quit");
                return Ok(SessionEnd::Quit);
            }
            GameEnd::Finished(outcome) => {
                info!(game = games, ?outcome, "Game finished");
                if !ask_replay(console)? {
                    console.say("Thanks for playing Tic Tac Toe. Goodbye!")?;
                    return Ok(SessionEnd::Declined);
                }
            }
        }
    }
}
