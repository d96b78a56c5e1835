//! Move entry: parsing, validation and the re-prompting read loop.

use super::terminal::Console;
use crate::error::ConsoleError;
use crate::games::tictactoe::{Board, Player, Position};
use std::io::{BufRead, Write};
use std::num::IntErrorKind;
use tracing::{debug, info, instrument};

/// Words that end the program from a move prompt (compared case-insensitively).
pub const QUIT_TOKENS: [&str; 3] = ["q", "quit", "exit"];

const QUIT_MESSAGE: &str = "Exiting game. Goodbye!";

/// What a player typed at the move prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveCommand {
    /// Stop playing altogether.
    Quit,
    /// Place a mark at the 1-based row and column (not yet range checked).
    Place {
        /// 1-based row.
        row: i64,
        /// 1-based column.
        col: i64,
    },
}

/// Result of the move read loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRead {
    /// A validated move onto an empty square.
    Move(Position),
    /// The player asked to quit.
    Quit,
}

/// A rejected move entry. The display text is shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum InputError {
    /// Not two comma-separated integers.
    #[display(
        "Invalid input format. Please enter row and column as two numbers separated by a comma, e.g., '2,3'."
    )]
    InvalidFormat,
    /// Row or column outside 1-3.
    #[display("Invalid input. Rows and columns must be between 1 and 3.")]
    OutOfRange,
    /// The chosen square already holds a mark.
    #[display("That cell is already taken. Please choose another.")]
    CellTaken,
}

/// Parses one line of move input.
///
/// Accepts a quit token or `row,col` with integer parts; whitespace
/// around each part is ignored.
#[instrument]
pub fn parse_move(text: &str) -> Result<MoveCommand, InputError> {
    let text = text.trim();
    if QUIT_TOKENS
        .iter()
        .any(|token| text.eq_ignore_ascii_case(token))
    {
        return Ok(MoveCommand::Quit);
    }

    let mut parts = text.split(',');
    let (Some(row), Some(col), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(InputError::InvalidFormat);
    };

    Ok(MoveCommand::Place {
        row: parse_coordinate(row)?,
        col: parse_coordinate(col)?,
    })
}

// Numbers too large for i64 saturate so they report as out of range.
fn parse_coordinate(part: &str) -> Result<i64, InputError> {
    match part.trim().parse::<i64>() {
        Ok(n) => Ok(n),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Ok(i64::MAX),
            IntErrorKind::NegOverflow => Ok(i64::MIN),
            _ => Err(InputError::InvalidFormat),
        },
    }
}

/// Maps a 1-based row and column onto an empty square of `board`.
#[instrument(skip(board))]
pub fn validate_move(board: &Board, row: i64, col: i64) -> Result<Position, InputError> {
    let to_zero_based = |n: i64| {
        n.checked_sub(1)
            .and_then(|i| usize::try_from(i).ok())
            .filter(|&i| i < 3)
            .ok_or(InputError::OutOfRange)
    };
    let (row, col) = (to_zero_based(row)?, to_zero_based(col)?);

    let pos = Position::from_coords(row, col).ok_or(InputError::OutOfRange)?;
    if !board.is_empty(pos) {
        return Err(InputError::CellTaken);
    }
    Ok(pos)
}

/// Prompts `player` until they enter a legal move or quit.
///
/// Each rejected entry prints its reason and prompts again without
/// touching the board. End of input counts as quitting.
#[instrument(skip(console, board))]
pub fn read_move<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    board: &Board,
    player: Player,
) -> Result<MoveRead, ConsoleError> {
    let prompt = format!("Player {} - Enter your move (row,col): ", player);
    loop {
        let Some(line) = console.prompt(&prompt)? else {
            info!("Input closed at move prompt, quitting");
            console.say("")?;
            console.say(QUIT_MESSAGE)?;
            return Ok(MoveRead::Quit);
        };

        let result = parse_move(&line).and_then(|command| match command {
            MoveCommand::Quit => Ok(MoveRead::Quit),
            MoveCommand::Place { row, col } => validate_move(board, row, col).map(MoveRead::Move),
        });

        match result {
            Ok(MoveRead::Quit) => {
                info!(%player, "Player quit");
                console.say(QUIT_MESSAGE)?;
                return Ok(MoveRead::Quit);
            }
            Ok(read) => {
                debug!(?read, "Move accepted");
                return Ok(read);
            }
            Err(e) => {
                debug!(error = ?e, input = %line.trim_end(), "Move rejected");
                console.say(&e.to_string())?;
            }
        }
    }
}
