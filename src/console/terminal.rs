//! Prompting, printing and screen clearing over a reader/writer pair.

use super::render::{render, render_header};
use crate::config::ConsoleConfig;
use crate::error::ConsoleError;
use crate::games::tictactoe::Board;
use crossterm::{cursor, execute, terminal};
use std::io::{BufRead, Write};
use tracing::{debug, instrument, trace};

/// A text terminal: lines in, formatted text out.
#[derive(Debug)]
pub struct Console<R, W> {
    reader: R,
    writer: W,
    config: ConsoleConfig,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console over the given input and output.
    #[instrument(skip(reader, writer))]
    pub fn new(reader: R, writer: W, config: ConsoleConfig) -> Self {
        Self {
            reader,
            writer,
            config,
        }
    }

    /// Clears the screen and homes the cursor, if clearing is enabled.
    #[instrument(skip(self))]
    pub fn clear(&mut self) -> Result<(), ConsoleError> {
        if *self.config.clear_screen() {
            execute!(
                self.writer,
                cursor::MoveTo(0, 0),
                terminal::Clear(terminal::ClearType::All)
            )?;
        }
        Ok(())
    }

    /// Writes `text` followed by a newline.
    pub fn say(&mut self, text: &str) -> Result<(), ConsoleError> {
        writeln!(self.writer, "{}", text)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Writes `text` without a newline and reads one line of input.
    ///
    /// Returns `None` once the input is exhausted. Bytes that are not
    /// valid UTF-8 are replaced, so they fail parsing like any other typo.
    #[instrument(skip(self))]
    pub fn prompt(&mut self, text: &str) -> Result<Option<String>, ConsoleError> {
        write!(self.writer, "{}", text)?;
        self.writer.flush()?;

        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            debug!("Input closed");
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf).into_owned();
        trace!(line = %line.trim_end(), "Read line");
        Ok(Some(line))
    }

    /// Redraws the screen: banner followed by the board.
    #[instrument(skip_all)]
    pub fn show_board(&mut self, board: &Board) -> Result<(), ConsoleError> {
        self.clear()?;
        write!(self.writer, "{}{}", render_header(), render(board))?;
        self.writer.flush()?;
        Ok(())
    }
}
