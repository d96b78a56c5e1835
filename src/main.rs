//! Strictly Tic-Tac-Toe - console entry point.

use anyhow::Result;
use strictly_tictactoe::{Console, ConsoleConfig, run_session};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Logs go to stderr so they never interleave with the board on stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Starting tic-tac-toe session");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock(), ConsoleConfig::default());

    let end = run_session(&mut console)?;
    info!(?end, "Session ended");

    Ok(())
}
