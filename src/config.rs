//! Console presentation settings.

use derive_getters::Getters;
use derive_setters::Setters;
use tracing::instrument;

/// Settings for how the game draws itself on the terminal.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters)]
#[setters(prefix = "with_")]
pub struct ConsoleConfig {
    /// Clear the screen before each board render.
    clear_screen: bool,
}

impl ConsoleConfig {
    /// Settings used by the interactive binary.
    #[instrument]
    pub fn new() -> Self {
        Self { clear_screen: true }
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self::new()
    }
}
