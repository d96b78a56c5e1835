mod action;
pub mod invariants;
mod position;
pub mod rules;
mod types;

pub use action::MoveError;
pub use position::Position;
pub use types::{Board, Outcome, Player, Square};
