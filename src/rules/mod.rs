//! Turn rules and the commit path.
//!
//! [`Game`] owns the board and is the only way to change it during play:
//! human requests and automated turns both go through
//! [`Game::place_insertion`] and [`Game::place_token`].

pub mod engine;
pub mod events;

pub use engine::{Game, GameBuilder, GameResult, InsertionOutcome, MoveOutcome};
pub use events::BoardEvent;
