//! The maze: tiles, pieces, the 7×7 frame and the board arena.

pub mod pieces;
pub mod setup;
pub mod state;
pub mod tile;
pub mod topology;

pub use pieces::{Goal, Positioned, Token};
pub use setup::BoardBuilder;
pub use state::{BoardSnapshot, BoardState, ShiftReport};
pub use tile::{Exits, Shape, Tile};
