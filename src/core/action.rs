//! Turn actions and the move history.
//!
//! A turn has two halves: an [`Insertion`] of the floating tile, then a
//! token move. Both are recorded as [`ActionRecord`]s so a game can be
//! replayed or inspected after the fact.

use serde::{Deserialize, Serialize};

use super::coord::Coord;
use super::direction::Direction;
use super::player::PlayerId;

/// Where and how the floating tile is pushed into the maze.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Insertion {
    /// Border cell the tile is staged on before the push.
    pub at: Coord,

    /// Orientation the tile has when it enters the grid.
    pub orientation: Direction,
}

impl Insertion {
    #[must_use]
    pub const fn new(at: Coord, orientation: Direction) -> Self {
        Self { at, orientation }
    }
}

impl std::fmt::Display for Insertion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "insert@{} facing {}", self.at, self.orientation)
    }
}

/// One half of a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// The maze was shifted.
    Insert(Insertion),
    /// The player's token moved (possibly onto the cell it was on).
    Move { from: Coord, to: Coord },
}

/// A recorded action with turn metadata.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub player: PlayerId,
    pub action: Action,
    /// Turn number (starts at 1).
    pub turn: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(player: PlayerId, action: Action, turn: u32) -> Self {
        Self {
            player,
            action,
            turn,
        }
    }
}
