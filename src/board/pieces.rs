//! Tokens, goals and the positioned-entity seam shared with tiles.

use serde::{Deserialize, Serialize};

use super::tile::Tile;
use crate::core::{Coord, EntityId, PlayerId};

/// Anything the shift engine can move.
pub trait Positioned {
    fn id(&self) -> EntityId;

    fn pos(&self) -> Coord;

    fn set_pos(&mut self, pos: Coord);

    /// Inactive pieces are ignored by shifting and path queries.
    fn is_active(&self) -> bool {
        true
    }
}

/// A player's piece.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub id: EntityId,
    pub owner: PlayerId,
    pub pos: Coord,
}

impl Token {
    #[must_use]
    pub fn new(owner: PlayerId, pos: Coord) -> Self {
        Self {
            id: EntityId::token(owner),
            owner,
            pos,
        }
    }
}

/// A collectible. Owned goals leave the board for good.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    pub id: EntityId,
    pub pos: Coord,
    pub owner: Option<PlayerId>,
}

impl Goal {
    #[must_use]
    pub fn new(id: EntityId, pos: Coord) -> Self {
        Self {
            id,
            pos,
            owner: None,
        }
    }

    #[must_use]
    pub fn is_collected(&self) -> bool {
        self.owner.is_some()
    }

    /// Hand the goal to `player` and park it off the board.
    pub fn collect(&mut self, player: PlayerId) {
        self.owner = Some(player);
        self.pos = Coord::OFF_BOARD;
    }
}

impl Positioned for Tile {
    fn id(&self) -> EntityId {
        self.id
    }

    fn pos(&self) -> Coord {
        self.pos
    }

    fn set_pos(&mut self, pos: Coord) {
        self.pos = pos;
    }
}

impl Positioned for Token {
    fn id(&self) -> EntityId {
        self.id
    }

    fn pos(&self) -> Coord {
        self.pos
    }

    fn set_pos(&mut self, pos: Coord) {
        self.pos = pos;
    }
}

impl Positioned for Goal {
    fn id(&self) -> EntityId {
        self.id
    }

    fn pos(&self) -> Coord {
        self.pos
    }

    fn set_pos(&mut self, pos: Coord) {
        self.pos = pos;
    }

    fn is_active(&self) -> bool {
        !self.is_collected()
    }
}
