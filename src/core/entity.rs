//! Entity identification system.
//!
//! Every piece on the board (token, tile, goal) has a unique `EntityId`.
//!
//! ## ID Layout
//!
//! - `0..player_count`: Reserved for player tokens. A token's id is its
//!   owner's player index, so a token can be found from a `PlayerId` alone.
//! - `player_count..`: Tiles and goals, allocated in setup order.
//!
//! ```
//! use rust_labyrinth::core::{EntityId, PlayerId};
//!
//! let token = EntityId::token(PlayerId::new(1));
//! assert!(token.is_token(2));
//! assert_eq!(token.as_player(2), Some(PlayerId::new(1)));
//!
//! let tile = EntityId(7);
//! assert!(!tile.is_token(2));
//! ```

use serde::{Deserialize, Serialize};

use super::PlayerId;

/// Stable identity of a board piece.
///
/// Positions change every turn; identities never do. Snapshots and
/// restores during AI evaluation are keyed by this value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u32);

impl EntityId {
    /// The token id owned by a player.
    #[must_use]
    pub const fn token(player: PlayerId) -> Self {
        Self(player.0 as u32)
    }

    /// First id available for tiles and goals.
    #[must_use]
    pub const fn first_piece(player_count: usize) -> u32 {
        player_count as u32
    }

    /// Check if this id refers to a player token.
    #[must_use]
    pub const fn is_token(self, player_count: usize) -> bool {
        self.0 < player_count as u32
    }

    /// The owning player, if this is a token id.
    #[must_use]
    pub fn as_player(self, player_count: usize) -> Option<PlayerId> {
        if self.is_token(player_count) {
            Some(PlayerId::new(self.0 as u8))
        } else {
            None
        }
    }
}

impl From<u32> for EntityId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Entity({})", self.0)
    }
}

/// Monotonic id allocator used during board setup.
#[derive(Clone, Debug)]
pub struct EntityAllocator {
    next: u32,
}

impl EntityAllocator {
    /// Start allocating after the token range.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self {
            next: EntityId::first_piece(player_count),
        }
    }

    /// Allocate the next id.
    pub fn alloc(&mut self) -> EntityId {
        let id = EntityId(self.next);
        self.next += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_ids_match_players() {
        for i in 0..4u8 {
            let id = EntityId::token(PlayerId::new(i));
            assert_eq!(id.0, u32::from(i));
            assert!(id.is_token(4));
            assert_eq!(id.as_player(4), Some(PlayerId::new(i)));
        }
    }

    #[test]
    fn test_pieces_are_not_tokens() {
        assert!(!EntityId(2).is_token(2));
        assert!(!EntityId(100).is_token(4));
        assert_eq!(EntityId(2).as_player(2), None);
    }

    #[test]
    fn test_allocator_skips_token_range() {
        let mut alloc = EntityAllocator::new(3);
        assert_eq!(alloc.alloc(), EntityId(3));
        assert_eq!(alloc.alloc(), EntityId(4));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", EntityId(42)), "Entity(42)");
    }

    #[test]
    fn test_serialization() {
        let id = EntityId(123);
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: EntityId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
