//! Core engine types: identities, players, geometry, actions, RNG, configuration.

pub mod entity;
pub mod player;
pub mod direction;
pub mod coord;
pub mod rng;
pub mod config;
pub mod action;

pub use entity::{EntityAllocator, EntityId};
pub use player::{PlayerId, PlayerMap, MAX_PLAYERS};
pub use direction::Direction;
pub use coord::Coord;
pub use rng::{GameRng, GameRngState};
pub use config::GameConfig;
pub use action::{Action, ActionRecord, Insertion};
