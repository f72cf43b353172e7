//! # rust-labyrinth
//!
//! A shifting-maze board game engine.
//!
//! Players take turns pushing a spare "floating" tile into one of the movable
//! rows or columns of a 5×5 maze, then walk their token along the open
//! passages toward the active goal.
//!
//! ## Design Principles
//!
//! 1. **Stable identities**: every tile, token and goal has an `EntityId` that
//!    never changes. Positions move; simulation snapshots are keyed by id.
//!
//! 2. **One owner**: a [`Game`] owns the board. Human requests and automated
//!    turns go through the same two commits.
//!
//! 3. **Deterministic**: every random choice draws from a seeded `GameRng`.
//!
//! ## Modules
//!
//! - `core`: Entity IDs, players, directions, coordinates, actions, RNG, configuration
//! - `board`: Tiles, tokens, goals, frame topology, the board arena and setup
//! - `shift`: Row/column shift descriptors
//! - `path`: Route finding through open passages
//! - `ai`: Single-ply insertion search and the automated-turn worker
//! - `rules`: Turn rules, the commit path and change events

pub mod core;
pub mod board;
pub mod shift;
pub mod path;
pub mod ai;
pub mod rules;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    EntityId, PlayerId, PlayerMap,
    Direction, Coord,
    GameRng, GameRngState, GameConfig,
    Action, ActionRecord, Insertion,
};

pub use crate::board::{
    BoardBuilder, BoardSnapshot, BoardState, Goal, Positioned, Shape, ShiftReport, Tile, Token,
};

pub use crate::shift::{Axis, EdgeRule, ShiftDescriptor};

pub use crate::path::{find_path, Route};

pub use crate::ai::{
    compute_automated_turn, AiConfig, AiWorker, AutomatedTurn, Candidate, Evaluation, SharedGame,
    TurnReport,
};

pub use crate::rules::{BoardEvent, Game, GameBuilder, GameResult, InsertionOutcome, MoveOutcome};

pub use crate::error::{ConfigError, GameError, InvariantViolation, MoveError, PlacementError};
