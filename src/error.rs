//! Error types for the maze engine.
//!
//! Rejected requests (`PlacementError`, `MoveError`) are ordinary outcomes
//! reported back to whoever submitted them; the board is left untouched.
//! `InvariantViolation` means the engine itself is in a state it should never
//! reach and the current turn must be abandoned.

use thiserror::Error;

use crate::core::{Coord, EntityId, PlayerId};

/// An insertion request that the rules do not allow.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
    #[error("{0} is not on a movable row or column")]
    NotMovable(Coord),

    #[error("{0} is where the floating tile was just pushed out")]
    ForbiddenOrigin(Coord),

    #[error("it is not {0}'s turn")]
    NotYourTurn(PlayerId),

    #[error("{0} has already shifted the maze this turn")]
    AlreadyInserted(PlayerId),

    #[error("the game is over")]
    GameOver,

    #[error(transparent)]
    Corrupted(#[from] InvariantViolation),
}

/// A token move that the rules do not allow.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("no open passage from {from} to {to}")]
    Unreachable { from: Coord, to: Coord },

    #[error("it is not {0}'s turn")]
    NotYourTurn(PlayerId),

    #[error("{0} must shift the maze before moving")]
    InsertionPending(PlayerId),

    #[error("the game is over")]
    GameOver,

    #[error(transparent)]
    Corrupted(#[from] InvariantViolation),
}

/// Engine state that correct setup can never produce.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("no insertion candidate could be evaluated")]
    NoCandidates,

    #[error("playable cell {0} has no tile")]
    MissingTile(Coord),

    #[error("playable cell {0} holds more than one tile")]
    StackedTiles(Coord),

    #[error("shift evicted {0} tiles, expected exactly one")]
    EvictionCount(usize),

    #[error("no active goal to evaluate against")]
    NoActiveGoal,

    #[error("unknown entity {0}")]
    UnknownEntity(EntityId),

    #[error("no tile left over to float")]
    NoFloatingTile,

    #[error("entity {0} appears more than once")]
    DuplicateEntity(EntityId),

    #[error("forbidden origin {0} is not where the floating tile sits")]
    ForbiddenOriginMismatch(i32),
}

/// Invalid game configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("player count must be 1-4, got {0}")]
    PlayerCount(usize),

    #[error("{pieces} tokens and goals do not fit on {cells} cells")]
    TooManyPieces { pieces: usize, cells: usize },

    #[error("goal count must be at least 1")]
    NoGoals,

    #[error("failed to build worker pool: {0}")]
    WorkerPool(String),
}

/// Any engine failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("illegal placement: {0}")]
    Placement(#[from] PlacementError),

    #[error("illegal move: {0}")]
    Move(#[from] MoveError),

    #[error("invariant violation: {0}")]
    Invariant(#[from] InvariantViolation),

    #[error("configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("automated turn worker exited without a result")]
    WorkerDisconnected,
}
