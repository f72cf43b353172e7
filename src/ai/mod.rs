//! Automated player.
//!
//! - [`evaluator`]: the single-ply insertion search and destination choice.
//! - [`worker`]: runs automated turns on a thread pool against a shared game.

pub mod config;
pub mod evaluator;
pub mod worker;

pub use config::AiConfig;
pub use evaluator::{
    compute_automated_turn, evaluate, resolve_destination, AutomatedTurn, Candidate, Evaluation,
    SIMULATED_TOKEN_PASSES,
};
pub use worker::{play_turn, AiWorker, SharedGame, TurnReport};
