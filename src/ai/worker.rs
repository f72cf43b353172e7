//! Automated turns off the interactive thread.
//!
//! The worker owns a small rayon pool. Each automated turn runs as one job
//! that locks the shared [`Game`] three times: to decide, to commit the
//! insertion, and to commit the move. The think delay is slept between those
//! with the lock released, so interactive callers can keep reading the
//! board. The finished turn is sent back over a crossbeam channel.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crossbeam::channel::{self, Receiver};
use log::{debug, error};
use parking_lot::Mutex;
use rayon::{ThreadPool, ThreadPoolBuilder};

use super::config::AiConfig;
use super::evaluator::{compute_automated_turn, resolve_destination, AutomatedTurn};
use crate::core::{GameRng, PlayerId};
use crate::error::{ConfigError, GameError, InvariantViolation, PlacementError};
use crate::rules::{Game, InsertionOutcome, MoveOutcome};

/// A game shared between the interactive side and the worker.
pub type SharedGame = Arc<Mutex<Game>>;

/// Everything one automated turn did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnReport {
    pub player: PlayerId,
    pub decision: AutomatedTurn,
    pub insertion: InsertionOutcome,
    pub movement: MoveOutcome,
}

/// Runs automated turns on a dedicated pool.
pub struct AiWorker {
    pool: ThreadPool,
    config: AiConfig,
    rng: GameRng,
}

impl AiWorker {
    pub fn new(config: AiConfig) -> Result<Self, ConfigError> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(config.threads.max(1))
            .thread_name(|i| format!("maze-ai-{i}"))
            .build()
            .map_err(|e| ConfigError::WorkerPool(e.to_string()))?;
        let rng = GameRng::new(config.seed);
        Ok(Self { pool, config, rng })
    }

    #[must_use]
    pub fn config(&self) -> &AiConfig {
        &self.config
    }

    /// Start `player`'s turn in the background. The receiver yields exactly
    /// one result.
    pub fn spawn_turn(
        &mut self,
        game: SharedGame,
        player: PlayerId,
    ) -> Receiver<Result<TurnReport, GameError>> {
        let (tx, rx) = channel::bounded(1);
        let mut rng = self.rng.fork();
        let delay = self.config.think_delay();
        self.pool.spawn(move || {
            let result = play_turn(&game, player, delay, &mut rng);
            if let Err(e) = &result {
                error!("{player}: automated turn aborted: {e}");
            }
            // The caller may have stopped listening.
            let _ = tx.send(result);
        });
        rx
    }

    /// Run `player`'s turn on the pool and wait for it.
    pub fn play(&mut self, game: &SharedGame, player: PlayerId) -> Result<TurnReport, GameError> {
        self.spawn_turn(Arc::clone(game), player)
            .recv()
            .map_err(|_| GameError::WorkerDisconnected)?
    }
}

/// Decide, pause, insert, pause, move.
pub fn play_turn(
    game: &Mutex<Game>,
    player: PlayerId,
    delay: Duration,
    rng: &mut GameRng,
) -> Result<TurnReport, GameError> {
    let decision = {
        let game = game.lock();
        if game.active_player() != player {
            return Err(PlacementError::NotYourTurn(player).into());
        }
        compute_automated_turn(game.board(), player, game.active_goal(), rng)?
    };

    thread::sleep(delay);
    let insertion = game.lock().place_insertion(player, decision.insertion())?;

    thread::sleep(delay);
    let movement = {
        let mut game = game.lock();
        let goal = game.active_goal().ok_or(InvariantViolation::NoActiveGoal)?;
        let destination = resolve_destination(game.board(), player, goal)?;
        game.place_token(player, destination)?
    };

    debug!(
        "{player}: automated turn done, moved {} cells",
        movement.route.len().saturating_sub(1)
    );
    Ok(TurnReport {
        player,
        decision,
        insertion,
        movement,
    })
}
