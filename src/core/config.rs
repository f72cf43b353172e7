//! Game configuration.

use serde::{Deserialize, Serialize};

use super::player::MAX_PLAYERS;
use crate::board::topology::PLAYABLE_CELLS;
use crate::error::ConfigError;

/// Table-level settings for a new game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of seated players (1-4). Each gets one token.
    pub player_count: usize,

    /// Number of goals ("treasures") scattered at setup.
    pub goal_count: usize,

    /// Seed for setup and goal selection.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_count: 2,
            goal_count: 12,
            seed: 42,
        }
    }
}

impl GameConfig {
    pub fn with_player_count(mut self, count: usize) -> Self {
        self.player_count = count;
        self
    }

    pub fn with_goal_count(mut self, count: usize) -> Self {
        self.goal_count = count;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Check that tokens and goals can be placed on distinct cells.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.player_count == 0 || self.player_count > MAX_PLAYERS {
            return Err(ConfigError::PlayerCount(self.player_count));
        }
        if self.goal_count == 0 {
            return Err(ConfigError::NoGoals);
        }
        let pieces = self.player_count + self.goal_count;
        if pieces > PLAYABLE_CELLS {
            return Err(ConfigError::TooManyPieces {
                pieces,
                cells: PLAYABLE_CELLS,
            });
        }
        Ok(())
    }
}
