//! Automated-player configuration parameters.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Automated-player configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiConfig {
    /// Pause before each commit, in milliseconds (default: 3000).
    /// Taken twice per turn: before the insertion and before the move.
    pub think_delay_ms: u64,

    /// Threads in the worker pool (default: 1).
    pub threads: usize,

    /// Seed for candidate selection.
    /// Same seed and board produce the same choice.
    pub seed: u64,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            think_delay_ms: 3000,
            threads: 1,
            seed: 42,
        }
    }
}

impl AiConfig {
    /// Create a new config with a custom think delay.
    pub fn with_think_delay(mut self, delay: Duration) -> Self {
        self.think_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// No pauses; for tests and headless play.
    pub fn instant(self) -> Self {
        self.with_think_delay(Duration::ZERO)
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads.max(1);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn think_delay(&self) -> Duration {
        Duration::from_millis(self.think_delay_ms)
    }
}
