//! Game configuration.
//!
//! Everything that shapes a round lives here: the number range of cells,
//! the round length, and the target-selection heuristic's tuning. The
//! defaults reproduce the standard game.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// Largest magnitude [`GameConfig::with_number_range`] accepts.
pub const NUMBER_LIMIT: i64 = 1_000_000;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Smallest number a cell may hold.
    pub min_number: i64,

    /// Largest number a cell may hold.
    pub max_number: i64,

    /// Round length in seconds.
    pub round_seconds: u32,

    /// Fewest combinations that must produce a value for it to be a good target.
    pub min_frequency: u32,

    /// Most combinations that may produce a value for it to be a good target.
    pub max_frequency: u32,

    /// How many of the most frequent in-band values are kept as candidates.
    pub candidate_pool: usize,

    /// Target used when no combination produces a positive integer.
    pub default_target: i64,

    /// Seed for the engine's RNG.
    /// Same seed produces the same boards and targets.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            min_number: 1,
            max_number: 11,
            round_seconds: 180,
            min_frequency: 3,
            max_frequency: 50,
            candidate_pool: 10,
            default_target: 10,
            seed: 42,
        }
    }
}

impl GameConfig {
    /// Set the round length.
    #[must_use]
    pub fn with_round_seconds(mut self, seconds: u32) -> Self {
        self.round_seconds = seconds;
        self
    }

    /// Set the seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the cell number range.
    #[must_use]
    pub fn with_number_range(mut self, range: RangeInclusive<i64>) -> Self {
        assert!(!range.is_empty(), "Number range must not be empty");
        assert!(
            *range.start() >= -NUMBER_LIMIT && *range.end() <= NUMBER_LIMIT,
            "Number range must lie within ±{NUMBER_LIMIT}"
        );
        self.min_number = *range.start();
        self.max_number = *range.end();
        self
    }

    /// Set the frequency band for good targets.
    #[must_use]
    pub fn with_frequency_band(mut self, band: RangeInclusive<u32>) -> Self {
        self.min_frequency = *band.start();
        self.max_frequency = *band.end();
        self
    }

    /// Set the candidate pool size.
    #[must_use]
    pub fn with_candidate_pool(mut self, size: usize) -> Self {
        self.candidate_pool = size;
        self
    }

    /// Set the default target.
    #[must_use]
    pub fn with_default_target(mut self, target: i64) -> Self {
        assert!(target > 0, "Default target must be positive");
        self.default_target = target;
        self
    }

    /// Frequency band as a range.
    #[must_use]
    pub fn frequency_band(&self) -> RangeInclusive<u32> {
        self.min_frequency..=self.max_frequency
    }
}
