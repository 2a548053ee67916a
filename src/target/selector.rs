//! Frequency-banded target selection.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Cell, GameConfig, RandomSource};
use crate::eval::{evaluate, Value};

/// Which rule produced the target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetTier {
    /// Picked among the most frequent values inside the frequency band.
    Band,
    /// No value fell inside the band; picked among every achievable value.
    Fallback,
    /// Nothing was achievable; the configured default was used.
    Default,
}

/// Everything the selector learned about a board.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TargetAnalysis {
    /// The chosen target (always positive).
    pub target: i64,

    /// Rule that produced the target.
    pub tier: TargetTier,

    /// Values the target was drawn from, most frequent first.
    pub candidates: Vec<i64>,

    /// Positive integer result → number of ordered triples producing it.
    pub frequencies: FxHashMap<i64, u32>,

    /// How many distinct-index triples hit the target.
    ///
    /// The frequency scan counts triples with repeated indices, which players
    /// cannot select; zero here means the target is unreachable in play.
    pub playable_count: u32,
}

impl TargetAnalysis {
    /// Can players reach the target with three distinct cells?
    #[must_use]
    pub fn is_playable(&self) -> bool {
        self.playable_count > 0
    }
}

/// Picks a target number for a board.
#[derive(Clone, Debug)]
pub struct TargetSelector {
    min_frequency: u32,
    max_frequency: u32,
    candidate_pool: usize,
    default_target: i64,
}

impl Default for TargetSelector {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}

impl TargetSelector {
    /// Create a selector tuned by the game configuration.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self {
            min_frequency: config.min_frequency,
            max_frequency: config.max_frequency,
            candidate_pool: config.candidate_pool,
            default_target: config.default_target,
        }
    }

    /// Count positive integer results over every ordered triple of cells,
    /// repeated indices included.
    #[must_use]
    pub fn tally(cells: &[Cell]) -> FxHashMap<i64, u32> {
        let mut frequencies = FxHashMap::default();

        for &a in cells {
            for &b in cells {
                for &c in cells {
                    if let Ok(Value::Integer(n)) = evaluate(a, b, c) {
                        if n > 0 {
                            *frequencies.entry(n).or_insert(0) += 1;
                        }
                    }
                }
            }
        }

        frequencies
    }

    /// Count distinct-index triples that evaluate to `target`.
    #[must_use]
    pub fn playable_count(cells: &[Cell], target: i64) -> u32 {
        let mut count = 0;

        for (i, &a) in cells.iter().enumerate() {
            for (j, &b) in cells.iter().enumerate() {
                if j == i {
                    continue;
                }
                for (k, &c) in cells.iter().enumerate() {
                    if k == i || k == j {
                        continue;
                    }
                    if evaluate(a, b, c) == Ok(Value::Integer(target)) {
                        count += 1;
                    }
                }
            }
        }

        count
    }

    /// Pick a target from a frequency table.
    ///
    /// Values inside the frequency band are ranked by descending frequency
    /// (ties by ascending value) and the top `candidate_pool` form the pool.
    /// An empty band falls back to every achievable value; an empty table
    /// yields the default target.
    pub fn select_from_frequencies<R: RandomSource>(
        &self,
        frequencies: &FxHashMap<i64, u32>,
        rng: &mut R,
    ) -> (i64, TargetTier, Vec<i64>) {
        let band = self.min_frequency..=self.max_frequency;

        let mut in_band: Vec<(i64, u32)> = frequencies
            .iter()
            .filter(|&(_, &count)| band.contains(&count))
            .map(|(&value, &count)| (value, count))
            .collect();
        in_band.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

        let pool: Vec<i64> = in_band
            .into_iter()
            .take(self.candidate_pool)
            .map(|(value, _)| value)
            .collect();
        if let Some(&target) = rng.choose(&pool) {
            return (target, TargetTier::Band, pool);
        }

        let mut achievable: Vec<i64> = frequencies.keys().copied().collect();
        achievable.sort_unstable();
        if let Some(&target) = rng.choose(&achievable) {
            return (target, TargetTier::Fallback, achievable);
        }

        (self.default_target, TargetTier::Default, Vec::new())
    }

    /// Analyze a board and pick its target.
    pub fn analyze<R: RandomSource>(&self, cells: &[Cell], rng: &mut R) -> TargetAnalysis {
        let frequencies = Self::tally(cells);
        let (target, tier, candidates) = self.select_from_frequencies(&frequencies, rng);
        let playable_count = Self::playable_count(cells, target);

        debug!(
            target,
            ?tier,
            distinct = frequencies.len(),
            candidates = candidates.len(),
            playable_count,
            "Target selected"
        );

        TargetAnalysis {
            target,
            tier,
            candidates,
            frequencies,
            playable_count,
        }
    }

    /// Pick a target for a board.
    pub fn select<R: RandomSource>(&self, cells: &[Cell], rng: &mut R) -> i64 {
        self.analyze(cells, rng).target
    }
}
