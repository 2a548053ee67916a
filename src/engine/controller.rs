//! The game engine: one explicit object owning the round, RNG and event sink.

use tracing::{debug, info};

use super::events::{EndReason, EngineEvent, EventLog, EventSink};
use super::snapshot::{RoundSnapshot, SnapshotError};
use crate::checker::{self, Outcome};
use crate::core::{CellIndex, GameConfig, GameRng, RandomSource};
use crate::round::{Round, RoundState, SelectionStep, TickResult};
use crate::target::TargetSelector;

/// Game engine.
///
/// Every operation takes `&mut self` and runs to completion, so operations
/// never interleave. Adapters translate clicks, key presses and timer
/// callbacks into these calls, then react to the emitted events.
///
/// ## Example
///
/// ```
/// use rust_numhunt::core::{CellIndex, GameConfig};
/// use rust_numhunt::engine::GameEngine;
/// use rust_numhunt::round::RoundState;
///
/// let mut engine = GameEngine::new(GameConfig::default().with_seed(7));
/// engine.start_round();
/// assert_eq!(engine.state(), RoundState::Active);
///
/// engine.select_cell(CellIndex(0));
/// engine.select_cell(CellIndex(1));
/// let outcome = engine.select_cell(CellIndex(2));
/// assert!(outcome.is_some());
/// assert!(engine.round().selection().is_empty());
/// ```
pub struct GameEngine<R = GameRng, S = EventLog> {
    config: GameConfig,
    selector: TargetSelector,
    round: Round,
    rng: R,
    sink: S,
}

impl GameEngine {
    /// Create an engine seeded from the configuration, buffering events.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let rng = GameRng::new(config.seed);
        Self::with_parts(config, rng, EventLog::new())
    }
}

impl<R: RandomSource, S: EventSink> GameEngine<R, S> {
    /// Create an engine from an explicit random source and event sink.
    pub fn with_parts(config: GameConfig, rng: R, sink: S) -> Self {
        Self {
            selector: TargetSelector::new(&config),
            config,
            round: Round::new(),
            rng,
            sink,
        }
    }

    /// Start a round: new board, new target, empty selection and history,
    /// full countdown. Returns the target.
    ///
    /// Works from `Idle`, `Ended`, and also restarts an `Active` round.
    /// The full target analysis is available from [`Round::analysis`].
    pub fn start_round(&mut self) -> i64 {
        let target = self
            .round
            .start(&self.config, &self.selector, &mut self.rng)
            .target;

        if let Some(cells) = self.round.cells().copied() {
            self.sink.emit(EngineEvent::RoundStarted {
                round: self.round.number(),
                cells,
                target,
                seconds: self.round.remaining_seconds(),
            });
        }
        self.emit_selection();

        target
    }

    /// Select a cell.
    ///
    /// Ignored unless the round is active, fewer than three cells are
    /// selected, and the cell is not selected already. The third selection
    /// is checked immediately; its outcome is reported, then the buffer is
    /// cleared.
    pub fn select_cell(&mut self, index: CellIndex) -> Option<Outcome> {
        match self.round.push_selection(index) {
            SelectionStep::Ignored => {
                debug!(cell = %index, state = ?self.round.state(), "Selection ignored");
                None
            }
            SelectionStep::Added(_) => {
                self.emit_selection();
                None
            }
            SelectionStep::Complete(combination) => {
                self.emit_selection();
                let outcome = checker::submit(&mut self.round, combination.indices());
                if let Some(outcome) = outcome {
                    self.sink.emit(EngineEvent::Outcome(outcome));
                }
                self.round.clear_selection();
                self.emit_selection();
                outcome
            }
        }
    }

    /// Empty the selection without checking it.
    pub fn clear_selection(&mut self) {
        self.round.clear_selection();
        self.emit_selection();
    }

    /// Apply one elapsed second.
    ///
    /// Call once per real-time second. Ignored unless the round is active;
    /// the tick that reaches zero also ends the round.
    pub fn tick(&mut self) -> TickResult {
        let result = self.round.tick();
        match result {
            TickResult::Ignored => {}
            TickResult::Running(remaining) => {
                self.sink.emit(EngineEvent::Tick { remaining });
            }
            TickResult::Expired => {
                self.sink.emit(EngineEvent::Tick { remaining: 0 });
                self.sink.emit(EngineEvent::RoundEnded {
                    reason: EndReason::Expired,
                    credited: self.round.used_combinations().len(),
                });
            }
        }
        result
    }

    /// End the active round before the countdown runs out.
    ///
    /// Returns false if no round was active.
    pub fn end_round(&mut self) -> bool {
        if !self.round.end() {
            return false;
        }
        self.sink.emit(EngineEvent::RoundEnded {
            reason: EndReason::Stopped,
            credited: self.round.used_combinations().len(),
        });
        true
    }

    /// Capture the current round.
    #[must_use]
    pub fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot::capture(&self.round)
    }

    /// Replace the current round with a captured one.
    ///
    /// An invalid snapshot leaves the current round untouched.
    pub fn restore(&mut self, snapshot: RoundSnapshot) -> Result<(), SnapshotError> {
        self.round = snapshot.into_round()?;
        info!(round = self.round.number(), state = ?self.round.state(), "Round restored");
        self.emit_selection();
        Ok(())
    }

    // === Accessors ===

    #[must_use]
    pub fn round(&self) -> &Round {
        &self.round
    }

    #[must_use]
    pub fn state(&self) -> RoundState {
        self.round.state()
    }

    #[must_use]
    pub fn remaining_seconds(&self) -> u32 {
        self.round.remaining_seconds()
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn rng(&self) -> &R {
        &self.rng
    }

    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    fn emit_selection(&mut self) {
        self.sink.emit(EngineEvent::SelectionChanged {
            selection: self.round.selection().to_vec(),
        });
    }
}
