//! Round state: board, target, selection buffer, used combinations, clock.
//!
//! ## Lifecycle
//!
//! ```text
//! Idle ──start──▶ Active ──expire / end──▶ Ended
//!                   ▲                        │
//!                   └─────────start──────────┘
//! ```
//!
//! Starting always regenerates the board and target. Nothing leaves `Ended`
//! except another start.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::info;

use super::countdown::{Countdown, TickResult};
use crate::core::{generate_cells, Cell, CellIndex, CombinationKey, GameConfig, RandomSource, CELL_COUNT};
use crate::target::{TargetAnalysis, TargetSelector};

/// Maximum number of buffered selections.
pub const SELECTION_SIZE: usize = 3;

/// Round lifecycle state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundState {
    /// No round has been started yet.
    #[default]
    Idle,
    /// Round in progress; selections are accepted.
    Active,
    /// Round over; the board stays visible for review.
    Ended,
}

/// What pushing a selection did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionStep {
    /// Not accepted: round not active, buffer full, bad or repeated index.
    Ignored,
    /// Accepted; the buffer now holds this many indices.
    Added(usize),
    /// Accepted as the third index; the combination is ready to check.
    Complete(CombinationKey),
}

/// A credited combination, for the used-formula log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormulaRecord {
    pub combination: CombinationKey,
    pub result: i64,
}

impl FormulaRecord {
    /// Labels of the three cells, e.g. `"BEA"`.
    #[must_use]
    pub fn labels(&self) -> String {
        self.combination.labels()
    }
}

/// A single round.
#[derive(Clone, Debug, Default)]
pub struct Round {
    state: RoundState,

    /// Board; `None` until the first start.
    cells: Option<[Cell; CELL_COUNT]>,

    /// Target analysis; `None` until the first start.
    analysis: Option<TargetAnalysis>,

    /// Indices selected so far, in order.
    selection: SmallVec<[CellIndex; SELECTION_SIZE]>,

    /// Combinations already credited this round.
    used: FxHashSet<CombinationKey>,

    /// Credited combinations in the order they were found.
    formulas: Vector<FormulaRecord>,

    countdown: Countdown,

    /// Rounds started so far (first round is 1).
    number: u32,
}

impl Round {
    /// Create an idle round.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new round.
    ///
    /// Board and target are computed before anything is replaced, so the
    /// round only becomes `Active` once both exist.
    pub fn start<R: RandomSource>(
        &mut self,
        config: &GameConfig,
        selector: &TargetSelector,
        rng: &mut R,
    ) -> &TargetAnalysis {
        self.countdown.stop();

        let cells = generate_cells(rng, config);
        let analysis = selector.analyze(&cells, rng);

        self.cells = Some(cells);
        self.selection.clear();
        self.used.clear();
        self.formulas = Vector::new();
        self.countdown.restart(config.round_seconds);
        self.number += 1;
        self.state = RoundState::Active;

        info!(
            round = self.number,
            target = analysis.target,
            seconds = config.round_seconds,
            "Round started"
        );

        self.analysis.insert(analysis)
    }

    /// Apply one elapsed second; expiry ends the round in the same call.
    pub fn tick(&mut self) -> TickResult {
        if self.state != RoundState::Active {
            return TickResult::Ignored;
        }

        let result = self.countdown.tick();
        if result == TickResult::Expired {
            self.state = RoundState::Ended;
            info!(round = self.number, credited = self.used.len(), "Round expired");
        }
        result
    }

    /// End an active round early.
    ///
    /// Returns false if the round was not active.
    pub fn end(&mut self) -> bool {
        if self.state != RoundState::Active {
            return false;
        }

        self.countdown.stop();
        self.state = RoundState::Ended;
        info!(
            round = self.number,
            remaining = self.countdown.remaining(),
            credited = self.used.len(),
            "Round ended early"
        );
        true
    }

    /// Append an index to the selection buffer.
    pub fn push_selection(&mut self, index: CellIndex) -> SelectionStep {
        if self.state != RoundState::Active
            || self.selection.len() >= SELECTION_SIZE
            || index.index() >= CELL_COUNT
            || self.selection.contains(&index)
        {
            return SelectionStep::Ignored;
        }

        self.selection.push(index);
        match CombinationKey::from_selection(&self.selection) {
            Some(key) => SelectionStep::Complete(key),
            None => SelectionStep::Added(self.selection.len()),
        }
    }

    /// Empty the selection buffer.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Has this combination already been credited?
    #[must_use]
    pub fn is_used(&self, key: &CombinationKey) -> bool {
        self.used.contains(key)
    }

    /// Credit a combination for the rest of the round.
    pub fn record_correct(&mut self, combination: CombinationKey, result: i64) {
        if self.used.insert(combination) {
            self.formulas.push_back(FormulaRecord { combination, result });
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn state(&self) -> RoundState {
        self.state
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.state == RoundState::Active
    }

    /// The board, once a round has started.
    #[must_use]
    pub fn cells(&self) -> Option<&[Cell; CELL_COUNT]> {
        self.cells.as_ref()
    }

    /// One cell of the board.
    #[must_use]
    pub fn cell(&self, index: CellIndex) -> Option<Cell> {
        self.cells.as_ref().and_then(|cells| cells.get(index.index()).copied())
    }

    #[must_use]
    pub fn target(&self) -> Option<i64> {
        self.analysis.as_ref().map(|analysis| analysis.target)
    }

    #[must_use]
    pub fn analysis(&self) -> Option<&TargetAnalysis> {
        self.analysis.as_ref()
    }

    #[must_use]
    pub fn selection(&self) -> &[CellIndex] {
        &self.selection
    }

    #[must_use]
    pub fn used_combinations(&self) -> &FxHashSet<CombinationKey> {
        &self.used
    }

    /// Credited combinations, oldest first.
    #[must_use]
    pub fn formulas(&self) -> &Vector<FormulaRecord> {
        &self.formulas
    }

    #[must_use]
    pub fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    #[must_use]
    pub fn remaining_seconds(&self) -> u32 {
        self.countdown.remaining()
    }

    #[must_use]
    pub fn number(&self) -> u32 {
        self.number
    }

    pub(crate) fn restore(
        state: RoundState,
        cells: Option<[Cell; CELL_COUNT]>,
        analysis: Option<TargetAnalysis>,
        formulas: Vector<FormulaRecord>,
        mut countdown: Countdown,
        number: u32,
    ) -> Self {
        // Only an active round counts down
        if state == RoundState::Active {
            countdown.start();
        } else {
            countdown.stop();
        }

        let used = formulas.iter().map(|record| record.combination).collect();
        Self {
            state,
            cells,
            analysis,
            selection: SmallVec::new(),
            used,
            formulas,
            countdown,
            number,
        }
    }
}
