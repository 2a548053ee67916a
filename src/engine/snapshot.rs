//! Round checkpoints.
//!
//! A snapshot captures everything needed to redisplay or resume a round.
//! The selection buffer is not captured; a restored round starts with an
//! empty selection.

use serde::{Deserialize, Serialize};

use crate::core::{Cell, CELL_COUNT};
use crate::round::{Countdown, FormulaRecord, Round, RoundState};
use crate::target::TargetAnalysis;

/// Why a snapshot cannot be restored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SnapshotError {
    /// A round past `Idle` has no board or no target.
    MissingBoard(RoundState),
}

impl std::fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SnapshotError::MissingBoard(state) => {
                write!(f, "{state:?} round snapshot has no board or target")
            }
        }
    }
}

impl std::error::Error for SnapshotError {}

/// Serializable copy of a round.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundSnapshot {
    pub number: u32,
    pub state: RoundState,
    pub cells: Option<[Cell; CELL_COUNT]>,
    pub analysis: Option<TargetAnalysis>,
    pub countdown: Countdown,
    /// Credited combinations, oldest first.
    pub formulas: Vec<FormulaRecord>,
}

impl RoundSnapshot {
    /// Capture a round.
    #[must_use]
    pub fn capture(round: &Round) -> Self {
        Self {
            number: round.number(),
            state: round.state(),
            cells: round.cells().copied(),
            analysis: round.analysis().cloned(),
            countdown: round.countdown().clone(),
            formulas: round.formulas().iter().cloned().collect(),
        }
    }

    /// Rebuild the round.
    ///
    /// An active or ended snapshot must carry its board and target. The
    /// countdown runs exactly when the restored round is active, whatever
    /// the captured flag said.
    pub fn into_round(self) -> Result<Round, SnapshotError> {
        let has_board = self.cells.is_some() && self.analysis.is_some();
        if self.state != RoundState::Idle && !has_board {
            return Err(SnapshotError::MissingBoard(self.state));
        }

        Ok(Round::restore(
            self.state,
            self.cells,
            self.analysis,
            self.formulas.into_iter().collect(),
            self.countdown,
            self.number,
        ))
    }

    /// Encode with bincode.
    pub fn to_bytes(&self) -> bincode::Result<Vec<u8>> {
        bincode::serialize(self)
    }

    /// Decode from bincode.
    pub fn from_bytes(bytes: &[u8]) -> bincode::Result<Self> {
        bincode::deserialize(bytes)
    }
}
