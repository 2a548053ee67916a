//! # rust-numhunt
//!
//! Engine for a timed arithmetic target game played on a shared display.
//!
//! Ten labeled cells (A–J) each hold an operator and a number. Players pick
//! three cells in order to form `a opB b opC c` and try to hit the round's
//! target number before the countdown runs out.
//!
//! ## Design Principles
//!
//! 1. **Explicit State**: One [`GameEngine`] owns the round, RNG and event
//!    sink. No globals.
//!
//! 2. **Presentation-Agnostic**: The engine is synchronous and never renders.
//!    Adapters call its methods and react to [`EngineEvent`]s.
//!
//! 3. **Deterministic**: All randomness flows through an injectable
//!    [`RandomSource`], so boards and targets are reproducible from a seed.
//!
//! ## Modules
//!
//! - `core`: Cells, operators, combination keys, configuration, RNG
//! - `eval`: Precedence-aware evaluation of three-cell expressions
//! - `target`: Frequency-banded target selection
//! - `round`: Round state machine, selection buffer, countdown
//! - `checker`: Verdicts on completed selections
//! - `engine`: The controller adapters talk to
//! - `scoreboard`: Manual team scores with durable storage

pub mod core;
pub mod eval;
pub mod target;
pub mod round;
pub mod checker;
pub mod engine;
pub mod scoreboard;

// Re-export commonly used types
pub use crate::core::{
    Cell, CellIndex, Operator, CELL_COUNT,
    CombinationKey, GameConfig,
    GameRng, GameRngState, RandomSource,
};

pub use crate::eval::{evaluate, EvalError, Value};

pub use crate::target::{TargetAnalysis, TargetSelector, TargetTier};

pub use crate::round::{Countdown, FormulaRecord, Round, RoundState, TickResult};

pub use crate::checker::{Outcome, OutcomeStatus, OutcomeValue};

pub use crate::engine::{
    EndReason, EngineEvent, EventLog, EventSink, GameEngine, NullSink, RoundSnapshot,
    SnapshotError,
};

pub use crate::scoreboard::{
    FileStore, KeyValueStore, MemoryStore,
    Scoreboard, ScoreboardError, ScoreboardResult, Team,
};
