//! Engine notifications for presentation adapters.
//!
//! The engine never renders, plays sounds or persists anything. It reports
//! what happened through an [`EventSink`]; adapters drain or observe the sink
//! and re-render.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::checker::Outcome;
use crate::core::{Cell, CellIndex, CELL_COUNT};

/// Why a round ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    /// The countdown reached zero.
    Expired,
    /// Ended early through [`GameEngine::end_round`](super::GameEngine::end_round).
    Stopped,
}

/// Something adapters may want to react to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum EngineEvent {
    /// A round started; re-render every cell and the target.
    RoundStarted {
        round: u32,
        cells: [Cell; CELL_COUNT],
        target: i64,
        seconds: u32,
    },

    /// The selection buffer changed; re-render selection markers.
    SelectionChanged { selection: Vec<CellIndex> },

    /// A completed selection was checked.
    Outcome(Outcome),

    /// One second elapsed in an active round.
    Tick { remaining: u32 },

    /// The round ended.
    RoundEnded { reason: EndReason, credited: usize },
}

/// Receiver of engine events.
pub trait EventSink {
    fn emit(&mut self, event: EngineEvent);
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn emit(&mut self, event: EngineEvent) {
        (**self).emit(event);
    }
}

/// Discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: EngineEvent) {}
}

/// Buffers events until an adapter drains them.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: VecDeque<EngineEvent>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Take every buffered event, oldest first.
    pub fn drain(&mut self) -> impl Iterator<Item = EngineEvent> + '_ {
        self.events.drain(..)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Buffered events without removing them.
    pub fn iter(&self) -> impl Iterator<Item = &EngineEvent> {
        self.events.iter()
    }
}

impl EventSink for EventLog {
    fn emit(&mut self, event: EngineEvent) {
        self.events.push_back(event);
    }
}
