//! Engine controller and its external interface.
//!
//! [`GameEngine`] is the single owner of game state. Presentation, sound and
//! input layers hold one and call:
//!
//! - `start_round()`: new board and target; re-render everything
//! - `select_cell(index)`: accumulate a selection; the third one is checked
//! - `clear_selection()`: drop the buffer without checking
//! - `tick()`: once per real-time second while a round is active
//! - `end_round()`: stop an active round early
//!
//! Results flow back through an [`EventSink`].

mod controller;
mod events;
mod snapshot;

pub use controller::GameEngine;
pub use events::{EndReason, EngineEvent, EventLog, EventSink, NullSink};
pub use snapshot::{RoundSnapshot, SnapshotError};
