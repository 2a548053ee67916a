//! Round state machine.
//!
//! A [`Round`] owns everything that lives for one timed play session: the
//! ten cells, the target, the selection buffer, the set of combinations
//! already credited, and the countdown.

mod countdown;
mod state;

pub use countdown::{format_clock, Countdown, TickResult};
pub use state::{FormulaRecord, Round, RoundState, SelectionStep, SELECTION_SIZE};
