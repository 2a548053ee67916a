//! Round countdown.
//!
//! The countdown does not own a timer. Whoever drives the event loop calls
//! [`Countdown::tick`] once per elapsed second; a tick is exactly one
//! decrement, so two ticks can never collapse into one or double up.

use serde::{Deserialize, Serialize};

/// What a single tick did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickResult {
    /// The countdown is stopped; nothing changed.
    Ignored,
    /// One second elapsed; this many remain.
    Running(u32),
    /// The countdown reached zero on this tick and stopped.
    Expired,
}

/// Seconds remaining in a round.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Countdown {
    remaining: u32,
    running: bool,
}

impl Countdown {
    /// Create a stopped countdown.
    #[must_use]
    pub const fn new(seconds: u32) -> Self {
        Self {
            remaining: seconds,
            running: false,
        }
    }

    /// Seconds remaining.
    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.remaining
    }

    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Reset to `seconds` and start.
    pub fn restart(&mut self, seconds: u32) {
        self.remaining = seconds;
        self.running = true;
    }

    /// Apply one elapsed second.
    ///
    /// Reaching zero stops the countdown in the same call.
    pub fn tick(&mut self) -> TickResult {
        if !self.running {
            return TickResult::Ignored;
        }

        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.running = false;
            TickResult::Expired
        } else {
            TickResult::Running(self.remaining)
        }
    }

    /// Remaining time as `MM:SS`.
    #[must_use]
    pub fn format(&self) -> String {
        format_clock(self.remaining)
    }
}

/// Format seconds as `MM:SS`.
#[must_use]
pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
