//! Target selection.
//!
//! The selector evaluates all 10 × 10 × 10 ordered triples of a board,
//! repeated indices included, and tallies how often each positive integer
//! comes up. Values that are neither too rare nor too common make good
//! targets; the pick is random among the most frequent of those.
//!
//! ## Tiers
//!
//! - **Band**: frequency within the configured band (default `3..=50`)
//! - **Fallback**: any achievable value, when the band is empty
//! - **Default**: the configured default (10), when nothing is achievable

mod selector;

pub use selector::{TargetAnalysis, TargetSelector, TargetTier};
