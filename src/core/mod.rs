//! Core types: cells, operators, combination keys, configuration, RNG.
//!
//! Every other module builds on these. None of them know about rounds,
//! timers or presentation.

pub mod cell;
pub mod combination;
pub mod config;
pub mod rng;

pub use cell::{generate_cells, Cell, CellIndex, Operator, CELL_COUNT};
pub use combination::CombinationKey;
pub use config::{GameConfig, NUMBER_LIMIT};
pub use rng::{GameRng, GameRngState, RandomSource};
