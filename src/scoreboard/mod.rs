//! Manual team scoreboard.
//!
//! Independent of rounds: scores change only through explicit add, delete,
//! increment and decrement calls. The team list is saved to a
//! [`KeyValueStore`] under [`TEAMS_KEY`] after every change and reloaded on
//! startup.

mod error;
mod store;
mod teams;

pub use error::{ScoreboardError, ScoreboardResult};
pub use store::{FileStore, KeyValueStore, MemoryStore};
pub use teams::{Scoreboard, Team, TEAMS_KEY};
