//! Team list with manual score adjustment.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::error::{ScoreboardError, ScoreboardResult};
use super::store::KeyValueStore;

/// Storage key for the team list.
pub const TEAMS_KEY: &str = "numhunt.teams";

/// A team and its score.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    pub score: i64,
}

impl Team {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            score: 0,
        }
    }
}

/// Teams, persisted after every change.
///
/// Teams are addressed by position in the list. Names need not be unique.
#[derive(Debug)]
pub struct Scoreboard<S> {
    teams: Vec<Team>,
    store: S,
}

impl<S: KeyValueStore> Scoreboard<S> {
    /// Load the saved team list, or start empty if nothing was saved.
    pub fn load(store: S) -> ScoreboardResult<Self> {
        let teams: Vec<Team> = match store.get(TEAMS_KEY)? {
            Some(json) => serde_json::from_str(&json)?,
            None => Vec::new(),
        };
        info!(teams = teams.len(), "Scoreboard loaded");
        Ok(Self { teams, store })
    }

    /// Add a team with a score of zero. Returns its position.
    pub fn add_team(&mut self, name: &str) -> ScoreboardResult<usize> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ScoreboardError::EmptyName);
        }

        let mut teams = self.teams.clone();
        teams.push(Team::new(name));
        self.commit(teams)?;
        debug!(team = name, "Team added");
        Ok(self.teams.len() - 1)
    }

    /// Remove a team.
    pub fn delete_team(&mut self, position: usize) -> ScoreboardResult<Team> {
        if position >= self.teams.len() {
            return Err(ScoreboardError::UnknownTeam(position));
        }

        let mut teams = self.teams.clone();
        let team = teams.remove(position);
        self.commit(teams)?;
        debug!(team = %team.name, "Team deleted");
        Ok(team)
    }

    /// Add one point. Returns the new score.
    pub fn increment(&mut self, position: usize) -> ScoreboardResult<i64> {
        self.adjust(position, 1)
    }

    /// Take one point away. Scores may go negative. Returns the new score.
    pub fn decrement(&mut self, position: usize) -> ScoreboardResult<i64> {
        self.adjust(position, -1)
    }

    #[must_use]
    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    #[must_use]
    pub fn get(&self, position: usize) -> Option<&Team> {
        self.teams.get(position)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.teams.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    fn adjust(&mut self, position: usize, delta: i64) -> ScoreboardResult<i64> {
        let mut teams = self.teams.clone();
        let team = teams
            .get_mut(position)
            .ok_or(ScoreboardError::UnknownTeam(position))?;
        team.score += delta;
        let score = team.score;

        self.commit(teams)?;
        Ok(score)
    }

    /// Save `teams`, then make them current. A failed save changes nothing.
    fn commit(&mut self, teams: Vec<Team>) -> ScoreboardResult<()> {
        let json = serde_json::to_string(&teams)?;
        self.store.set(TEAMS_KEY, &json)?;
        self.teams = teams;
        Ok(())
    }
}
