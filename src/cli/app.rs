//! Key handling and display state for the terminal adapter.

use crossterm::event::KeyCode;
use tracing::warn;

use rust_numhunt::{
    CellIndex, EndReason, EngineEvent, GameEngine, KeyValueStore, Outcome, Scoreboard,
    ScoreboardResult,
};

/// What keystrokes currently mean.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    /// Typing the name of a new team.
    NamingTeam(String),
}

pub(crate) struct App<S> {
    pub engine: GameEngine,
    pub scoreboard: Scoreboard<S>,
    pub selected_team: usize,
    pub mode: InputMode,
    pub last_outcome: Option<Outcome>,
    pub message: Option<String>,
    bell: bool,
    clock_reset: bool,
    should_quit: bool,
}

impl<S: KeyValueStore> App<S> {
    pub fn new(engine: GameEngine, scoreboard: Scoreboard<S>) -> Self {
        Self {
            engine,
            scoreboard,
            selected_team: 0,
            mode: InputMode::Normal,
            last_outcome: None,
            message: Some("Press Enter to start a round".to_string()),
            bell: false,
            clock_reset: false,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// True once after a non-correct outcome.
    pub fn take_bell(&mut self) -> bool {
        std::mem::take(&mut self.bell)
    }

    /// True once after a round started; the tick schedule restarts with it.
    pub fn take_clock_reset(&mut self) -> bool {
        std::mem::take(&mut self.clock_reset)
    }

    pub fn tick(&mut self) {
        self.engine.tick();
        self.process_events();
    }

    pub fn handle_key(&mut self, code: KeyCode) {
        if self.mode == InputMode::Normal {
            self.handle_normal_key(code);
        } else {
            self.handle_naming_key(code);
        }
        self.process_events();
    }

    fn handle_naming_key(&mut self, code: KeyCode) {
        let InputMode::NamingTeam(name) = &mut self.mode else {
            return;
        };

        match code {
            KeyCode::Enter => {
                let name = std::mem::take(name);
                self.mode = InputMode::Normal;
                let added = self.scoreboard.add_team(&name);
                if let Some(position) = self.report(added) {
                    self.selected_team = position;
                }
            }
            KeyCode::Esc => self.mode = InputMode::Normal,
            KeyCode::Backspace => {
                name.pop();
            }
            KeyCode::Char(c) => name.push(c),
            _ => {}
        }
    }

    fn handle_normal_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Enter => {
                self.engine.start_round();
            }
            KeyCode::Esc => {
                self.engine.end_round();
            }
            KeyCode::Backspace => self.engine.clear_selection(),
            KeyCode::Char('+') | KeyCode::Char('=') => {
                let result = self.scoreboard.increment(self.selected_team);
                self.report(result);
            }
            KeyCode::Char('-') => {
                let result = self.scoreboard.decrement(self.selected_team);
                self.report(result);
            }
            KeyCode::Tab => {
                if !self.scoreboard.is_empty() {
                    self.selected_team = (self.selected_team + 1) % self.scoreboard.len();
                }
            }
            KeyCode::Char('n') => self.mode = InputMode::NamingTeam(String::new()),
            KeyCode::Delete => {
                let deleted = self.scoreboard.delete_team(self.selected_team);
                if let Some(team) = self.report(deleted) {
                    self.message = Some(format!("Removed {}", team.name));
                    self.selected_team = self
                        .selected_team
                        .min(self.scoreboard.len().saturating_sub(1));
                }
            }
            KeyCode::Char(c) => {
                if let Some(index) = CellIndex::from_label(c) {
                    self.engine.select_cell(index);
                }
            }
            _ => {}
        }
    }

    fn process_events(&mut self) {
        let events: Vec<_> = self.engine.sink_mut().drain().collect();
        for event in events {
            match event {
                EngineEvent::RoundStarted { round, .. } => {
                    self.last_outcome = None;
                    self.message = Some(format!("Round {round} started"));
                    self.clock_reset = true;
                }
                EngineEvent::Outcome(outcome) => {
                    if !outcome.is_correct() {
                        self.bell = true;
                    }
                    self.last_outcome = Some(outcome);
                }
                EngineEvent::RoundEnded { reason, credited } => {
                    let why = match reason {
                        EndReason::Expired => "Time is up",
                        EndReason::Stopped => "Round ended",
                    };
                    self.message = Some(format!("{why}: {credited} formulas found"));
                }
                EngineEvent::SelectionChanged { .. } | EngineEvent::Tick { .. } => {}
            }
        }
    }

    /// Show a scoreboard failure in the status line.
    fn report<T>(&mut self, result: ScoreboardResult<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(error = %e, "Scoreboard update failed");
                self.message = Some(e.to_string());
                None
            }
        }
    }
}
