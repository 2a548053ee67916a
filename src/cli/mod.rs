//! Terminal adapter: event loop, logging setup.
//!
//! Everything runs on one thread. `crossterm::event::poll` waits for input
//! at most until the next second boundary, and each elapsed second becomes
//! exactly one `GameEngine::tick` call.

mod app;
mod ui;

use std::fs::File;
use std::io::{self, stdout, Stdout, Write};
use std::path::Path;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Context, Result};
use crossterm::{
    cursor,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use rust_numhunt::{GameEngine, KeyValueStore, Scoreboard};

use app::App;

const SECOND: Duration = Duration::from_secs(1);

/// Send `tracing` output to a file; the terminal belongs to the UI.
pub(crate) fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .try_init()
        .map_err(|e| anyhow!("failed to install logger: {e}"))
}

/// Raw mode and the alternate screen, undone on drop.
///
/// Created before any other terminal setup, so every later failure and
/// every early return still restores the terminal.
struct TerminalGuard {
    leave: fn(),
}

impl TerminalGuard {
    fn enter() -> Result<Self> {
        Self::enter_with(enable_raw_mode, || execute!(stdout(), EnterAlternateScreen), leave_terminal)
    }

    fn enter_with(
        raw_mode: impl FnOnce() -> io::Result<()>,
        alternate_screen: impl FnOnce() -> io::Result<()>,
        leave: fn(),
    ) -> Result<Self> {
        raw_mode().context("failed to enable raw mode")?;
        let guard = Self { leave };
        alternate_screen().context("failed to enter alternate screen")?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        (self.leave)();
    }
}

fn leave_terminal() {
    // Best effort
    let _ = disable_raw_mode();
    let _ = execute!(stdout(), LeaveAlternateScreen, cursor::Show);
}

/// Run the game until the player quits.
pub(crate) fn run<S: KeyValueStore>(engine: GameEngine, scoreboard: Scoreboard<S>) -> Result<()> {
    let _guard = TerminalGuard::enter()?;
    let mut terminal =
        Terminal::new(CrosstermBackend::new(stdout())).context("failed to create terminal")?;

    let mut app = App::new(engine, scoreboard);
    event_loop(&mut terminal, &mut app)
}

fn event_loop<S: KeyValueStore>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App<S>,
) -> Result<()> {
    let mut next_tick = Instant::now() + SECOND;

    while !app.should_quit() {
        terminal.draw(|f| ui::draw(f, &*app))?;

        if app.take_bell() {
            let backend = terminal.backend_mut();
            backend.write_all(b"\x07")?;
            backend.flush()?;
        }

        // Handle input until the next second boundary
        let timeout = next_tick.saturating_duration_since(Instant::now());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key.code);
                }
            }
        }

        if app.take_clock_reset() {
            next_tick = Instant::now() + SECOND;
        } else if Instant::now() >= next_tick {
            app.tick();
            next_tick += SECOND;
        }
    }

    Ok(())
}
