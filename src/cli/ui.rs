//! Rendering for the terminal adapter.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use rust_numhunt::{CellIndex, KeyValueStore, OutcomeStatus, RoundState, CELL_COUNT};

use super::app::{App, InputMode};

pub(crate) fn draw<S: KeyValueStore>(f: &mut Frame, app: &App<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(5), // Board
            Constraint::Length(3), // Outcome
            Constraint::Min(6),    // Formulas and teams
            Constraint::Length(3), // Footer
        ])
        .split(f.area());

    render_header(f, chunks[0], app);
    render_board(f, chunks[1], app);
    render_outcome(f, chunks[2], app);

    let lower = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[3]);

    render_formulas(f, lower[0], app);
    render_teams(f, lower[1], app);
    render_footer(f, chunks[4], app);
}

fn render_header<S>(f: &mut Frame, area: Rect, app: &App<S>) {
    let round = app.engine.round();

    let status = match round.state() {
        RoundState::Idle => "READY",
        RoundState::Active => "PLAYING",
        RoundState::Ended => "ENDED",
    };
    let target = round
        .target()
        .map_or_else(|| "--".to_string(), |t| t.to_string());

    let line = Line::from(vec![
        Span::raw(format!(" Round {} | {} | Target ", round.number(), status)),
        Span::styled(
            target,
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" | "),
        Span::styled(round.countdown().format(), clock_style(round.remaining_seconds())),
        Span::raw(" "),
    ]);

    let header = Paragraph::new(line)
        .style(Style::default().fg(Color::Cyan))
        .block(Block::default().borders(Borders::ALL).title(" numhunt "));

    f.render_widget(header, area);
}

fn clock_style(remaining: u32) -> Style {
    let color = match remaining {
        0..=10 => Color::Red,
        11..=30 => Color::Yellow,
        _ => Color::Green,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn render_board<S>(f: &mut Frame, area: Rect, app: &App<S>) {
    let round = app.engine.round();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, CELL_COUNT as u32); CELL_COUNT])
        .split(area);

    for (index, column) in CellIndex::all().zip(columns.iter()) {
        let order = round.selection().iter().position(|&i| i == index);
        let face = round
            .cell(index)
            .map_or_else(|| "?".to_string(), |cell| cell.to_string());

        let style = if order.is_some() {
            Style::default().fg(Color::Black).bg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        let title = match order {
            Some(n) => format!(" {} #{} ", index.label(), n + 1),
            None => format!(" {} ", index.label()),
        };

        let widget = Paragraph::new(vec![Line::from(""), Line::from(face)])
            .alignment(Alignment::Center)
            .style(style)
            .block(Block::default().borders(Borders::ALL).title(title));

        f.render_widget(widget, *column);
    }
}

fn render_outcome<S>(f: &mut Frame, area: Rect, app: &App<S>) {
    let line = match (&app.mode, app.last_outcome) {
        (InputMode::NamingTeam(name), _) => Line::from(format!(" New team name: {name}_")),
        (InputMode::Normal, Some(outcome)) => {
            let (verdict, color) = match outcome.status {
                OutcomeStatus::Correct => ("CORRECT", Color::Green),
                OutcomeStatus::Incorrect => ("WRONG", Color::Red),
                OutcomeStatus::AlreadyUsed => ("ALREADY USED", Color::Magenta),
            };
            Line::from(vec![
                Span::raw(format!(" {} = {}  ", outcome.combination.labels(), outcome.result)),
                Span::styled(verdict, Style::default().fg(color).add_modifier(Modifier::BOLD)),
            ])
        }
        (InputMode::Normal, None) => Line::from(format!(" {}", app.message.as_deref().unwrap_or(""))),
    };

    let widget = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
    f.render_widget(widget, area);
}

fn render_formulas<S>(f: &mut Frame, area: Rect, app: &App<S>) {
    let round = app.engine.round();
    let mut lines = Vec::new();

    for record in round.formulas() {
        lines.push(Line::from(format!(" {} = {}", record.labels(), record.result)));
    }
    if let Some(analysis) = round.analysis() {
        lines.push(Line::from(""));
        lines.push(Line::styled(
            format!(" {} / {} found", round.formulas().len(), analysis.playable_count),
            Style::default().fg(Color::Gray),
        ));
    }

    let widget = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Formulas "));

    f.render_widget(widget, area);
}

fn render_teams<S: KeyValueStore>(f: &mut Frame, area: Rect, app: &App<S>) {
    let mut lines = Vec::new();

    for (position, team) in app.scoreboard.teams().iter().enumerate() {
        let style = if position == app.selected_team {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        lines.push(Line::styled(format!(" {:<20} {:>5}", team.name, team.score), style));
    }
    if lines.is_empty() {
        lines.push(Line::styled(" No teams. Press n to add one.", Style::default().fg(Color::Gray)));
    }

    let widget = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Teams "));

    f.render_widget(widget, area);
}

fn render_footer<S>(f: &mut Frame, area: Rect, app: &App<S>) {
    let controls = match app.mode {
        InputMode::NamingTeam(_) => " [Enter] Add team  [Esc] Cancel ",
        InputMode::Normal => {
            " [Enter] Start  [A-J] Select  [Bksp] Clear  [Esc] End  [Tab] Team  [+/-] Score  [n] New  [Del] Remove  [q] Quit "
        }
    };

    let footer = Paragraph::new(controls)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(footer, area);
}
