//! TUI rendering with ratatui
//!
//! Layout: header, transcript and scoreboard side by side, input line, status bar.

use super::app::{App, MessageStyle};
use crate::core::Phase;
use crate::game::{MAIN_WIN_TIER, format_points};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(65), // Transcript
            Constraint::Percentage(35), // Scoreboard
        ])
        .split(chunks[1]);

    render_transcript(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔤 WORD SCRAMBLE")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_transcript(f: &mut Frame, app: &App, area: Rect) {
    // Show the tail that fits inside the borders
    let visible = area.height.saturating_sub(2) as usize;
    let skip = app.transcript.len().saturating_sub(visible);

    let items: Vec<ListItem> = app
        .transcript
        .iter()
        .skip(skip)
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Game ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(list, area);
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Current scramble
            Constraint::Length(6), // Score
            Constraint::Min(3),    // Tier progress
        ])
        .split(area);

    render_scramble(f, app, chunks[0]);
    render_scoreboard(f, app, chunks[1]);
    render_tier_progress(f, app, chunks[2]);
}

fn render_scramble(f: &mut Frame, app: &App, area: Rect) {
    let content = app.scramble.as_ref().map_or_else(
        || Line::from("-"),
        |scramble| {
            // Space the letters out so they read as tiles
            let spaced: Vec<String> = scramble
                .chars()
                .map(|c| c.to_ascii_uppercase().to_string())
                .collect();
            Line::from(Span::styled(
                spaced.join(" "),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ))
        },
    );

    let paragraph = Paragraph::new(vec![Line::from(""), content])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Scramble ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(paragraph, area);
}

fn render_scoreboard(f: &mut Frame, app: &App, area: Rect) {
    let content = vec![
        Line::from(vec![
            Span::raw("Score:  "),
            Span::styled(
                format_points(app.stats.score),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(format!("Round:  {}", app.round_label())),
        Line::from(format!("Phase:  {}", app.stats.phase)),
        Line::from(format!("Games:  {}", app.stats.games_finished)),
    ];

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Scoreboard ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_tier_progress(f: &mut Frame, app: &App, area: Rect) {
    let (title, percent, label) = match app.stats.phase {
        Phase::BonusRound => (
            " Bonus Tier ",
            (app.stats.tier * 50).min(100) as u16,
            format!("{} letter words", app.stats.tier + 6),
        ),
        _ => {
            let tier = app.stats.tier.min(MAIN_WIN_TIER);
            let label = if tier == MAIN_WIN_TIER {
                "All tiers cleared".to_string()
            } else {
                format!("{} letter words", tier + 3)
            };
            (
                " Main Tier ",
                (tier * 100 / MAIN_WIN_TIER) as u16,
                label,
            )
        }
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(label);
    f.render_widget(gauge, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, color) = match app.prompt.as_deref() {
        Some("") => (" Your choice ".to_string(), Color::Yellow),
        Some(prompt) => (format!(" {prompt} "), Color::Yellow),
        None => (" ... ".to_string(), Color::DarkGray),
    };

    let input = Paragraph::new(app.input_buffer.as_str())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );
    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let help_text = if app.stats.phase == Phase::Done {
        "Enter: Submit | Esc: Quit | yes: play again"
    } else {
        "Enter: Submit | Backspace: Delete | Esc / Ctrl-C: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}
