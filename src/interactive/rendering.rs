//! TUI rendering with ratatui
//!
//! Board, palette and status panels for the Mastermind interface.

use super::app::{App, MessageStyle};
use crate::core::{Code, ColorId, Feedback, GameStatus, Palette};
use crate::output::formatters::parse_hex;
use rand::Rng;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui<R: Rng>(f: &mut Frame, app: &App<R>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Current row
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Board
            Constraint::Percentage(40), // Palette and messages
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_current_row(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 MASTERMIND")
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

/// Terminal color for a palette entry
fn peg_color(palette: &Palette, id: ColorId) -> Color {
    palette
        .get(id)
        .and_then(|color| parse_hex(color.hex()))
        .map_or(Color::Gray, |(r, g, b)| Color::Rgb(r, g, b))
}

fn code_spans(palette: &Palette, code: &Code) -> Vec<Span<'static>> {
    code.colors()
        .iter()
        .map(|&id| Span::styled("● ", Style::default().fg(peg_color(palette, id))))
        .collect()
}

fn feedback_span(feedback: Feedback, length: usize) -> Span<'static> {
    Span::styled(
        feedback.to_pegs(length),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )
}

fn render_board<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let state = app.session.state();
    let config = state.config();
    let palette = config.palette();

    let mut lines: Vec<Line> = state
        .history()
        .iter()
        .enumerate()
        .map(|(i, attempt)| {
            let mut spans = vec![Span::styled(
                format!("{:>2}  ", i + 1),
                Style::default().fg(Color::DarkGray),
            )];
            spans.extend(code_spans(palette, attempt.guess()));
            spans.push(Span::raw("  "));
            spans.push(feedback_span(attempt.feedback(), config.length()));
            Line::from(spans)
        })
        .collect();

    for i in state.history().len()..config.max_attempts() {
        lines.push(Line::from(Span::styled(
            format!("{:>2}  {}", i + 1, "· ".repeat(config.length())),
            Style::default().fg(Color::DarkGray),
        )));
    }

    lines.push(Line::from(""));
    let mut secret = vec![Span::raw("Secret: ")];
    if app.show_secret {
        secret.extend(code_spans(palette, state.reveal_secret()));
    } else {
        secret.push(Span::styled(
            "? ".repeat(config.length()),
            Style::default().fg(Color::DarkGray),
        ));
    }
    lines.push(Line::from(secret));

    let title = match state.status() {
        GameStatus::InProgress => " Board ",
        GameStatus::Won => " Board - WON ",
        GameStatus::Lost => " Board - LOST ",
    };

    let board = Paragraph::new(lines).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_info_panel<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(6),    // Palette
            Constraint::Length(3), // Attempts gauge
            Constraint::Min(5),    // Messages
        ])
        .split(area);

    render_palette(f, app, chunks[0]);
    render_attempts(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_palette<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let palette = app.session.config().palette();

    let lines: Vec<Line> = palette
        .ids()
        .filter_map(|id| palette.get(id).map(|color| (id, color)))
        .map(|(id, color)| {
            let number = if id.index() < 9 {
                format!("{} ", id.index() + 1)
            } else {
                "  ".to_string()
            };
            Line::from(vec![
                Span::styled(number, Style::default().fg(Color::DarkGray)),
                Span::styled("● ", Style::default().fg(peg_color(palette, id))),
                Span::styled(
                    format!("{:<3}", color.key()),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(color.label().to_string()),
            ])
        })
        .collect();

    let legend = Paragraph::new(lines).block(
        Block::default()
            .title(" Colors ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(legend, area);
}

fn render_attempts<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let state = app.session.state();
    let max = state.config().max_attempts();
    let used = state.history().len();
    let percent = (used * 100 / max).min(100) as u16;

    let gauge = Gauge::default()
        .block(Block::default().title(" Attempts ").borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{used}/{max} used"));

    f.render_widget(gauge, area);
}

fn render_messages<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_current_row<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let palette = app.session.config().palette();

    let spans: Vec<Span> = app
        .slots
        .iter()
        .enumerate()
        .flat_map(|(i, slot)| {
            let (symbol, color) = match slot {
                Some(id) => ("●", peg_color(palette, *id)),
                None => ("○", Color::DarkGray),
            };
            let mut style = Style::default().fg(color);
            if i == app.cursor && !app.is_over() {
                style = style.add_modifier(Modifier::REVERSED);
            }
            [Span::styled(symbol, style), Span::raw(" ")]
        })
        .collect();

    let (title, color) = if app.is_over() {
        (" Game over | n: New Game ", Color::Green)
    } else {
        (" Your Guess | Enter: Submit ", Color::Yellow)
    };

    let row = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(color)),
    );
    f.render_widget(row, area);
}

fn render_status<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(area);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[0]);

    let help_text = if app.is_over() {
        "q: Quit | n: New Game | s: Hide/Show Code"
    } else {
        "←/→: Slot | ↑/↓ or 1-9: Color | ⌫: Clear | s: Show Code | n: New | q: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}
