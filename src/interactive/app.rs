//! TUI application state and logic

use crate::core::{ColorId, GameError, GameStatus, InputError};
use crate::game::{GameSession, Statistics};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::Rng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<R: Rng> {
    pub session: GameSession<R>,
    pub slots: Vec<Option<ColorId>>,
    pub cursor: usize,
    pub show_secret: bool,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<R: Rng> App<R> {
    #[must_use]
    pub fn new(session: GameSession<R>) -> Self {
        let length = session.config().length();

        Self {
            session,
            slots: vec![None; length],
            cursor: 0,
            show_secret: false,
            messages: vec![Message {
                text: "Welcome! Pick colors with ←/→ and ↑/↓ or number keys, Enter submits."
                    .to_string(),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.session.status().is_over()
    }

    pub fn move_cursor_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor + 1 < self.slots.len() {
            self.cursor += 1;
        }
    }

    /// Step the color in the cursor slot forward or backward through the palette
    pub fn cycle_color(&mut self, forward: bool) {
        let count = self.session.config().palette().len();
        let next = match self.slots[self.cursor] {
            None if forward => 0,
            None => count - 1,
            Some(id) if forward => (id.index() + 1) % count,
            Some(id) => (id.index() + count - 1) % count,
        };
        self.slots[self.cursor] = Some(ColorId::new(next as u8));
    }

    /// Put palette color `index` in the cursor slot and advance
    pub fn pick_color(&mut self, index: usize) {
        if index >= self.session.config().palette().len() {
            return;
        }
        self.slots[self.cursor] = Some(ColorId::new(index as u8));
        self.move_cursor_right();
    }

    pub fn clear_slot(&mut self) {
        if self.slots[self.cursor].is_none() {
            self.move_cursor_left();
        }
        self.slots[self.cursor] = None;
    }

    fn reset_row(&mut self) {
        self.slots = vec![None; self.session.config().length()];
        self.cursor = 0;
    }

    pub fn submit(&mut self) {
        match self.session.submit_slots(&self.slots) {
            Ok(attempt) => {
                self.reset_row();
                let state = self.session.state();
                let feedback = attempt.feedback();

                match state.status() {
                    GameStatus::Won => {
                        let used = state.history().len();
                        self.stats.record(state);
                        self.show_secret = true;
                        self.add_message(
                            &format!("🎉 Code cracked in {used} attempts! Press 'n' for a new game."),
                            MessageStyle::Success,
                        );
                    }
                    GameStatus::Lost => {
                        self.stats.record(state);
                        self.show_secret = true;
                        self.add_message(
                            "❌ Out of attempts. Press 'n' for a new game.",
                            MessageStyle::Error,
                        );
                    }
                    GameStatus::InProgress => {
                        let remaining = state.attempts_remaining();
                        self.add_message(
                            &format!("{feedback} - {remaining} attempts left"),
                            MessageStyle::Info,
                        );
                    }
                }
            }
            Err(GameError::InvalidInput(InputError::UnsetSlot(position))) => {
                self.cursor = position;
                self.add_message(
                    &format!("Slot {} is empty!", position + 1),
                    MessageStyle::Error,
                );
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn new_game(&mut self) {
        match self.session.restart() {
            Ok(_) => {
                self.reset_row();
                self.show_secret = false;
                self.messages.clear();
                self.add_message("New game started!", MessageStyle::Info);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn toggle_secret(&mut self) {
        self.show_secret = !self.show_secret;
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    ///
    /// While a game is in progress a palette key picks its color, even when it
    /// shadows one of the `q`, `n` or `s` commands. Esc and Ctrl-C always quit.
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        if let KeyCode::Char(c) = code
            && !modifiers.contains(KeyModifiers::CONTROL)
            && !self.is_over()
            && let Some(id) = self.session.config().palette().id_of(&c.to_string())
        {
            self.pick_color(id.index());
            return;
        }

        match code {
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('n') => self.new_game(),
            KeyCode::Char('s') => self.toggle_secret(),
            _ if self.is_over() => {
                // Only the commands above apply once the game has ended
            }
            KeyCode::Left => self.move_cursor_left(),
            KeyCode::Right => self.move_cursor_right(),
            KeyCode::Up => self.cycle_color(true),
            KeyCode::Down => self.cycle_color(false),
            KeyCode::Backspace | KeyCode::Delete => self.clear_slot(),
            KeyCode::Enter => self.submit(),
            KeyCode::Char(c @ '1'..='9') => {
                self.pick_color(c as usize - '1' as usize);
            }
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<R: Rng>(app: App<R>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    match res {
        Ok(app) => {
            crate::output::print_statistics(&app.stats);
            println!();
        }
        Err(err) => eprintln!("Error: {err}"),
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, R: Rng>(
    terminal: &mut Terminal<B>,
    mut app: App<R>,
) -> Result<App<R>> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key.code, key.modifiers);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app)
}
