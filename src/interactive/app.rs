//! TUI application state and logic

use super::keyboard::VirtualKeyboard;
use crate::core::Key;
use crate::game::{Game, GameState, KeyOutcome, Statistics};
use crate::input::InputMerger;
use crate::wordlists::{Mode, WordLists};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseEvent,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::{SeedableRng, rngs::StdRng};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io;

const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App {
    pub lists: WordLists,
    pub game: Game,
    /// Mode used by the next session; the running one keeps its own
    pub next_mode: Mode,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    merger: InputMerger,
    rng: StdRng,
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

impl App {
    #[must_use]
    pub fn new(lists: WordLists, secret: bool) -> Self {
        Self::with_rng(lists, secret, StdRng::from_os_rng())
    }

    #[must_use]
    pub fn with_rng(lists: WordLists, secret: bool, mut rng: StdRng) -> Self {
        let mode = Mode::from_secret(secret);
        let game = Game::new(lists.for_mode(mode), mode, &mut rng);

        Self {
            lists,
            game,
            next_mode: mode,
            messages: vec![Message {
                text: "Crack the six-letter system word. Type or click the keys.".to_string(),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            should_quit: false,
            merger: InputMerger::new(),
            rng,
        }
    }

    /// Handle a key event from the physical keyboard
    pub fn handle_key_event(&mut self, event: &KeyEvent) {
        if event.kind == KeyEventKind::Press {
            let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
            match event.code {
                KeyCode::Esc => {
                    self.should_quit = true;
                    return;
                }
                KeyCode::Char('c') if ctrl => {
                    self.should_quit = true;
                    return;
                }
                KeyCode::Char('r') if ctrl => {
                    self.restart();
                    return;
                }
                _ => {}
            }
        }

        let merged = self.merger.physical(event);
        if merged.toggle_secret {
            self.toggle_secret();
        }
        if let Some(key) = merged.key {
            self.apply(key);
        }
    }

    /// Handle a mouse event against the rendered key grid
    pub fn handle_mouse_event(&mut self, event: &MouseEvent, grid: &VirtualKeyboard) {
        if let Some(key) = self.merger.pointer(event, grid) {
            self.apply(key);
        }
    }

    /// Feed one key to the running session
    pub fn apply(&mut self, key: Key) {
        match self.game.apply_key(key) {
            KeyOutcome::Committed(GameState::Won) => {
                self.stats.record(&self.game);
                let text = match self.game.attempts_used() {
                    1 => "ACCESS GRANTED on the first try! 🔓",
                    2 | 3 => "ACCESS GRANTED! Clean break-in. 🔓",
                    _ => "ACCESS GRANTED! 🔓",
                };
                self.add_message(text, MessageStyle::Success);
                self.add_message("Press Ctrl+R to reboot the system.", MessageStyle::Info);
            }
            KeyOutcome::Committed(GameState::Lost) => {
                self.stats.record(&self.game);
                let text = match self.game.revealed_target() {
                    Some(target) => format!("ACCESS DENIED. The word was: {target}"),
                    None => "ACCESS DENIED.".to_string(),
                };
                self.add_message(&text, MessageStyle::Error);
                self.add_message("Press Ctrl+R to reboot the system.", MessageStyle::Info);
            }
            KeyOutcome::Committed(GameState::Playing) => {
                let remaining = self.game.attempts_remaining();
                self.add_message(
                    &format!("{remaining} attempts remaining"),
                    MessageStyle::Info,
                );
            }
            KeyOutcome::Typed(_) | KeyOutcome::Erased | KeyOutcome::Ignored => {}
        }
    }

    /// Start a new session using the pending mode
    pub fn restart(&mut self) {
        let mode = self.next_mode;
        self.game
            .restart(self.lists.for_mode(mode), mode, &mut self.rng);
        self.messages.clear();
        self.add_message("System rebooted. New word selected.", MessageStyle::Info);
    }

    fn toggle_secret(&mut self) {
        self.next_mode = self.next_mode.toggled();
        tracing::info!(mode = %self.next_mode, "Konami code entered");
        let text = if self.next_mode.is_secret() {
            "Secret mode armed. Press Ctrl+R to load the secret word list."
        } else {
            "Secret mode disarmed. Press Ctrl+R to return to the normal list."
        };
        self.add_message(text, MessageStyle::Success);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        tracing::error!(error = %err, "TUI exited with an error");
    }

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        let mut area = Rect::default();
        terminal.draw(|f| {
            area = f.area();
            super::rendering::ui(f, &app);
        })?;

        match event::read()? {
            Event::Key(key) => app.handle_key_event(&key),
            Event::Mouse(mouse) => {
                let grid = super::rendering::keyboard_grid(area);
                app.handle_mouse_event(&mouse, &grid);
            }
            _ => {}
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::MAX_ATTEMPTS;
    use crate::wordlists::WordList;
    use crossterm::event::{MouseButton, MouseEventKind};

    fn lists() -> WordLists {
        WordLists::new(
            WordList::new(Mode::Normal, vec![Word::new("DOCKER").unwrap()]).unwrap(),
            WordList::new(Mode::Secret, vec![Word::new("KONAMI").unwrap()]).unwrap(),
        )
        .unwrap()
    }

    fn app() -> App {
        App::with_rng(lists(), false, StdRng::seed_from_u64(3))
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_line(app: &mut App, word: &str) {
        for c in word.chars() {
            app.handle_key_event(&press(KeyCode::Char(c)));
        }
        app.handle_key_event(&press(KeyCode::Enter));
    }

    #[test]
    fn physical_keys_reach_the_game() {
        let mut app = app();
        app.handle_key_event(&press(KeyCode::Char('d')));
        app.handle_key_event(&press(KeyCode::Char('o')));
        assert_eq!(app.game.current_guess(), "DO");
        app.handle_key_event(&press(KeyCode::Backspace));
        assert_eq!(app.game.current_guess(), "D");
    }

    #[test]
    fn released_keys_are_not_applied_twice() {
        let mut app = app();
        app.handle_key_event(&press(KeyCode::Char('d')));
        app.handle_key_event(&KeyEvent::new_with_kind(
            KeyCode::Char('d'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
        ));
        assert_eq!(app.game.current_guess(), "D");
    }

    #[test]
    fn clicks_on_the_key_grid_reach_the_game() {
        let mut app = app();
        let grid = VirtualKeyboard::new(Rect::new(0, 0, 80, 7));
        let (rect, key) = grid
            .keys()
            .into_iter()
            .find(|(_, key)| *key == Key::Letter(b'K'))
            .unwrap();

        app.handle_mouse_event(
            &MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column: rect.x,
                row: rect.y,
                modifiers: KeyModifiers::NONE,
            },
            &grid,
        );

        assert_eq!(key, Key::Letter(b'K'));
        assert_eq!(app.game.current_guess(), "K");
    }

    #[test]
    fn winning_records_stats() {
        let mut app = app();
        type_line(&mut app, "docker");
        assert_eq!(app.game.state(), GameState::Won);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Info);
    }

    #[test]
    fn losing_reveals_word_in_messages() {
        let mut app = app();
        for _ in 0..MAX_ATTEMPTS {
            type_line(&mut app, "python");
        }
        assert_eq!(app.game.state(), GameState::Lost);
        assert_eq!(app.stats.total_games, 1);
        assert!(
            app.messages
                .iter()
                .any(|m| m.text == "ACCESS DENIED. The word was: DOCKER")
        );
    }

    #[test]
    fn ctrl_r_restarts_and_does_not_type() {
        let mut app = app();
        type_line(&mut app, "python");
        app.handle_key_event(&KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL));
        assert!(app.game.guesses().is_empty());
        assert_eq!(app.game.current_guess(), "");
    }

    #[test]
    fn escape_quits() {
        let mut app = app();
        app.handle_key_event(&press(KeyCode::Esc));
        assert!(app.should_quit);
    }

    #[test]
    fn konami_code_switches_list_on_next_restart() {
        let mut app = app();
        for code in [
            KeyCode::Up,
            KeyCode::Up,
            KeyCode::Down,
            KeyCode::Down,
            KeyCode::Left,
            KeyCode::Right,
            KeyCode::Left,
            KeyCode::Right,
            KeyCode::Char('b'),
            KeyCode::Char('a'),
        ] {
            app.handle_key_event(&press(code));
        }

        // Running session keeps its mode
        assert_eq!(app.next_mode, Mode::Secret);
        assert_eq!(app.game.mode(), Mode::Normal);

        app.restart();
        assert_eq!(app.game.mode(), Mode::Secret);
        type_line(&mut app, "konami");
        assert_eq!(app.game.state(), GameState::Won);
    }

    #[test]
    fn message_log_is_bounded() {
        let mut app = app();
        for i in 0..20 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), MAX_MESSAGES);
        assert_eq!(app.messages.last().unwrap().text, "message 19");
    }
}
