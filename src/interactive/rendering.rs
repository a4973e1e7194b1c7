//! TUI rendering with ratatui
//!
//! Board, status banner and on-screen key grid for the puzzle.

use super::app::{App, MessageStyle};
use super::keyboard::{GRID_HEIGHT, VirtualKeyboard};
use super::theme::Theme;
use crate::core::{Key, LetterStatus, WORD_LENGTH};
use crate::game::{GameState, MAX_ATTEMPTS};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Screen regions, computed the same way for drawing and hit-testing
struct Areas {
    header: Rect,
    board: Rect,
    status: Rect,
    keyboard: Rect,
    messages: Rect,
    footer: Rect,
}

fn layout(area: Rect) -> Areas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                       // Header
            Constraint::Length(MAX_ATTEMPTS as u16 + 2), // Board
            Constraint::Length(3),                       // Status / banner
            Constraint::Length(GRID_HEIGHT + 2),         // Key grid
            Constraint::Min(3),                          // Messages
            Constraint::Length(1),                       // Footer
        ])
        .split(area);

    Areas {
        header: chunks[0],
        board: chunks[1],
        status: chunks[2],
        keyboard: chunks[3],
        messages: chunks[4],
        footer: chunks[5],
    }
}

fn keyboard_block(theme: &Theme) -> Block<'static> {
    Block::default()
        .title(" Keyboard ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(theme.accent))
}

/// Key grid as laid out for a frame of size `area`
#[must_use]
pub fn keyboard_grid(area: Rect) -> VirtualKeyboard {
    let areas = layout(area);
    let inner = Block::default().borders(Borders::ALL).inner(areas.keyboard);
    VirtualKeyboard::new(inner)
}

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let theme = Theme::for_mode(app.game.mode());
    let areas = layout(f.area());

    render_header(f, &theme, areas.header);
    render_board(f, app, &theme, areas.board);
    render_status(f, app, &theme, areas.status);
    render_keyboard(f, app, &theme, areas.keyboard);
    render_messages(f, app, &theme, areas.messages);
    render_footer(f, app, &theme, areas.footer);
}

fn render_header(f: &mut Frame, theme: &Theme, area: Rect) {
    let header = Paragraph::new("CODE BREAKER - Crack the system word")
        .style(
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(theme.accent)),
        );
    f.render_widget(header, area);
}

fn tile(letter: char, fg: Color, bg: Option<Color>) -> Span<'static> {
    let style = Style::default().fg(fg).add_modifier(Modifier::BOLD);
    let style = match bg {
        Some(bg) => style.bg(bg),
        None => style,
    };
    Span::styled(format!(" {letter} "), style)
}

fn render_board(f: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let game = &app.game;
    let mut lines: Vec<Line> = Vec::with_capacity(MAX_ATTEMPTS);

    for record in game.guesses() {
        let spans = record
            .word
            .letters()
            .iter()
            .zip(record.feedback.statuses())
            .flat_map(|(&letter, &status)| {
                [
                    tile(char::from(letter), theme.text, Some(theme.status_bg(status))),
                    Span::raw(" "),
                ]
            })
            .collect::<Vec<_>>();
        lines.push(Line::from(spans));
    }

    if game.state() == GameState::Playing {
        let typed: Vec<char> = game.current_guess().chars().collect();
        let spans = (0..WORD_LENGTH)
            .flat_map(|i| {
                let cell = match typed.get(i) {
                    Some(&c) => tile(c, theme.accent, None),
                    None => tile('_', theme.empty_fg, None),
                };
                [cell, Span::raw(" ")]
            })
            .collect::<Vec<_>>();
        lines.push(Line::from(spans));
    }

    while lines.len() < MAX_ATTEMPTS {
        let spans = (0..WORD_LENGTH)
            .flat_map(|_| [tile('·', theme.empty_fg, None), Span::raw(" ")])
            .collect::<Vec<_>>();
        lines.push(Line::from(spans));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_status(f: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let game = &app.game;
    match (game.state(), game.revealed_target()) {
        (GameState::Won, _) => {
            let banner = Paragraph::new("ACCESS GRANTED! 🔓  Ctrl+R to reboot")
                .style(
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD),
                )
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL));
            f.render_widget(banner, area);
        }
        (GameState::Lost, Some(target)) => {
            let banner = Paragraph::new(format!(
                "ACCESS DENIED. The word was: {target}  Ctrl+R to reboot"
            ))
            .style(
                Style::default()
                    .fg(theme.error)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
            f.render_widget(banner, area);
        }
        _ => {
            let used = game.attempts_used();
            let gauge = Gauge::default()
                .block(Block::default().borders(Borders::ALL))
                .gauge_style(Style::default().fg(theme.accent))
                .ratio(used as f64 / MAX_ATTEMPTS as f64)
                .label(format!(
                    "Attempt {}/{MAX_ATTEMPTS} | {} remaining",
                    used + 1,
                    game.attempts_remaining()
                ));
            f.render_widget(gauge, area);
        }
    }
}

fn render_keyboard(f: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let block = keyboard_block(theme);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let hints = app.game.letter_hints();
    for (rect, key) in VirtualKeyboard::new(inner).keys() {
        let bg = match key {
            Key::Letter(letter) => hints
                .get(&letter)
                .map_or(theme.key_bg, |&status| theme.status_bg(status)),
            Key::Enter => theme.correct_bg,
            Key::Backspace => theme.key_bg,
        };
        let fg = match key {
            Key::Letter(letter) if hints.get(&letter) == Some(&LetterStatus::Absent) => {
                theme.muted
            }
            _ => theme.text,
        };

        let label = Paragraph::new(key.label())
            .alignment(Alignment::Center)
            .style(Style::default().fg(fg).bg(bg).add_modifier(Modifier::BOLD));
        f.render_widget(label, rect);
    }
}

fn render_messages(f: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(theme.text),
                MessageStyle::Success => Style::default().fg(theme.accent),
                MessageStyle::Error => Style::default().fg(theme.error),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_footer(f: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}% | Mode: {}",
        app.stats.total_games,
        app.stats.win_rate(),
        app.game.mode()
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[0],
    );

    let help = Paragraph::new("Esc: Close | Ctrl+R: Restart | Enter: Submit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(theme.muted));
    f.render_widget(help, chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::wordlists::{Mode, WordList, WordLists};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use rand::{SeedableRng, rngs::StdRng};
    use ratatui::{Terminal, backend::TestBackend};

    fn app() -> App {
        let lists = WordLists::new(
            WordList::new(Mode::Normal, vec![Word::new("DOCKER").unwrap()]).unwrap(),
            WordList::new(Mode::Secret, vec![Word::new("KONAMI").unwrap()]).unwrap(),
        )
        .unwrap();
        App::with_rng(lists, false, StdRng::seed_from_u64(9))
    }

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(90, 34)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn submit(app: &mut App, word: &str) {
        for c in word.chars() {
            app.handle_key_event(&KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
        app.handle_key_event(&KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
    }

    #[test]
    fn renders_header_and_keys() {
        let text = screen(&app());
        assert!(text.contains("CODE BREAKER"));
        assert!(text.contains("ENTER"));
        assert!(text.contains("DEL"));
        assert!(text.contains("Attempt 1/6"));
    }

    #[test]
    fn renders_loss_banner_with_target() {
        let mut app = app();
        for _ in 0..MAX_ATTEMPTS {
            submit(&mut app, "python");
        }
        assert!(screen(&app).contains("The word was: DOCKER"));
    }

    #[test]
    fn renders_win_banner() {
        let mut app = app();
        submit(&mut app, "docker");
        assert!(screen(&app).contains("ACCESS GRANTED"));
    }

    #[test]
    fn keyboard_grid_matches_drawn_keys() {
        let area = Rect::new(0, 0, 90, 34);
        let grid = keyboard_grid(area);
        let keyboard = layout(area).keyboard;
        for (rect, _) in grid.keys() {
            assert!(rect.x > keyboard.x && rect.right() < keyboard.right());
            assert!(rect.y > keyboard.y && rect.bottom() < keyboard.bottom());
        }
    }
}
