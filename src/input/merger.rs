//! Merges physical keyboard and on-screen key grid input into game keys
//!
//! Only key presses and left-button presses count. Release and repeat events
//! are dropped so one physical action maps to at most one `Key`.

use super::konami::KonamiDetector;
use crate::core::Key;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// Something that can resolve a screen cell to an on-screen key
pub trait KeyGrid {
    fn key_at(&self, column: u16, row: u16) -> Option<Key>;
}

/// Result of merging one physical key event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Merged {
    pub key: Option<Key>,
    /// The event completed the Konami code
    pub toggle_secret: bool,
}

#[derive(Debug, Default)]
pub struct InputMerger {
    konami: KonamiDetector,
}

impl InputMerger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Translate a physical key event
    pub fn physical(&mut self, event: &KeyEvent) -> Merged {
        // Only process key press events (fixes Windows double-input bug)
        if event.kind != KeyEventKind::Press {
            return Merged::default();
        }

        let toggle_secret = self.konami.push(event.code);

        let key = if event
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            None
        } else {
            match event.code {
                KeyCode::Char(c) => Key::from_char(c),
                KeyCode::Backspace => Some(Key::Backspace),
                KeyCode::Enter => Some(Key::Enter),
                _ => None,
            }
        };

        Merged { key, toggle_secret }
    }

    /// Translate a pointer event against the rendered key grid
    pub fn pointer(&self, event: &MouseEvent, grid: &impl KeyGrid) -> Option<Key> {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => grid.key_at(event.column, event.row),
            _ => None,
        }
    }
}
