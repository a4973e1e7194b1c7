//! On-screen key grid geometry
//!
//! The same layout is used to draw the keys and to resolve mouse clicks, so a
//! click always lands on the key that was drawn under it.

use crate::core::Key;
use crate::input::KeyGrid;
use ratatui::layout::Rect;

const LETTER_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];
const LETTER_WIDTH: u16 = 5;
const GAP: u16 = 1;
/// Each key row is followed by a blank spacer row
const ROW_STRIDE: u16 = 2;

/// Rows of keys including spacers; the last row needs no spacer
pub const GRID_HEIGHT: u16 = (LETTER_ROWS.len() as u16 + 1) * ROW_STRIDE - 1;

/// A key grid placed inside `area`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VirtualKeyboard {
    area: Rect,
}

impl VirtualKeyboard {
    #[must_use]
    pub const fn new(area: Rect) -> Self {
        Self { area }
    }

    /// Every key that fits inside the area, with the cells it occupies
    #[must_use]
    pub fn keys(&self) -> Vec<(Rect, Key)> {
        let mut rows: Vec<Vec<Key>> = LETTER_ROWS
            .iter()
            .map(|row| row.bytes().map(Key::Letter).collect())
            .collect();
        rows.push(vec![Key::Backspace, Key::Enter]);

        let mut placed = Vec::new();
        for (row_index, row) in rows.iter().enumerate() {
            let y = self.area.y + row_index as u16 * ROW_STRIDE;
            if y >= self.area.bottom() {
                break;
            }

            let total: u16 = row.iter().map(|&key| key_width(key)).sum::<u16>()
                + GAP * (row.len() as u16).saturating_sub(1);
            let mut x = self.area.x + self.area.width.saturating_sub(total) / 2;

            for &key in row {
                let width = key_width(key);
                if x + width <= self.area.right() {
                    placed.push((Rect::new(x, y, width, 1), key));
                }
                x += width + GAP;
            }
        }
        placed
    }
}

impl KeyGrid for VirtualKeyboard {
    fn key_at(&self, column: u16, row: u16) -> Option<Key> {
        self.keys().into_iter().find_map(|(rect, key)| {
            let inside = column >= rect.x
                && column < rect.right()
                && row >= rect.y
                && row < rect.bottom();
            inside.then_some(key)
        })
    }
}

fn key_width(key: Key) -> u16 {
    match key {
        Key::Letter(_) => LETTER_WIDTH,
        // Wide enough for the label plus padding
        Key::Backspace | Key::Enter => key.label().len() as u16 + 4,
    }
}
