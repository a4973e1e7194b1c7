//! Interactive TUI interface
//!
//! ratatui front end with a clickable on-screen key grid.

mod app;
mod keyboard;
mod rendering;
mod theme;

pub use app::{App, Message, MessageStyle, run_tui};
pub use keyboard::VirtualKeyboard;
pub use theme::Theme;
