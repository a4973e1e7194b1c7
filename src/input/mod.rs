//! Input handling
//!
//! Both the physical keyboard and the on-screen key grid feed the same
//! `Game::apply_key` entry point through `InputMerger`.

mod konami;
mod merger;

pub use konami::KonamiDetector;
pub use merger::{InputMerger, KeyGrid, Merged};
