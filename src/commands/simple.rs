//! Simple interactive CLI mode
//!
//! Line-based game without the TUI. Each line is one complete guess.

use crate::core::{Key, Word};
use crate::game::{Game, GameState, KeyOutcome, MAX_ATTEMPTS, Statistics};
use crate::output::{print_board, print_outcome};
use crate::wordlists::{Mode, WordLists};
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, Write};

/// What a line of input did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    Quit,
    NewGame,
    ToggleMode,
    Rejected(String),
    Played(GameState),
}

/// Interpret one line of input against the current session
///
/// Guesses are validated as whole words before any key reaches the engine,
/// so a long line is never truncated into a different guess.
pub fn play_line(game: &mut Game, line: &str) -> LineOutcome {
    let input = line.trim();

    match input.to_ascii_lowercase().as_str() {
        "quit" | "q" | "exit" => return LineOutcome::Quit,
        "new" | "n" | "restart" => return LineOutcome::NewGame,
        "mode" => return LineOutcome::ToggleMode,
        _ => {}
    }

    if game.state().is_over() {
        return LineOutcome::Rejected("Game over. Type 'new' to play again.".to_string());
    }

    if let Err(e) = Word::new(input) {
        return LineOutcome::Rejected(e.to_string());
    }

    for key in input.chars().filter_map(Key::from_char) {
        game.apply_key(key);
    }

    match game.apply_key(Key::Enter) {
        KeyOutcome::Committed(state) => LineOutcome::Played(state),
        _ => LineOutcome::Rejected("Guess was not accepted".to_string()),
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(lists: &WordLists, secret: bool) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════╗");
    println!("║              CODE BREAKER - Simple Mode              ║");
    println!("╚══════════════════════════════════════════════════════╝\n");

    println!("Guess the secret six-letter word in {MAX_ATTEMPTS} attempts.");
    println!("  - {} letter in the right place", " G ".on_green());
    println!("  - {} letter elsewhere in the word", " Y ".on_yellow());
    println!("  - {} letter not in the word\n", " - ".on_black());
    println!("Commands: 'quit' to exit, 'new' for a new game, 'mode' to switch word list\n");

    let mut rng = rand::rng();
    let mut mode = Mode::from_secret(secret);
    let mut game = Game::new(lists.for_mode(mode), mode, &mut rng);
    let mut stats = Statistics::default();

    loop {
        let prompt = format!(
            "Attempt {}/{MAX_ATTEMPTS}",
            (game.attempts_used() + 1).min(MAX_ATTEMPTS)
        );
        let Some(line) = get_user_input(&prompt)? else {
            break;
        };

        match play_line(&mut game, &line) {
            LineOutcome::Quit => break,
            LineOutcome::NewGame => {
                game.restart(lists.for_mode(mode), mode, &mut rng);
                println!("\n🔄 New game started!\n");
            }
            LineOutcome::ToggleMode => {
                mode = mode.toggled();
                println!("Word list for the next game: {mode}\n");
            }
            LineOutcome::Rejected(reason) => println!("❌ {reason}\n"),
            LineOutcome::Played(state) => {
                print_board(&game);
                if state.is_over() {
                    stats.record(&game);
                    print_outcome(&game);
                    println!(
                        "Games: {} | Win rate: {:.0}%",
                        stats.total_games,
                        stats.win_rate()
                    );
                    println!("Type 'new' to play again or 'quit' to exit.\n");
                } else {
                    println!();
                }
            }
        }
    }

    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

/// Get user input with a prompt; `None` on end of input
fn get_user_input(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .context("failed to read from stdin")?;

    Ok((read > 0).then(|| input.trim().to_string()))
}
