//! Display functions for command results

use super::formatters::{attempts_bar, colored_row, share_line};
use crate::core::{Feedback, Word};
use crate::game::{Game, GameState, MAX_ATTEMPTS};
use colored::Colorize;

/// Print the committed rows of a session followed by the attempts bar
pub fn print_board(game: &Game) {
    println!();
    for record in game.guesses() {
        println!("  {}", colored_row(&record.word, &record.feedback));
    }
    println!(
        "\n  Attempts: [{}] {}/{}",
        attempts_bar(game.attempts_used(), MAX_ATTEMPTS).cyan(),
        game.attempts_used(),
        MAX_ATTEMPTS
    );
}

/// Print the end-of-session banner; nothing while still playing
pub fn print_outcome(game: &Game) {
    let accent = |text: &str| {
        if game.mode().is_secret() {
            text.bright_magenta()
        } else {
            text.bright_green()
        }
    };

    match (game.state(), game.revealed_target()) {
        (GameState::Won, _) => {
            println!("\n{}", "═".repeat(50).cyan());
            println!("  {}", accent("ACCESS GRANTED! 🔓").bold());
            println!("{}", "═".repeat(50).cyan());
        }
        (GameState::Lost, Some(target)) => {
            println!("\n{}", "═".repeat(50).cyan());
            println!(
                "  {} {}",
                "ACCESS DENIED. The word was:".red().bold(),
                target.text().bright_yellow().bold()
            );
            println!("{}", "═".repeat(50).cyan());
        }
        _ => return,
    }

    println!();
    for (i, record) in game.guesses().iter().enumerate() {
        println!("  {}", share_line(i + 1, record));
    }
    println!();
}

/// Print the evaluation of a single guess against a target
pub fn print_feedback(guess: &Word, target: &Word, feedback: &Feedback) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Guess {} against {}",
        guess.text().bright_white().bold(),
        target.text().bright_yellow().bold()
    );
    println!("{}", "─".repeat(40).cyan());
    println!("\n  {}", colored_row(guess, feedback));
    println!("  {}", feedback.to_emoji());
    println!(
        "\n  Correct: {}  Present: {}",
        feedback.count_correct().to_string().green(),
        feedback.count_present().to_string().yellow()
    );
}
