//! Code Breaker - CLI
//!
//! Six-letter word-guessing puzzle with TUI and line-based modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use code_breaker::{
    commands::{check_guess, run_simple},
    config::{self, Overrides, Settings},
    interactive::{App, run_tui},
    output::print_feedback,
    wordlists::WordLists,
};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "code_breaker",
    about = "Crack the six-letter system word in six attempts",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Draw targets from the secret word list
    #[arg(long, global = true)]
    secret: bool,

    /// Replace the built-in word list with a file (one word per line)
    #[arg(short = 'w', long, global = true)]
    words: Option<String>,

    /// Replace the built-in secret word list with a file
    #[arg(long, global = true)]
    secret_words: Option<String>,

    /// Write logs to this file
    #[arg(long, global = true)]
    log_file: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (one guess per line, no TUI)
    Simple,

    /// Evaluate a guess against a target word
    Check {
        /// The guessed word
        guess: String,

        /// The target word
        target: String,
    },

    /// Show or update the stored configuration
    Config {
        /// Store whether sessions start in secret mode
        #[arg(long)]
        secret_mode: Option<bool>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let stored = config::load_config();
    let settings = Settings::resolve(
        stored.clone(),
        Overrides {
            secret: cli.secret,
            word_list: cli.words,
            secret_word_list: cli.secret_words,
            log_level: cli.log_level,
            log_file: cli.log_file,
        },
    );

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    init_logging(&settings, matches!(command, Commands::Play))?;

    match command {
        Commands::Play => {
            let lists = load_word_lists(&settings)?;
            run_tui(App::new(lists, settings.secret_mode))
        }
        Commands::Simple => {
            let lists = load_word_lists(&settings)?;
            run_simple(&lists, settings.secret_mode)
        }
        Commands::Check { guess, target } => {
            let result = check_guess(&guess, &target)?;
            print_feedback(&result.guess, &result.target, &result.feedback);
            Ok(())
        }
        Commands::Config { secret_mode } => run_config_command(stored, secret_mode),
    }
}

fn load_word_lists(settings: &Settings) -> Result<WordLists> {
    let lists = WordLists::load(
        settings.word_list.as_deref(),
        settings.secret_word_list.as_deref(),
    )?;
    Ok(lists)
}

/// Install the tracing subscriber
///
/// The TUI owns the terminal, so it only logs when a log file is configured.
/// Line-based commands fall back to stderr.
fn init_logging(settings: &Settings, owns_terminal: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_level));

    if let Some(path) = &settings.log_file {
        let file = open_log_file(path)?;
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
            .with(filter)
            .init();
    } else if !owns_terminal {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr))
            .with(filter)
            .init();
    }

    Ok(())
}

fn open_log_file(path: &Path) -> Result<std::fs::File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))
}

fn run_config_command(mut stored: config::AppConfig, secret_mode: Option<bool>) -> Result<()> {
    if let Some(secret_mode) = secret_mode {
        stored.secret_mode = secret_mode;
        config::save_config(&stored).context("failed to save configuration")?;
        tracing::info!(secret_mode, "Stored configuration updated");
    }

    let path = config::config_path().context("failed to locate configuration file")?;
    println!("Configuration file: {}", path.display());
    println!("  secret_mode:      {}", stored.secret_mode);
    println!(
        "  word_list:        {}",
        stored.word_list.as_deref().unwrap_or("(built-in)")
    );
    println!(
        "  secret_word_list: {}",
        stored.secret_word_list.as_deref().unwrap_or("(built-in)")
    );
    println!("  log_level:        {}", stored.log_level);
    println!(
        "  log_file:         {}",
        stored.log_file.as_deref().unwrap_or("(none)")
    );
    Ok(())
}
