//! Command-line front end.
//!
//! `play` runs a game in the terminal, reading one intent per line.
//! `event` handles a single platform request from stdin and prints the
//! response, the same way a hosted skill handler would.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mindreader::{GameConfig, GameConfigBuilder, GameEngine, Intent, SessionAdapter};
use std::io::{self, BufRead, Read, Write};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "mindreader", version, about = "Guess the number you are thinking of")]
struct Cli {
    /// JSON file with the number range, e.g. {"low": 1, "high": 100}
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Play in the terminal (answers: yes, no, higher, lower, correct, help, stop)
    Play {
        /// Smallest number you may pick
        #[arg(long)]
        low: Option<i64>,

        /// Largest number you may pick
        #[arg(long)]
        high: Option<i64>,
    },

    /// Handle one platform request (JSON on stdin, response on stdout)
    Event,
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref())?;

    match cli.command {
        Command::Play { low, high } => {
            let config = GameConfigBuilder::new()
                .low(low.unwrap_or(config.low))
                .high(high.unwrap_or(config.high))
                .build()?;
            play(&GameEngine::new(config), io::stdin().lock(), &mut io::stdout())
        }
        Command::Event => event(&SessionAdapter::new(GameEngine::new(config))),
    }
}

fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("mindreader=info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(env_filter)
        .init();
}

fn load_config(path: Option<&PathBuf>) -> Result<GameConfig> {
    let Some(path) = path else {
        return Ok(GameConfig::from_env()?);
    };

    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config = GameConfig::from_json(&json)
        .with_context(|| format!("Invalid config {}", path.display()))?;

    tracing::debug!(path = %path.display(), ?config, "Loaded config");
    Ok(config)
}

/// Run one game, reading an intent per line from `input`.
fn play<R: BufRead, W: Write>(engine: &GameEngine, input: R, output: &mut W) -> Result<()> {
    let mut turn = engine.start();
    writeln!(output, "{}", turn.reply.speech)?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        turn = engine.dispatch(&turn.state, Intent::from_name(line.trim()));
        if !turn.reply.speech.is_empty() {
            writeln!(output, "{}", turn.reply.speech)?;
        }
        if turn.is_terminal() {
            break;
        }
    }

    Ok(())
}

fn event(adapter: &SessionAdapter) -> Result<()> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("Failed to read request from stdin")?;

    writeln!(io::stdout(), "{}", respond(adapter, &input)?)?;
    Ok(())
}

/// Handle one JSON request and render the response document.
fn respond(adapter: &SessionAdapter, request: &str) -> Result<String> {
    let response = adapter.handle_json(request)?;
    Ok(serde_json::to_string_pretty(&response)?)
}
