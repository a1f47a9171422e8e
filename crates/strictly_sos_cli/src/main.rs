//! Strictly SOS - terminal game
//!
//! Play against a friend or the computer, replay recorded games, or run
//! computer-vs-computer batches.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;
use strictly_sos::{Game, MoveSelector, Recorder};
use strictly_sos_cli::terminal::{announce, describe, render};
use strictly_sos_cli::{Cli, Command, GameArgs, SessionEnd, SosConfig, TerminalSession};
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,strictly_sos=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Play { game } => run_play(config, &game),
        Command::Replay { file } => run_replay(&file),
        Command::Simulate {
            games,
            variant,
            size,
            seed,
        } => {
            let variant = variant.unwrap_or(*config.variant());
            let size = size.unwrap_or(*config.board_size());
            let seed = seed.or(*config.seed());
            let tally = strictly_sos_cli::simulate(variant, size, games, seed);
            println!("{}", tally);
            Ok(())
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<SosConfig> {
    match path {
        Some(path) => SosConfig::from_file(path)
            .with_context(|| format!("loading {}", path.display())),
        None => Ok(SosConfig::default()),
    }
}

/// Play an interactive game
#[instrument(skip_all)]
fn run_play(config: SosConfig, args: &GameArgs) -> Result<()> {
    let config = config.with_overrides(args);
    let settings = config.settings();
    let selector = match config.seed() {
        Some(seed) => MoveSelector::seeded(*seed),
        None => MoveSelector::from_entropy(),
    };

    let mut game = Game::with_selector(settings, selector);
    let recorder = Recorder::new();
    if *config.record() {
        recorder.attach(&mut game);
    }

    let mut session = TerminalSession::new(game);
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    let end = session.run(stdin.lock(), &mut stdout)?;

    let mut game = session.into_game();
    if *config.record() {
        match end {
            SessionEnd::Finished(_) => {
                let record = recorder.finish(game.settings());
                let path = strictly_sos_cli::save(config.replay_dir(), &record)
                    .context("saving replay")?;
                println!("Replay saved to {}", path.display());
            }
            SessionEnd::Quit => warn!("Game abandoned, replay not saved"),
        }
    }
    game.dispose();
    Ok(())
}

/// Replay a recorded game
#[instrument(skip(file), fields(file = %file.display()))]
fn run_replay(file: &Path) -> Result<()> {
    let record = strictly_sos_cli::load(file)?;
    info!(turns = record.len(), "Replaying");

    let game = record.replay_with(|index, _| println!("{}", describe(&record.turns()[index])))?;

    println!("{}", render(&game));
    if let Some(outcome) = game.outcome() {
        println!("{}", announce(outcome, &game));
    } else {
        println!("Recording ends before the game was decided");
    }
    Ok(())
}
