//! Command-line interface for the `sos` binary.

use crate::config::Controller;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use strictly_sos::Variant;

/// Strictly SOS - play SOS in the terminal
#[derive(Parser, Debug)]
#[command(name = "sos")]
#[command(about = "Play, replay, and simulate games of SOS", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game in the terminal
    Play {
        /// Game options (override the config file)
        #[command(flatten)]
        game: GameArgs,
    },

    /// Replay a recorded game
    Replay {
        /// Replay file written by `sos play --record`
        file: PathBuf,
    },

    /// Play computer-vs-computer games and report the tally
    Simulate {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "100")]
        games: usize,

        /// Rule variant (simple or general)
        #[arg(long)]
        variant: Option<Variant>,

        /// Board side length
        #[arg(long)]
        size: Option<usize>,

        /// Seed for the first game; each later game adds one
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Options shared by commands that create a game.
#[derive(Args, Debug, Clone, Default)]
pub struct GameArgs {
    /// Rule variant (simple or general)
    #[arg(long)]
    pub variant: Option<Variant>,

    /// Board side length (3 to 20)
    #[arg(long)]
    pub size: Option<usize>,

    /// Blue seat controller
    #[arg(long, value_enum)]
    pub blue: Option<Controller>,

    /// Red seat controller
    #[arg(long, value_enum)]
    pub red: Option<Controller>,

    /// Seed for automated seats
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write a replay file when the game ends
    #[arg(long)]
    pub record: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_flags_parse() {
        let cli = Cli::parse_from([
            "sos", "play", "--variant", "general", "--size", "5", "--red", "computer",
        ]);
        let Command::Play { game } = cli.command else {
            panic!("expected play");
        };
        assert_eq!(game.variant, Some(Variant::General));
        assert_eq!(game.size, Some(5));
        assert_eq!(game.red, Some(Controller::Computer));
        assert_eq!(game.blue, None);
    }

    #[test]
    fn test_simulate_defaults() {
        let cli = Cli::parse_from(["sos", "simulate"]);
        assert!(matches!(cli.command, Command::Simulate { games: 100, .. }));
    }

    #[test]
    fn test_config_is_global() {
        let cli = Cli::parse_from(["sos", "replay", "game.replay", "--config", "sos.toml"]);
        assert_eq!(cli.config, Some(PathBuf::from("sos.toml")));
    }
}
