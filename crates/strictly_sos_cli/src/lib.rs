//! Strictly SOS command-line front end
//!
//! Library half of the `sos` binary: argument parsing, TOML configuration,
//! the terminal session, replay files, and simulation batches.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod replay_store;
pub mod simulate;
pub mod terminal;

pub use cli::{Cli, Command, GameArgs};
pub use config::{ConfigError, Controller, SosConfig};
pub use replay_store::{StoreError, load, replay_file_name, save, save_at};
pub use simulate::{Tally, simulate};
pub use terminal::{Input, InputError, SessionEnd, TerminalSession, parse_input};
