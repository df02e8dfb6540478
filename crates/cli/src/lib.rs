//! `kata` command-line driver.
//!
//! Thin shell over the domain crates: parse flags, resolve settings, run one
//! program and hand its report back to `main` for printing.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod render;

pub use cli::{Cli, Command};
pub use error::CliError;

/// Run the selected subcommand and return what should be printed.
pub fn run(cli: &Cli, env: impl Fn(&str) -> Option<String>) -> Result<String, CliError> {
    match &cli.command {
        Command::GildedRose(args) => commands::gilded_rose(args, env),
        Command::PairSum(args) => Ok(commands::pair_sum(args)),
    }
}
