//! Command-line interface.
use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use kata_observability::LogFormat;

use crate::config::MAX_DAYS;

#[derive(Parser, Debug)]
#[command(
    name = "kata",
    version,
    about = "Gilded Rose inventory aging and pair-sum lookup"
)]
pub struct Cli {
    /// Log output format: text or json (env: KATA_LOG_FORMAT)
    #[arg(long, global = true)]
    pub log_format: Option<LogFormat>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Age an inventory day by day and print every day's stock
    GildedRose(GildedRoseArgs),
    /// Find the first pair of numbers summing to a target
    PairSum(PairSumArgs),
}

#[derive(Args, Debug)]
pub struct GildedRoseArgs {
    /// Number of days to simulate, at most 3650 (env: KATA_DAYS, default 5)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(0..=i64::from(MAX_DAYS)))]
    pub days: Option<u32>,

    /// JSON roster to load instead of the sample stock (env: KATA_INVENTORY)
    #[arg(short, long)]
    pub inventory: Option<PathBuf>,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Table)]
    pub format: ReportFormat,
}

#[derive(Args, Debug)]
pub struct PairSumArgs {
    /// Sum to look for
    #[arg(short, long, allow_negative_numbers = true, default_value_t = 50)]
    pub target: i64,

    /// Numbers to scan, in order (defaults to 10 15 25 35 40)
    #[arg(allow_negative_numbers = true)]
    pub numbers: Vec<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Table,
    Json,
}

impl Cli {
    /// Default log filter for the requested verbosity. `RUST_LOG` overrides it.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
