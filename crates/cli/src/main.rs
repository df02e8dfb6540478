use clap::Parser;

use kata_cli::{Cli, config};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_format = config::log_format(cli.log_format, config::process_env)?;
    kata_observability::init(log_format, cli.log_filter());

    let report = kata_cli::run(&cli, config::process_env)?;
    print!("{report}");
    Ok(())
}
