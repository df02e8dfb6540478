use kata_inventory::{GildedRose, Item, roster};
use kata_pairs::find_pair_summing_to;

use crate::cli::{GildedRoseArgs, PairSumArgs, ReportFormat};
use crate::config;
use crate::error::CliError;
use crate::render;

/// Numbers scanned by `pair-sum` when none are given.
pub const DEMO_NUMBERS: [i64; 5] = [10, 15, 25, 35, 40];

pub fn gilded_rose(
    args: &GildedRoseArgs,
    env: impl Fn(&str) -> Option<String>,
) -> Result<String, CliError> {
    let days = config::days(args.days, &env);
    let items = load_items(config::inventory_path(args.inventory.clone(), &env))?;

    tracing::info!(days, items = items.len(), "starting simulation");
    let history = GildedRose::new(items).run(days);

    match args.format {
        ReportFormat::Table => Ok(render::day_tables(&history)),
        ReportFormat::Json => {
            let mut json = roster::snapshots_to_json(&history)?;
            json.push('\n');
            Ok(json)
        }
    }
}

fn load_items(path: Option<std::path::PathBuf>) -> Result<Vec<Item>, CliError> {
    let Some(path) = path else {
        tracing::debug!("no roster given; using the sample inventory");
        return Ok(roster::sample_inventory());
    };

    let raw = std::fs::read_to_string(&path).map_err(|source| CliError::Io {
        path: path.clone(),
        source,
    })?;
    let items = roster::from_json(&raw)?;
    tracing::debug!(path = %path.display(), items = items.len(), "loaded roster");
    Ok(items)
}

pub fn pair_sum(args: &PairSumArgs) -> String {
    let numbers: &[i64] = if args.numbers.is_empty() {
        &DEMO_NUMBERS
    } else {
        &args.numbers
    };

    let found = find_pair_summing_to(numbers, args.target);
    tracing::info!(target = args.target, numbers = numbers.len(), found = ?found, "pair-sum lookup");
    render::pair(found)
}
