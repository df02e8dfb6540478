//! Plain-text reports.

use std::fmt::Write;

use kata_inventory::DaySnapshot;

const NAME: &str = "name";
const SELL_IN: &str = "sell_in";
const QUALITY: &str = "quality";

/// One titled table per day, separated by blank lines.
pub fn day_tables(history: &[DaySnapshot]) -> String {
    let width = history
        .iter()
        .flat_map(|snapshot| snapshot.items.iter())
        .map(|item| item.name.chars().count())
        .max()
        .unwrap_or(0)
        .max(NAME.len());

    let mut out = String::new();
    for (i, snapshot) in history.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        // Writing into a String cannot fail.
        let _ = writeln!(out, "Day {}:", snapshot.day);
        let _ = writeln!(out, "{NAME:<width$}  {SELL_IN:>7}  {QUALITY:>7}");
        for item in &snapshot.items {
            let _ = writeln!(
                out,
                "{:<width$}  {:>7}  {:>7}",
                item.name, item.sell_in, item.quality
            );
        }
    }
    out
}

pub fn pair(found: Option<[i64; 2]>) -> String {
    match found {
        Some([a, b]) => format!("[{a}, {b}]\n"),
        None => "none\n".to_string(),
    }
}
