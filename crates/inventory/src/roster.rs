//! Inventory documents: the built-in sample stock and the JSON roster format.
//!
//! A roster is either a bare array of items or an object with an `items`
//! array. Item values are taken as-is.

use serde::Deserialize;

use kata_core::{DomainError, DomainResult};

use crate::item::{Item, LEGENDARY_QUALITY};
use crate::simulation::DaySnapshot;

#[derive(Deserialize)]
#[serde(untagged)]
enum RosterDocument {
    Bare(Vec<Item>),
    Wrapped { items: Vec<Item> },
}

/// The demo stock the shop opens with.
pub fn sample_inventory() -> Vec<Item> {
    vec![
        Item::new("+5 Dexterity Vest", 10, 20),
        Item::new("Aged Brie", 2, 0),
        Item::new("Elixir of the Mongoose", 5, 7),
        Item::new("Sulfuras, Hand of Ragnaros", 0, LEGENDARY_QUALITY),
        Item::new("Sulfuras, Hand of Ragnaros", -1, LEGENDARY_QUALITY),
        Item::new("Backstage passes to a TAFKAL80ETC concert", 15, 20),
        Item::new("Backstage passes to a TAFKAL80ETC concert", 10, 49),
        Item::new("Backstage passes to a TAFKAL80ETC concert", 5, 49),
        Item::new("Conjured", 3, 6),
    ]
}

pub fn from_json(input: &str) -> DomainResult<Vec<Item>> {
    let document: RosterDocument = serde_json::from_str(input).map_err(|e| {
        DomainError::decode(format!(
            "expected an array of items or an object with an `items` array: {e}"
        ))
    })?;

    Ok(match document {
        RosterDocument::Bare(items) => items,
        RosterDocument::Wrapped { items } => items,
    })
}

pub fn snapshots_to_json(history: &[DaySnapshot]) -> DomainResult<String> {
    serde_json::to_string_pretty(history).map_err(|e| DomainError::encode(e.to_string()))
}
