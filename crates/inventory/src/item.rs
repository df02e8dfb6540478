use serde::{Deserialize, Serialize};

use crate::kind::ItemKind;

/// Lowest quality an ordinary item can age down to.
pub const MIN_QUALITY: i32 = 0;

/// Highest quality an ordinary item can age up to.
pub const MAX_QUALITY: i32 = 50;

/// Fixed quality carried by legendary items. Never clamped.
pub const LEGENDARY_QUALITY: i32 = 80;

/// A stock item on the shelf.
///
/// `name` selects the aging rule and is never changed by the engine;
/// `sell_in` and `quality` are mutated once per simulated day.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    #[serde(alias = "sellIn")]
    pub sell_in: i32,
    pub quality: i32,
}

impl Item {
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        Self {
            name: name.into(),
            sell_in,
            quality,
        }
    }

    /// Variant tag selected by this item's name.
    pub fn kind(&self) -> ItemKind {
        ItemKind::for_name(&self.name)
    }

    /// Whether the sell-by date has already passed (before today's aging).
    pub fn is_expired(&self) -> bool {
        self.sell_in < 0
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_lists_name_sell_in_and_quality() {
        let item = Item::new("+5 Dexterity Vest", 10, 20);
        assert_eq!(item.to_string(), "+5 Dexterity Vest, 10, 20");
    }

    #[test]
    fn kind_follows_the_name() {
        assert_eq!(Item::new("Aged Brie", 2, 0).kind(), ItemKind::Aged);
        assert_eq!(Item::new("aged brie", 2, 0).kind(), ItemKind::Ordinary);
    }

    #[test]
    fn deserializes_camel_case_sell_in() {
        let item: Item =
            serde_json::from_str(r#"{"name":"Conjured","sellIn":3,"quality":6}"#).unwrap();
        assert_eq!(item, Item::new("Conjured", 3, 6));
    }

    #[test]
    fn serializes_snake_case_fields() {
        let json = serde_json::to_value(Item::new("Aged Brie", 2, 0)).unwrap();
        assert_eq!(json["sell_in"], 2);
        assert_eq!(json["quality"], 0);
    }
}
