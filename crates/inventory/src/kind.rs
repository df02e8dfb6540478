use serde::Serialize;

/// Closed set of aging behaviours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    /// Loses quality every day, twice as fast once expired.
    Ordinary,
    /// Gains quality every day, twice as fast once expired.
    Aged,
    /// Gains quality on a staircase as the event nears, worthless afterwards.
    EventPass,
    /// Never ages.
    Legendary,
    /// Loses quality twice as fast as an ordinary item.
    Conjured,
}

const REGISTRY: &[(&str, ItemKind)] = &[
    ("Aged Brie", ItemKind::Aged),
    ("Backstage passes to a TAFKAL80ETC concert", ItemKind::EventPass),
    ("Sulfuras, Hand of Ragnaros", ItemKind::Legendary),
    ("Conjured", ItemKind::Conjured),
];

/// Exact item names with a dedicated rule. Anything else is ordinary.
pub fn registry() -> &'static [(&'static str, ItemKind)] {
    REGISTRY
}

impl ItemKind {
    /// Resolve the rule for an item name.
    ///
    /// Matching is exact and case-sensitive; unknown names are `Ordinary`.
    pub fn for_name(name: &str) -> Self {
        REGISTRY
            .iter()
            .find(|(registered, _)| *registered == name)
            .map(|(_, kind)| *kind)
            .unwrap_or(ItemKind::Ordinary)
    }

    /// The registered item name for this kind, if it has one.
    pub fn registered_name(self) -> Option<&'static str> {
        REGISTRY
            .iter()
            .find(|(_, kind)| *kind == self)
            .map(|(name, _)| *name)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ItemKind::Ordinary => "ordinary",
            ItemKind::Aged => "aged",
            ItemKind::EventPass => "event_pass",
            ItemKind::Legendary => "legendary",
            ItemKind::Conjured => "conjured",
        }
    }
}

impl core::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registered_names_resolve_to_their_kind() {
        assert_eq!(ItemKind::for_name("Aged Brie"), ItemKind::Aged);
        assert_eq!(
            ItemKind::for_name("Backstage passes to a TAFKAL80ETC concert"),
            ItemKind::EventPass
        );
        assert_eq!(
            ItemKind::for_name("Sulfuras, Hand of Ragnaros"),
            ItemKind::Legendary
        );
        assert_eq!(ItemKind::for_name("Conjured"), ItemKind::Conjured);
    }

    #[test]
    fn partial_matches_fall_back_to_ordinary() {
        for name in [
            "Conjured Mana Cake",
            "Sulfuras",
            "Backstage passes to a Raging Pumpkins concert",
            " Aged Brie",
            "",
        ] {
            assert_eq!(ItemKind::for_name(name), ItemKind::Ordinary, "{name:?}");
        }
    }

    #[test]
    fn registered_name_inverts_the_registry() {
        for (name, kind) in registry() {
            assert_eq!(kind.registered_name(), Some(*name));
        }
        assert_eq!(ItemKind::Ordinary.registered_name(), None);
    }

    #[test]
    fn serializes_as_snake_case() {
        assert_eq!(
            serde_json::to_string(&ItemKind::EventPass).unwrap(),
            "\"event_pass\""
        );
        assert_eq!(ItemKind::EventPass.to_string(), "event_pass");
    }
}
