use crate::item::Item;
use crate::rules;

/// Advance every item by one simulated day, in place.
///
/// The rule for each item is looked up from its name once per call. Unknown
/// names age as ordinary items; nothing is validated.
pub fn advance_one_day(items: &mut [Item]) -> &mut [Item] {
    for item in items.iter_mut() {
        let kind = item.kind();
        rules::age(kind, item);
        tracing::trace!(
            name = %item.name,
            kind = %kind,
            sell_in = item.sell_in,
            quality = item.quality,
            "item aged"
        );
    }
    items
}

/// The shop: a stock list plus the number of days simulated so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GildedRose {
    items: Vec<Item>,
    day: u32,
}

impl GildedRose {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items, day: 0 }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }

    /// Days simulated since construction.
    pub fn day(&self) -> u32 {
        self.day
    }

    /// Age the whole stock by one day and return the updated items.
    pub fn advance_one_day(&mut self) -> &[Item] {
        advance_one_day(&mut self.items);
        self.day += 1;
        tracing::debug!(day = self.day, items = self.items.len(), "advanced one day");
        &self.items
    }
}
