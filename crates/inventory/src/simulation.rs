use serde::Serialize;

use crate::engine::GildedRose;
use crate::item::Item;

/// Stock as it stood at the end of a simulated day (day 0 = before aging).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DaySnapshot {
    pub day: u32,
    pub items: Vec<Item>,
}

impl GildedRose {
    pub fn snapshot(&self) -> DaySnapshot {
        DaySnapshot {
            day: self.day(),
            items: self.items().to_vec(),
        }
    }

    /// Simulate `days` days, recording the current state first and then
    /// the stock after every day.
    pub fn run(&mut self, days: u32) -> Vec<DaySnapshot> {
        let mut history = Vec::new();
        history.push(self.snapshot());
        for _ in 0..days {
            self.advance_one_day();
            history.push(self.snapshot());
        }
        tracing::info!(days, items = self.items().len(), "simulation finished");
        history
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::sample_inventory;

    #[test]
    fn zero_days_records_only_the_initial_state() {
        let mut shop = GildedRose::new(sample_inventory());
        let history = shop.run(0);
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].day, 0);
        assert_eq!(history[0].items, sample_inventory());
    }

    #[test]
    fn records_one_snapshot_per_day() {
        let mut shop = GildedRose::new(sample_inventory());
        let history = shop.run(5);

        let days: Vec<u32> = history.iter().map(|s| s.day).collect();
        assert_eq!(days, vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(history.last().unwrap().items, shop.items());
    }

    #[test]
    fn sample_inventory_after_five_days() {
        let mut shop = GildedRose::new(sample_inventory());
        let history = shop.run(5);

        assert_eq!(
            history[5].items,
            vec![
                Item::new("+5 Dexterity Vest", 5, 15),
                Item::new("Aged Brie", -3, 7),
                Item::new("Elixir of the Mongoose", 0, 2),
                Item::new("Sulfuras, Hand of Ragnaros", 0, 80),
                Item::new("Sulfuras, Hand of Ragnaros", -1, 80),
                Item::new("Backstage passes to a TAFKAL80ETC concert", 10, 25),
                Item::new("Backstage passes to a TAFKAL80ETC concert", 5, 50),
                Item::new("Backstage passes to a TAFKAL80ETC concert", 0, 50),
                Item::new("Conjured", -2, 0),
            ]
        );
    }

    #[test]
    fn continues_from_the_current_day() {
        let mut shop = GildedRose::new(sample_inventory());
        shop.advance_one_day();
        let history = shop.run(2);
        assert_eq!(history.first().unwrap().day, 1);
        assert_eq!(history.last().unwrap().day, 3);
    }
}
