//! Per-variant aging rules.
//!
//! Every rule adjusts quality first and decrements `sell_in` afterwards. The
//! "already expired" test reads `sell_in` as it was before today's decrement.

use crate::item::{Item, MAX_QUALITY, MIN_QUALITY};
use crate::kind::ItemKind;

/// Age a single item by one day using the rule for `kind`.
pub fn age(kind: ItemKind, item: &mut Item) {
    match kind {
        ItemKind::Ordinary => decay(item, 1),
        ItemKind::Aged => mature(item),
        ItemKind::EventPass => approach_event(item),
        ItemKind::Legendary => {}
        ItemKind::Conjured => decay(item, 2),
    }
}

fn decay(item: &mut Item, rate: i32) {
    let expired = item.is_expired();
    lower_quality(item, rate);
    decrease_sell_in(item);
    if expired {
        lower_quality(item, rate);
    }
}

fn mature(item: &mut Item) {
    let expired = item.is_expired();
    raise_quality(item, 1);
    decrease_sell_in(item);
    if expired {
        raise_quality(item, 1);
    }
}

fn approach_event(item: &mut Item) {
    match item.sell_in {
        days if days > 10 => raise_quality(item, 1),
        days if days > 5 => raise_quality(item, 2),
        days if days > 0 => raise_quality(item, 3),
        _ => item.quality = MIN_QUALITY,
    }
    decrease_sell_in(item);
}

fn decrease_sell_in(item: &mut Item) {
    item.sell_in = item.sell_in.saturating_sub(1);
}

fn raise_quality(item: &mut Item, amount: i32) {
    item.quality = item.quality.saturating_add(amount).min(MAX_QUALITY);
}

fn lower_quality(item: &mut Item, amount: i32) {
    item.quality = item.quality.saturating_sub(amount).max(MIN_QUALITY);
}
