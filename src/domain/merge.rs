//! Merge of the two price partitions into the canonical catalog.

use std::collections::HashMap;

use rust_decimal::Decimal;

use super::item::{Item, PartitionItem};

/// Combine tradable and non-tradable rows into one item per name.
///
/// Tradable rows form the base and pick up the non-tradable minimum price
/// of the same name when present. Names only listed as non-tradable are
/// added with no tradable price. Within one partition the last row for a
/// name wins. The order of the returned items is unspecified.
#[must_use]
pub fn merge(tradable: Vec<PartitionItem>, non_tradable: Vec<PartitionItem>) -> Vec<Item> {
    let mut merged: HashMap<String, Item> = HashMap::with_capacity(tradable.len());
    {
        let non_tradable_prices: HashMap<&str, Option<Decimal>> = non_tradable
            .iter()
            .map(|row| (row.market_hash_name.as_str(), row.min_price))
            .collect();

        for row in tradable {
            let non_tradable_price = non_tradable_prices
                .get(row.market_hash_name.as_str())
                .copied()
                .flatten();
            let tradable_price = row.min_price;
            merged.insert(
                row.market_hash_name.clone(),
                Item::from_partition(row, tradable_price, non_tradable_price),
            );
        }
    }

    let mut only_non_tradable: HashMap<String, Item> = HashMap::new();
    for row in non_tradable {
        if merged.contains_key(&row.market_hash_name) {
            continue;
        }
        let price = row.min_price;
        only_non_tradable.insert(
            row.market_hash_name.clone(),
            Item::from_partition(row, None, price),
        );
    }

    let mut items = Vec::with_capacity(merged.len() + only_non_tradable.len());
    items.extend(merged.into_values());
    items.extend(only_non_tradable.into_values());
    items
}
