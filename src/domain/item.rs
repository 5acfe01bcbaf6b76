//! Catalog item types.
//!
//! The external source reports prices separately for tradable and
//! non-tradable listings. [`PartitionItem`] is one row of such a partition;
//! [`Item`] is the canonical, merged view with both minimum prices.

use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One of the two subsets returned separately by the price source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Partition {
    Tradable,
    NonTradable,
}

impl Partition {
    /// Both partitions, tradable first.
    pub const ALL: [Self; 2] = [Self::Tradable, Self::NonTradable];

    #[must_use]
    pub const fn is_tradable(self) -> bool {
        matches!(self, Self::Tradable)
    }

    /// Query flag understood by the upstream API.
    #[must_use]
    pub const fn as_flag(self) -> &'static str {
        match self {
            Self::Tradable => "1",
            Self::NonTradable => "0",
        }
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tradable => write!(f, "tradable"),
            Self::NonTradable => write!(f, "non-tradable"),
        }
    }
}

/// A single row returned by the price source for one partition.
///
/// Only the identifying fields, links and `min_price` feed the merged
/// catalog; the remaining statistics are carried for completeness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartitionItem {
    pub market_hash_name: String,
    pub currency: String,
    #[serde(default)]
    pub suggested_price: Option<Decimal>,
    pub item_page: String,
    pub market_page: String,
    #[serde(default)]
    pub min_price: Option<Decimal>,
    #[serde(default)]
    pub max_price: Option<Decimal>,
    #[serde(default)]
    pub mean_price: Option<Decimal>,
    #[serde(default)]
    pub median_price: Option<Decimal>,
    #[serde(default)]
    pub quantity: u64,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub updated_at: DateTime<Utc>,
}

impl PartitionItem {
    /// Create a row with only a name and minimum price set.
    pub fn new(market_hash_name: impl Into<String>, min_price: Option<Decimal>) -> Self {
        Self {
            market_hash_name: market_hash_name.into(),
            currency: String::new(),
            suggested_price: None,
            item_page: String::new(),
            market_page: String::new(),
            min_price,
            max_price: None,
            mean_price: None,
            median_price: None,
            quantity: 0,
            created_at: DateTime::<Utc>::default(),
            updated_at: DateTime::<Utc>::default(),
        }
    }

    /// Set the currency code.
    #[must_use]
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }
}

/// Canonical catalog entry, unique by `market_hash_name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub market_hash_name: String,
    pub currency: String,
    pub suggested_price: Option<Decimal>,
    pub item_page: String,
    pub market_page: String,
    pub min_price_tradable: Option<Decimal>,
    pub min_price_non_tradable: Option<Decimal>,
}

impl Item {
    /// Build a catalog entry from a partition row and both minimum prices.
    #[must_use]
    pub fn from_partition(
        row: PartitionItem,
        min_price_tradable: Option<Decimal>,
        min_price_non_tradable: Option<Decimal>,
    ) -> Self {
        Self {
            market_hash_name: row.market_hash_name,
            currency: row.currency,
            suggested_price: row.suggested_price,
            item_page: row.item_page,
            market_page: row.market_page,
            min_price_tradable,
            min_price_non_tradable,
        }
    }
}
