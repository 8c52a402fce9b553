//! Item Entity
//!
//! A checklist entry: an immutable id plus free text.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

const ID_PREFIX: &str = "item-";

/// Opaque item identifier, minted from the store's counter as `item-<n>`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Id for the `n`-th value of the shared counter
    pub fn from_sequence(n: u64) -> Self {
        Self(format!("{ID_PREFIX}{n}"))
    }

    /// Counter value this id was minted from, if it has the minted shape
    pub fn sequence(&self) -> Option<u64> {
        self.0.strip_prefix(ID_PREFIX)?.parse().ok()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered id → text mapping; iteration order is display order.
///
/// Removal must go through `shift_remove` so the remaining order survives.
pub type ItemMap = IndexMap<ItemId, String>;

/// A single list entry as handed to the renderer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    pub text: String,
}

impl Item {
    pub fn new(id: ItemId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }
}

/// Flatten a list mapping into items, preserving order
pub fn items_in_order(map: &ItemMap) -> Vec<Item> {
    map.iter()
        .map(|(id, text)| Item::new(id.clone(), text.clone()))
        .collect()
}
