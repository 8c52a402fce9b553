//! List Store
//!
//! Durable list-name → ordered item mapping, the shared id counter,
//! and the per-list retention flags.
//!
//! Layout (every key carries the configured prefix):
//! - `last-item-id`: decimal counter
//! - `<list>-items`: JSON object, key order is display order
//! - `<list>-checkbox`: `"true"` / `"false"`

use super::traits::KeyValueStore;
use crate::domain::{DomainError, DomainResult, ItemId, ItemMap};

const LAST_ITEM_ID_KEY: &str = "last-item-id";

/// Ordered list persistence over any key-value backend
#[derive(Debug)]
pub struct ListStore<S> {
    backend: S,
    prefix: String,
}

impl<S: KeyValueStore> ListStore<S> {
    pub fn new(backend: S, prefix: impl Into<String>) -> Self {
        Self {
            backend,
            prefix: prefix.into(),
        }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut S {
        &mut self.backend
    }

    fn items_key(&self, list: &str) -> String {
        format!("{}{}-items", self.prefix, list)
    }

    fn checkbox_key(&self, list: &str) -> String {
        format!("{}{}-checkbox", self.prefix, list)
    }

    fn counter_key(&self) -> String {
        format!("{}{}", self.prefix, LAST_ITEM_ID_KEY)
    }

    /// Current ordered items of `list`.
    ///
    /// Never fails: an absent or unparseable value reads as an empty list.
    pub fn items(&self, list: &str) -> ItemMap {
        let key = self.items_key(list);
        let Some(raw) = self.backend.get(&key) else {
            return ItemMap::new();
        };
        match serde_json::from_str::<Option<ItemMap>>(&raw) {
            Ok(items) => items.unwrap_or_default(),
            Err(e) => {
                log::warn!("{}", DomainError::Malformed { key, reason: e.to_string() });
                ItemMap::new()
            }
        }
    }

    /// Replace the whole persisted mapping of `list` in a single write
    pub fn set_items(&mut self, list: &str, items: &ItemMap) -> DomainResult<()> {
        let json = serde_json::to_string(items).map_err(|e| DomainError::Storage(e.to_string()))?;
        self.backend.set(&self.items_key(list), &json)
    }

    /// Last counter value handed out; 0 when never written or unreadable
    pub fn last_item_id(&self) -> u64 {
        let key = self.counter_key();
        match self.backend.get(&key) {
            None => 0,
            Some(raw) => raw.trim().parse().unwrap_or_else(|e: std::num::ParseIntError| {
                log::warn!("{}", DomainError::Malformed { key, reason: e.to_string() });
                0
            }),
        }
    }

    /// Highest counter value embedded in the ids of `lists`
    pub fn highest_sequence(&self, lists: &[String]) -> u64 {
        lists
            .iter()
            .flat_map(|list| self.items(list).into_keys())
            .filter_map(|id| id.sequence())
            .max()
            .unwrap_or(0)
    }

    /// Bump and persist the counter, returning a never-issued id
    pub fn next_id(&mut self) -> DomainResult<ItemId> {
        self.next_id_above(0)
    }

    /// Like `next_id`, but the result is also past `floor`.
    ///
    /// A lost or corrupt counter restarts at 0; passing the highest id still
    /// stored keeps it from handing out an id that is in use.
    pub fn next_id_above(&mut self, floor: u64) -> DomainResult<ItemId> {
        let key = self.counter_key();
        let next = self
            .last_item_id()
            .max(floor)
            .checked_add(1)
            .ok_or_else(|| DomainError::Malformed {
                key: key.clone(),
                reason: "counter exhausted".to_string(),
            })?;
        self.backend.set(&key, &next.to_string())?;
        Ok(ItemId::from_sequence(next))
    }

    pub fn clear(&mut self, list: &str) -> DomainResult<()> {
        self.backend.remove(&self.items_key(list))
    }

    /// Wipe the whole backend, counter and flags included
    pub fn clear_all(&mut self) -> DomainResult<()> {
        self.backend.clear()
    }

    /// Whether a cross-list move out of `list` keeps the source copy (default off)
    pub fn retain_on_move(&self, list: &str) -> bool {
        self.backend
            .get(&self.checkbox_key(list))
            .is_some_and(|v| v.trim() == "true")
    }

    pub fn set_retain_on_move(&mut self, list: &str, retain: bool) -> DomainResult<()> {
        let value = if retain { "true" } else { "false" };
        self.backend.set(&self.checkbox_key(list), value)
    }
}
