//! Position-preserving Placement
//!
//! Shared by same-list reorder and cross-list insertion.

use crate::domain::{ItemId, ItemMap};

/// Rebuild `items` with `(id, text)` placed at `position`.
///
/// `position` counts the *other* entries: `id` is skipped while walking the
/// existing order and inserted once that many entries have been placed.
/// At or past the end, it is appended.
pub fn place_at(items: &ItemMap, id: &ItemId, text: String, position: usize) -> ItemMap {
    let mut rebuilt = ItemMap::with_capacity(items.len() + 1);
    let mut entry = Some((id.clone(), text));

    for (key, value) in items.iter().filter(|(key, _)| *key != id) {
        if rebuilt.len() == position {
            if let Some((id, text)) = entry.take() {
                rebuilt.insert(id, text);
            }
        }
        rebuilt.insert(key.clone(), value.clone());
    }
    if let Some((id, text)) = entry {
        rebuilt.insert(id, text);
    }
    rebuilt
}
