//! List Controller
//!
//! Mutations against the store, followed by a full re-render of every list
//! they touched. Failures are logged and reported as `false` / `None`;
//! nothing here returns an error to the UI.

mod reorder;

pub use reorder::place_at;

use crate::config::ChecklistConfig;
use crate::domain::{items_in_order, DomainError, DomainResult, Item, ItemId};
use crate::repository::{KeyValueStore, ListStore};

/// Rendering collaborator.
///
/// Must discard the current view of `list` and rebuild it from `items`,
/// in order, one element per item tagged with its id.
pub trait ListRenderer {
    fn render_list(&mut self, list: &str, items: &[Item]);
}

pub struct ListController<S, R> {
    store: ListStore<S>,
    renderer: R,
    lists: Vec<String>,
}

impl<S: KeyValueStore, R: ListRenderer> ListController<S, R> {
    pub fn new(store: ListStore<S>, renderer: R, config: &ChecklistConfig) -> Self {
        Self {
            store,
            renderer,
            lists: config.list_names(),
        }
    }

    pub fn store(&self) -> &ListStore<S> {
        &self.store
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn lists(&self) -> &[String] {
        &self.lists
    }

    pub fn items(&self, list: &str) -> Vec<Item> {
        items_in_order(&self.store.items(list))
    }

    /// Rebuild `list`'s view from the store
    pub fn render(&mut self, list: &str) {
        let items = self.items(list);
        log::debug!("render {} ({} items)", list, items.len());
        self.renderer.render_list(list, &items);
    }

    /// Rebuild every configured list, used on startup
    pub fn render_all(&mut self) {
        for list in self.lists.clone() {
            self.render(&list);
        }
    }

    /// Append `text` to `list`; returns the new id, or `None` for blank text
    pub fn add(&mut self, list: &str, text: &str) -> Option<ItemId> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let result = self.try_add(list, text);
        self.finish(result, &[list], |id| format!("added {id} to {list}"))
    }

    fn try_add(&mut self, list: &str, text: &str) -> DomainResult<ItemId> {
        let floor = self.store.highest_sequence(&self.lists);
        let id = self.store.next_id_above(floor)?;
        let mut items = self.store.items(list);
        if items.contains_key(&id) {
            return Err(DomainError::InvalidInput(format!("{id} is already in {list}")));
        }
        items.insert(id.clone(), text.to_string());
        self.store.set_items(list, &items)?;
        Ok(id)
    }

    /// Replace the text of `id` in place. Blank text removes the item.
    pub fn edit(&mut self, list: &str, id: &ItemId, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return self.remove(list, id);
        }
        let result = self.try_edit(list, id, text);
        self.finish(result, &[list], |_| format!("edited {id} in {list}")).is_some()
    }

    fn try_edit(&mut self, list: &str, id: &ItemId, text: &str) -> DomainResult<()> {
        let mut items = self.store.items(list);
        let slot = items.get_mut(id).ok_or_else(|| DomainError::not_found(list, id))?;
        *slot = text.to_string();
        self.store.set_items(list, &items)
    }

    pub fn remove(&mut self, list: &str, id: &ItemId) -> bool {
        let result = self.try_remove(list, id);
        self.finish(result, &[list], |_| format!("removed {id} from {list}")).is_some()
    }

    fn try_remove(&mut self, list: &str, id: &ItemId) -> DomainResult<()> {
        let mut items = self.store.items(list);
        items
            .shift_remove(id)
            .ok_or_else(|| DomainError::not_found(list, id))?;
        self.store.set_items(list, &items)
    }

    /// Move `id` from `source` to `position` in `target`.
    ///
    /// `position` is a zero-based index among the target's other items;
    /// anything at or past the end appends. A cross-list move deletes the
    /// source copy unless the source list's retention flag is set.
    pub fn move_item(&mut self, source: &str, target: &str, id: &ItemId, position: usize) -> bool {
        let result = self.try_move(source, target, id, position);
        let touched = if source == target { vec![source] } else { vec![source, target] };
        self.finish(result, &touched, |_| {
            format!("moved {id} from {source} to {target} at {position}")
        })
        .is_some()
    }

    fn try_move(&mut self, source: &str, target: &str, id: &ItemId, position: usize) -> DomainResult<()> {
        let mut source_items = self.store.items(source);
        let text = source_items
            .get(id)
            .cloned()
            .ok_or_else(|| DomainError::not_found(source, id))?;

        if source == target {
            let reordered = place_at(&source_items, id, text, position);
            return self.store.set_items(source, &reordered);
        }

        let target_items = self.store.items(target);
        if target_items.contains_key(id) {
            log::debug!("{} already in {}, replacing its entry", id, target);
        }
        // Target first: a failed write must never lose the source copy.
        self.store
            .set_items(target, &place_at(&target_items, id, text, position))?;

        if self.store.retain_on_move(source) {
            log::debug!("{} retained in {}", id, source);
            return Ok(());
        }
        source_items.shift_remove(id);
        self.store.set_items(source, &source_items)
    }

    pub fn clear(&mut self, list: &str) -> bool {
        let result = self.store.clear(list);
        self.finish(result, &[list], |_| format!("cleared {list}")).is_some()
    }

    /// Wipe the whole durable store and every configured list view
    pub fn clear_all(&mut self) -> bool {
        let result = self.store.clear_all();
        let names = self.lists.clone();
        let lists: Vec<&str> = names.iter().map(String::as_str).collect();
        self.finish(result, &lists, |_| "cleared all storage".to_string()).is_some()
    }

    pub fn retain_on_move(&self, list: &str) -> bool {
        self.store.retain_on_move(list)
    }

    /// Persist the retention checkbox of `list`
    pub fn set_retain_on_move(&mut self, list: &str, retain: bool) -> bool {
        match self.store.set_retain_on_move(list, retain) {
            Ok(()) => true,
            Err(e) => {
                log::error!("saving retention flag of {} failed: {}", list, e);
                false
            }
        }
    }

    /// Log the outcome and re-render `lists`.
    ///
    /// Failures still re-render: the caller may have acted on a stale view.
    fn finish<T>(
        &mut self,
        result: DomainResult<T>,
        lists: &[&str],
        describe: impl FnOnce(&T) -> String,
    ) -> Option<T> {
        let value = match result {
            Ok(value) => {
                log::info!("{}", describe(&value));
                Some(value)
            }
            Err(e @ DomainError::NotFound { .. }) => {
                log::warn!("{}", e);
                None
            }
            Err(e) => {
                log::error!("{}", e);
                None
            }
        };
        for list in lists {
            self.render(list);
        }
        value
    }
}

#[cfg(test)]
mod tests;
