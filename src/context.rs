//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use checklist_core::{ItemId, KeyValueStore, ListController};
use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;

use crate::renderer::SignalRenderer;
use crate::store::{UiStateStoreFields, UiStore};

pub type Controller = ListController<Box<dyn KeyValueStore>, SignalRenderer>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// The list controller; lives on the UI thread only
    controller: StoredValue<Controller, LocalStorage>,
    pub ui: UiStore,
}

impl AppContext {
    pub fn new(controller: Controller, ui: UiStore) -> Self {
        Self {
            controller: StoredValue::new_local(controller),
            ui,
        }
    }

    fn mutate(&self, op: impl FnOnce(&mut Controller)) {
        self.controller.update_value(op);
        *self.ui.storage_version().write() += 1;
        self.refresh_log();
    }

    /// Let the log panel pick up new lines
    pub fn refresh_log(&self) {
        *self.ui.log_version().write() += 1;
    }

    pub fn add(&self, list: &str, text: &str) {
        self.mutate(|c| {
            c.add(list, text);
        });
    }

    pub fn edit(&self, list: &str, id: &ItemId, text: &str) {
        self.mutate(|c| {
            c.edit(list, id, text);
        });
    }

    pub fn remove(&self, list: &str, id: &ItemId) {
        self.mutate(|c| {
            c.remove(list, id);
        });
    }

    pub fn move_item(&self, source: &str, target: &str, id: &ItemId, position: usize) {
        self.mutate(|c| {
            c.move_item(source, target, id, position);
        });
    }

    pub fn clear(&self, list: &str) {
        self.mutate(|c| {
            c.clear(list);
        });
    }

    pub fn clear_all(&self) {
        self.mutate(|c| {
            c.clear_all();
        });
    }

    pub fn retain_on_move(&self, list: &str) -> bool {
        self.controller.with_value(|c| c.retain_on_move(list))
    }

    pub fn set_retain_on_move(&self, list: &str, retain: bool) {
        self.mutate(|c| {
            c.set_retain_on_move(list, retain);
        });
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
