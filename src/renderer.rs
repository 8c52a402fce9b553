//! Signal Renderer
//!
//! Each list view is a signal holding the full item vector. A render replaces
//! the whole vector, and the list component rebuilds every row from it.

use std::collections::HashMap;

use checklist_core::{Item, ListRenderer};
use leptos::prelude::*;

#[derive(Clone, Default)]
pub struct SignalRenderer {
    views: HashMap<String, RwSignal<Vec<Item>>>,
}

impl SignalRenderer {
    pub fn new(lists: &[String]) -> Self {
        let views = lists
            .iter()
            .map(|name| (name.clone(), RwSignal::new(Vec::new())))
            .collect();
        Self { views }
    }

    pub fn view(&self, list: &str) -> Option<RwSignal<Vec<Item>>> {
        self.views.get(list).copied()
    }
}

impl ListRenderer for SignalRenderer {
    fn render_list(&mut self, list: &str, items: &[Item]) {
        match self.views.get(list) {
            Some(view) => view.set(items.to_vec()),
            None => log::warn!("no view registered for list '{}'", list),
        }
    }
}
