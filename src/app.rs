//! Checklist App
//!
//! Main application component with one column per configured list.

use checklist_core::{ChecklistConfig, Item, ItemId, ListConfig, ListController, ListStore};
use leptos::prelude::*;
use leptos_dragdrop::{bind_global_mouseup, create_dnd_signals, DragItem, DropTarget};
use reactive_stores::Store;

use crate::components::{ListPanel, LogPanel};
use crate::context::AppContext;
use crate::renderer::SignalRenderer;
use crate::storage;
use crate::store::UiState;

#[component]
pub fn App(config: ChecklistConfig) -> impl IntoView {
    let renderer = SignalRenderer::new(&config.list_names());
    let views: Vec<(ListConfig, RwSignal<Vec<Item>>)> = config
        .lists
        .iter()
        .filter_map(|list| renderer.view(&list.name).map(|items| (list.clone(), items)))
        .collect();

    let store = ListStore::new(storage::open_backend(), config.storage_prefix.clone());
    let mut controller = ListController::new(store, renderer, &config);
    controller.render_all();
    log::info!("loaded {} lists", views.len());

    // Provide context to all children
    let ctx = AppContext::new(controller, Store::new(UiState::default()));
    provide_context(ctx);

    let dnd = create_dnd_signals();
    bind_global_mouseup(dnd, move |dragged: DragItem, target: DropTarget| {
        log::debug!("[DND] drop {} from {} on {} at {}", dragged.id, dragged.list, target.list, target.position);
        ctx.move_item(&dragged.list, &target.list, &ItemId::from(dragged.id), target.position);
    });

    view! {
        <div class="app-layout">
            <h1>"Checklist"</h1>
            <div class="lists">
                {views
                    .into_iter()
                    .map(|(list, items)| view! { <ListPanel list=list items=items dnd=dnd /> })
                    .collect_view()}
            </div>
            <LogPanel />
        </div>
    }
}
