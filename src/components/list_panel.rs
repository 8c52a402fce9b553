//! List Panel Component
//!
//! One named list: header controls, entry form, and the drop-target row list.
//! Rows are rebuilt from scratch whenever the list signal or drag state changes.

use checklist_core::{Item, ListConfig};
use leptos::prelude::*;
use leptos_dragdrop::{make_on_list_mouseleave, make_on_list_mousemove, DndSignals};

use crate::components::{ConfirmButton, ListItem, NewItemForm, RetainCheckbox};
use crate::context::use_app_context;

#[component]
pub fn ListPanel(list: ListConfig, items: RwSignal<Vec<Item>>, dnd: DndSignals) -> impl IntoView {
    let ctx = use_app_context();

    let name = list.name.clone();
    let list_id = format!("{}-list", name);
    let on_mousemove = make_on_list_mousemove(dnd, name.clone());
    let on_mouseleave = make_on_list_mouseleave(dnd);

    let form_name = name.clone();
    let clear_name = name.clone();
    let on_clear = Callback::new(move |_: ()| ctx.clear(&clear_name));

    let rows_name = name.clone();
    let rows = move || {
        let placeholder_at = dnd.drop_position(&rows_name);
        let placeholder = || view! { <li class="drop-placeholder"></li> }.into_any();

        let mut rows = Vec::new();
        // Non-dragged rows placed so far; drop positions count only these
        let mut placed = 0;
        for item in items.get() {
            if !dnd.is_dragging(&rows_name, item.id.as_str()) {
                if placeholder_at == Some(placed) {
                    rows.push(placeholder());
                }
                placed += 1;
            }
            rows.push(view! { <ListItem list=rows_name.clone() item=item dnd=dnd /> }.into_any());
        }
        if placeholder_at.is_some_and(|p| p >= placed) {
            rows.push(placeholder());
        }
        rows
    };

    view! {
        <section class="list-panel">
            <header class="list-header">
                <h2>{list.title}</h2>
                <RetainCheckbox list=name />
                <ConfirmButton
                    label="Clear"
                    prompt="Clear list?"
                    button_class="clear-btn"
                    on_confirm=on_clear
                />
            </header>

            <NewItemForm list=form_name />

            <ul
                class="draggable item-list"
                id=list_id
                on:mousemove=on_mousemove
                on:mouseleave=on_mouseleave
            >
                {rows}
            </ul>

            <p class="item-count">{move || format!("{} items", items.with(Vec::len))}</p>
        </section>
    }
}
