//! List Item Component
//!
//! One draggable row: text with a delete button, or an inline editor
//! after a double-click.

use checklist_core::Item;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos_dragdrop::{make_on_mousedown, DndSignals, DragItem};

use crate::context::use_app_context;
use crate::store::{EditTarget, UiStateStoreFields};

/// A single row, tagged with its item id for drag hit-testing
#[component]
pub fn ListItem(list: String, item: Item, dnd: DndSignals) -> impl IntoView {
    let ctx = use_app_context();

    let id = item.id.clone();
    let text = item.text.clone();
    let target = EditTarget { list: list.clone(), id: id.clone() };

    let drag_id = id.to_string();
    let on_mousedown = make_on_mousedown(dnd, DragItem { list: list.clone(), id: drag_id.clone() });

    let is_editing = {
        let target = target.clone();
        move || ctx.ui.editing().get().as_ref() == Some(&target)
    };

    let row_class = {
        let list = list.clone();
        let drag_id = drag_id.clone();
        move || if dnd.is_dragging(&list, &drag_id) { "list-item dragging" } else { "list-item" }
    };

    let start_edit = {
        let target = target.clone();
        move |_: web_sys::MouseEvent| ctx.ui.editing().set(Some(target.clone()))
    };

    view! {
        <li
            class=row_class
            data-drag-id=drag_id
            on:mousedown=on_mousedown
            on:dblclick=start_edit
        >
            {move || if is_editing() {
                view! { <ItemEditor target=target.clone() text=text.clone() /> }.into_any()
            } else {
                let list = list.clone();
                let id = id.clone();
                view! {
                    <span class="item-text">{text.clone()}</span>
                    <button
                        class="delete-btn"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            ctx.remove(&list, &id);
                        }
                    >
                        "×"
                    </button>
                }.into_any()
            }}
        </li>
    }
}

/// Inline text editor. Enter or blur commits, Escape reverts.
#[component]
fn ItemEditor(target: EditTarget, text: String) -> impl IntoView {
    let ctx = use_app_context();

    let (value, set_value) = signal(text);
    let input_ref = NodeRef::<leptos::html::Input>::new();

    // Focus on the next tick, once the row has been swapped in
    Effect::new(move |_| {
        if let Some(input) = input_ref.get() {
            Timeout::new(0, move || {
                let _ = input.focus();
            })
            .forget();
        }
    });

    // Enter is followed by a blur when the editor unmounts; only the first commits
    let commit = move || {
        if ctx.ui.editing().get_untracked().as_ref() != Some(&target) {
            return;
        }
        ctx.ui.editing().set(None);
        ctx.edit(&target.list, &target.id, &value.get_untracked());
    };
    let commit_on_enter = commit.clone();

    view! {
        <input
            type="text"
            class="edit-input"
            node_ref=input_ref
            prop:value=move || value.get()
            on:input=move |ev| set_value.set(event_target_value(&ev))
            on:blur=move |_| commit()
            on:keydown=move |ev: web_sys::KeyboardEvent| {
                match ev.key().as_str() {
                    "Enter" => {
                        ev.prevent_default();
                        commit_on_enter();
                    }
                    "Escape" => ctx.ui.editing().set(None),
                    _ => {}
                }
            }
        />
    }
}
