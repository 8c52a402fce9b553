//! Retain Checkbox Component
//!
//! Per-list toggle: keep the source copy when an item is dragged to another list.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::UiStateStoreFields;

#[component]
pub fn RetainCheckbox(list: String) -> impl IntoView {
    let ctx = use_app_context();
    let checkbox_id = format!("{}-checkbox", list);

    // Always the stored flag: "clear all" resets it behind this component's back
    let checked = {
        let list = list.clone();
        Memo::new(move |_| {
            ctx.ui.storage_version().track();
            ctx.retain_on_move(&list)
        })
    };

    view! {
        <label class="retain-toggle">
            <input
                type="checkbox"
                id=checkbox_id
                prop:checked=move || checked.get()
                on:change=move |ev| ctx.set_retain_on_move(&list, event_target_checked(&ev))
            />
            "Keep copy when moving"
        </label>
    }
}
