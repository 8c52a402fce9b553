//! New Item Form Component
//!
//! Text entry that appends an item to one list.

use leptos::prelude::*;

use crate::context::use_app_context;

/// Form for appending items to `list`
#[component]
pub fn NewItemForm(list: String) -> impl IntoView {
    let ctx = use_app_context();

    let (new_text, set_new_text) = signal(String::new());
    let form_id = format!("{}-form", list);
    let input_id = format!("{}-entry", list);

    let add_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = new_text.get_untracked();
        if text.trim().is_empty() { return; }
        ctx.add(&list, &text);
        set_new_text.set(String::new());
    };

    view! {
        <form class="new-item-form" id=form_id on:submit=add_item>
            <input
                type="text"
                id=input_id
                placeholder="Add new item..."
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
