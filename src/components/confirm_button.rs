//! Confirm Button Component
//!
//! Two-step button for destructive actions (clear list, clear all).

use leptos::prelude::*;

/// Shows `label`; a click swaps in `prompt` with confirm and cancel.
/// Escape or confirming returns to the label.
#[component]
pub fn ConfirmButton(
    #[prop(into)] label: String,
    #[prop(into)] prompt: String,
    #[prop(into)] button_class: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let armed = RwSignal::new(false);

    let arm = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        armed.set(true);
    };
    let disarm = move || armed.set(false);

    let idle = move || {
        view! {
            <button type="button" class=button_class.clone() on:click=arm>
                {label.clone()}
            </button>
        }
    };

    view! {
        <Show when=move || armed.get() fallback=idle>
            <span
                class="confirm"
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    if ev.key() == "Escape" {
                        disarm();
                    }
                }
            >
                <span class="confirm-text">{prompt.clone()}</span>
                <button
                    type="button"
                    class="confirm-btn"
                    title="Confirm"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        disarm();
                        on_confirm.run(());
                    }
                >
                    "✓"
                </button>
                <button
                    type="button"
                    class="cancel-btn"
                    title="Cancel"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        disarm();
                    }
                >
                    "✗"
                </button>
            </span>
        </Show>
    }
}
