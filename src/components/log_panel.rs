//! Log Panel Component
//!
//! Debug footer: recent log lines and the administrative "clear all".

use leptos::prelude::*;

use crate::components::ConfirmButton;
use crate::context::use_app_context;
use crate::store::UiStateStoreFields;

#[component]
pub fn LogPanel() -> impl IntoView {
    let ctx = use_app_context();

    let show = move || ctx.ui.show_log().get();
    let toggle = move |_: web_sys::MouseEvent| ctx.ui.show_log().set(!ctx.ui.show_log().get_untracked());

    let lines = move || {
        // Re-read the buffer after every mutation
        let _ = ctx.ui.log_version().get();
        rolling_logger::recent_lines()
    };

    let clear_log = move |_: web_sys::MouseEvent| {
        rolling_logger::clear_recent();
        ctx.refresh_log();
    };
    let on_clear_all = Callback::new(move |_: ()| ctx.clear_all());

    view! {
        <footer class="log-panel">
            <button type="button" class="log-toggle" on:click=toggle>
                {move || if show() { "Hide log" } else { "Show log" }}
            </button>
            <Show when=show>
                <ul class="log-lines">
                    {move || lines().into_iter().rev().map(|line| view! { <li>{line}</li> }).collect_view()}
                </ul>
                <div class="log-actions">
                    <button type="button" on:click=clear_log>"Clear log"</button>
                    <ConfirmButton
                        label="Clear all storage"
                        prompt="Wipe everything?"
                        button_class="danger-btn"
                        on_confirm=on_clear_all
                    />
                </div>
            </Show>
        </footer>
    }
}
