//! UI Components
//!
//! Reusable Leptos components.

mod confirm_button;
mod list_item;
mod list_panel;
mod log_panel;
mod new_item_form;
mod retain_checkbox;

pub use confirm_button::ConfirmButton;
pub use list_item::ListItem;
pub use list_panel::ListPanel;
pub use log_panel::LogPanel;
pub use new_item_form::NewItemForm;
pub use retain_checkbox::RetainCheckbox;
