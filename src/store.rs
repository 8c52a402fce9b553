//! UI State Store
//!
//! Transient view state with field-level reactivity (Leptos reactive_stores).
//! List contents are not here: they live in the checklist store and reach
//! the view through the signal renderer.

use checklist_core::ItemId;
use reactive_stores::Store;

/// Row being edited in place
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditTarget {
    pub list: String,
    pub id: ItemId,
}

#[derive(Clone, Debug, Default, Store)]
pub struct UiState {
    pub editing: Option<EditTarget>,
    /// Debug panel visibility
    pub show_log: bool,
    /// Bumped after every mutation so the log panel re-reads the buffer
    pub log_version: u32,
    /// Bumped after every mutation; views of stored flags re-read on change
    pub storage_version: u32,
}

pub type UiStore = Store<UiState>;
