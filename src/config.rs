//! Startup Configuration
//!
//! Read from an optional `<script id="checklist-config" type="application/json">`
//! in index.html; absent means defaults.

use checklist_core::{ChecklistConfig, DomainResult};

const CONFIG_ELEMENT_ID: &str = "checklist-config";

pub fn load_config() -> DomainResult<ChecklistConfig> {
    let raw = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());

    match raw {
        Some(json) if !json.trim().is_empty() => ChecklistConfig::from_json(&json),
        _ => Ok(ChecklistConfig::default()),
    }
}
