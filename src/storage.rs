//! Browser Storage
//!
//! `localStorage` as the durable key-value medium.

use checklist_core::{DomainError, DomainResult, KeyValueStore, MemoryStore};
use wasm_bindgen::JsValue;

pub struct WebStorage {
    storage: web_sys::Storage,
}

impl WebStorage {
    /// `None` when the page has no usable `localStorage` (e.g. blocked by privacy settings)
    pub fn open() -> Option<Self> {
        let storage = web_sys::window()?.local_storage().ok()??;
        Some(Self { storage })
    }
}

fn js_err(e: JsValue) -> DomainError {
    DomainError::Storage(format!("{:?}", e))
}

impl KeyValueStore for WebStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> DomainResult<()> {
        self.storage.set_item(key, value).map_err(js_err)
    }

    fn remove(&mut self, key: &str) -> DomainResult<()> {
        self.storage.remove_item(key).map_err(js_err)
    }

    fn clear(&mut self) -> DomainResult<()> {
        self.storage.clear().map_err(js_err)
    }
}

/// `localStorage` if available, otherwise a non-durable in-memory store
pub fn open_backend() -> Box<dyn KeyValueStore> {
    match WebStorage::open() {
        Some(storage) => Box::new(storage),
        None => {
            log::warn!("localStorage unavailable, changes will not survive a reload");
            Box::new(MemoryStore::new())
        }
    }
}
