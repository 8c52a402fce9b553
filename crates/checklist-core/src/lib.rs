//! Checklist Core
//!
//! Layered architecture:
//! - domain: items, ids, errors
//! - repository: key-value backends and the ordered list store
//! - controller: add/edit/remove/move and view reconciliation
//! - config: storage prefix, list names, logging knobs

pub mod config;
pub mod controller;
pub mod domain;
pub mod repository;

pub use config::{ChecklistConfig, ListConfig};
pub use controller::{place_at, ListController, ListRenderer};
pub use domain::{DomainError, DomainResult, Item, ItemId, ItemMap};
pub use repository::{KeyValueStore, ListStore, MemoryStore};
