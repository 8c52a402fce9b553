//! Repository Layer
//!
//! Key-value backends and the ordered list store built on top of them.

mod list_store;
mod memory;
mod traits;


pub use list_store::ListStore;
pub use memory::MemoryStore;
pub use traits::KeyValueStore;
