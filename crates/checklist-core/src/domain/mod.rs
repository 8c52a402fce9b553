//! Domain Layer
//!
//! Items, ids and the error type shared by every layer.
//! No storage or rendering concerns live here.

mod error;
mod item;

pub use error::{DomainError, DomainResult};
pub use item::{items_in_order, Item, ItemId, ItemMap};
