//! Repository Layer - Core Traits
//!
//! The durable medium is an opaque string-keyed store.
//! Implementations: browser `localStorage`, in-memory map.

use crate::domain::DomainResult;

/// String-keyed durable storage
pub trait KeyValueStore {
    /// Read a value; `None` if the key was never written
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value, replacing any previous one
    fn set(&mut self, key: &str, value: &str) -> DomainResult<()>;

    /// Remove a key; removing an absent key is not an error
    fn remove(&mut self, key: &str) -> DomainResult<()>;

    /// Remove every key
    fn clear(&mut self) -> DomainResult<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> DomainResult<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> DomainResult<()> {
        (**self).remove(key)
    }

    fn clear(&mut self) -> DomainResult<()> {
        (**self).clear()
    }
}
