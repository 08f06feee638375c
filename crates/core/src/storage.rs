//! Key-value storage abstraction.
//!
//! A visitor's marketplace data is a flat map of string keys to JSON text,
//! the same shape as browser local storage. Code that reads or writes
//! marketplace records takes a [`Storage`] so it can run against the
//! session-backed snapshot in production and a plain [`MemoryStorage`] in
//! tests.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// String-keyed storage of JSON text values.
///
/// Writes overwrite unconditionally; there is no versioning or conflict
/// detection.
pub trait Storage {
    /// Raw value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: String);

    /// Remove `key`. Removing an absent key is a no-op.
    fn remove(&mut self, key: &str);
}

impl<S: Storage + ?Sized> Storage for &mut S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: String) {
        (**self).set(key, value);
    }

    fn remove(&mut self, key: &str) {
        (**self).remove(key);
    }
}

/// In-memory [`Storage`].
///
/// Serializes as a plain JSON object, which is how a visitor's snapshot is
/// kept in their session between requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemoryStorage(BTreeMap<String, String>);

impl MemoryStorage {
    /// Create an empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total bytes of keys and values.
    #[must_use]
    pub fn byte_size(&self) -> usize {
        self.0.iter().map(|(k, v)| k.len() + v.len()).sum()
    }

    /// Stored keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.0.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.0.insert(key.to_string(), value);
    }

    fn remove(&mut self, key: &str) {
        self.0.remove(key);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_set_overwrites() {
        let mut storage = MemoryStorage::new();
        storage.set("role", "\"buyer\"".to_string());
        storage.set("role", "\"seller\"".to_string());
        assert_eq!(storage.get("role").as_deref(), Some("\"seller\""));
        assert_eq!(storage.len(), 1);
    }

    #[test]
    fn test_remove_absent_key_is_noop() {
        let mut storage = MemoryStorage::new();
        storage.remove("gigs");
        assert!(storage.is_empty());
    }

    #[test]
    fn test_byte_size_counts_keys_and_values() {
        let mut storage = MemoryStorage::new();
        assert_eq!(storage.byte_size(), 0);
        storage.set("role", "\"buyer\"".to_string());
        assert_eq!(storage.byte_size(), 4 + 7);
    }

    #[test]
    fn test_mut_ref_forwards() {
        fn write(mut storage: impl Storage) {
            storage.set("loggedIn", "true".to_string());
        }

        let mut storage = MemoryStorage::new();
        write(&mut storage);
        assert_eq!(storage.get("loggedIn").as_deref(), Some("true"));
    }

    #[test]
    fn test_snapshot_serializes_as_object() {
        let mut storage = MemoryStorage::new();
        storage.set("userId", "\"u_1\"".to_string());
        let json = serde_json::to_string(&storage).unwrap();
        assert_eq!(json, r#"{"userId":"\"u_1\""}"#);
        let back: MemoryStorage = serde_json::from_str(&json).unwrap();
        assert_eq!(back, storage);
    }
}
