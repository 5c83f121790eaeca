//! MemoryStore - HashMap-backed [`KeyValueStore`].

use std::collections::HashMap;
use std::sync::Mutex;

use crate::ports::KeyValueStore;

#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Host-side write; the core itself only reads.
    pub fn put(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .expect("store lock poisoned")
            .insert(key.to_string(), value.to_string());
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .expect("store lock poisoned")
            .get(key)
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_returns_what_was_put() {
        let store = MemoryStore::new();
        assert_eq!(store.get("auth"), None);

        store.put("auth", r#"{"id": 1}"#);
        assert_eq!(store.get("auth").as_deref(), Some(r#"{"id": 1}"#));
    }
}
