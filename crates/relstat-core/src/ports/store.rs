//! KeyValueStore port - the host's persistent string store.
//!
//! We only ever read from it (the auth record); writes belong to the host.

pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
}
