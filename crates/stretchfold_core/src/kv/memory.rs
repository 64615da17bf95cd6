//! In-process key-value medium for tests and embedding.

use super::{KeyValueStore, KvError, KvResult};
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

/// `BTreeMap`-backed medium. Contents vanish with the value.
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    items: Mutex<BTreeMap<String, String>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently held.
    pub fn len(&self) -> usize {
        self.lock().map_or(0, |items| items.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> KvResult<MutexGuard<'_, BTreeMap<String, String>>> {
        self.items
            .lock()
            .map_err(|_| KvError::Unavailable("memory store lock poisoned".to_string()))
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get_item(&self, key: &str) -> KvResult<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> KvResult<()> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> KvResult<()> {
        self.lock()?.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::MemoryKeyValueStore;
    use crate::kv::KeyValueStore;

    #[test]
    fn tracks_keys_across_set_and_remove() {
        let store = MemoryKeyValueStore::new();
        assert!(store.is_empty());

        store.set_item("a", "1").expect("write a");
        store.set_item("a", "2").expect("overwrite a");
        store.set_item("b", "3").expect("write b");
        assert_eq!(store.len(), 2);
        assert_eq!(store.get_item("a").expect("read a").as_deref(), Some("2"));

        store.remove_item("a").expect("remove a");
        store.remove_item("a").expect("remove absent a");
        assert_eq!(store.get_item("a").expect("read a"), None);
        assert_eq!(store.len(), 1);
    }
}
