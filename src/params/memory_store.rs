//! In-memory parameter store.
//!
//! Backs the volatile session store (change flags and other entries that must
//! not survive a restart) and the unit tests.

use std::collections::HashMap;
use std::sync::Mutex;

use super::ParamStore;

/// HashMap-backed store with interior mutability.
#[derive(Default)]
pub struct MemoryParamStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryParamStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ParamStore for MemoryParamStore {
    fn get(&self, key: &str) -> String {
        self.values
            .lock()
            .map(|values| values.get(key).cloned().unwrap_or_default())
            .unwrap_or_default()
    }

    fn put(&self, key: &str, value: &str) {
        if let Ok(mut values) = self.values.lock() {
            values.insert(key.to_string(), value.to_string());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut values) = self.values.lock() {
            values.remove(key);
        }
    }
}
