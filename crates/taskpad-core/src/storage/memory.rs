//! In-memory storage backend.

use std::collections::HashMap;

use super::Storage;
use crate::error::Result;

/// HashMap-backed storage. Contents are lost when the value is dropped.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
    saves: usize,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-populated with `entries`, as if written by an earlier run.
    pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            saves: 0,
        }
    }

    /// Number of save calls received so far.
    pub fn save_count(&self) -> usize {
        self.saves
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl Storage for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        self.saves += 1;
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
