pub mod migrations;
pub mod session;
pub mod sqlite;

use std::collections::BTreeMap;

use anyhow::Result;
use serde_json::Value;

pub use session::SchoolSession;
pub use sqlite::SqliteStore;

/// Key-value persistence port owned by the caller. The comparison core never
/// reaches into it directly.
pub trait KeyValueStore {
    fn load(&self, key: &str) -> Result<Option<Value>>;
    fn save(&mut self, key: &str, value: &Value) -> Result<()>;
    fn clear(&mut self, key: &str) -> Result<()>;
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, Value>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &Value) -> Result<()> {
        self.entries.insert(key.to_string(), value.clone());
        Ok(())
    }

    fn clear(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}
