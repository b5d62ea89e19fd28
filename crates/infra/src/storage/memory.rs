//! Process-lifetime store

use std::collections::HashMap;

use async_trait::async_trait;
use mindset_core::KeyValueStore;
use mindset_domain::Result as DomainResult;
use parking_lot::RwLock;

/// `KeyValueStore` held entirely in memory. Nothing survives the process.
#[derive(Debug, Default)]
pub struct InMemoryKeyValueStore {
    entries: RwLock<HashMap<String, String>>,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for InMemoryKeyValueStore {
    async fn get(&self, key: &str) -> DomainResult<Option<String>> {
        Ok(self.entries.read().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> DomainResult<()> {
        self.entries.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> DomainResult<()> {
        self.entries.write().remove(key);
        Ok(())
    }
}
