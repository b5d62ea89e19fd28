//! Port interface for the persisted key/value store
//!
//! This trait defines the boundary between the session and whatever device
//! storage backs it. Values are opaque strings; encoding is the caller's job.

use async_trait::async_trait;
use mindset_domain::Result;

/// Trait for string key/value persistence
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Delete `key`; removing an absent key is not an error
    async fn remove(&self, key: &str) -> Result<()>;
}
