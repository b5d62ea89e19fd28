//! Typed records over the key/value port
//!
//! Each persisted key has one schema type. Reads fail closed: a missing key,
//! a store error or an undecodable payload all yield the type's default and
//! are logged. Writes propagate errors so callers never advance in-memory
//! state past what is durable.
//!
//! Payloads pass through [`upgrade`] before decoding so records written by
//! older front ends (numeric ids, `isFavorite` markers) still load.

use std::sync::Arc;

use mindset_domain::constants::{
    ONBOARDED_MARKER, STORAGE_KEY_FAVORITES, STORAGE_KEY_GENRES, STORAGE_KEY_JOURNAL,
    STORAGE_KEY_LEVEL, STORAGE_KEY_ONBOARDED, STORAGE_KEY_PROGRESS,
};
use mindset_domain::{HierarchyLevel, JournalEntry, MindsetError, Quote, Result, UserProgress};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, error, warn};

use super::ports::KeyValueStore;

/// Typed access to the six persisted records
#[derive(Clone)]
pub struct RecordStore {
    store: Arc<dyn KeyValueStore>,
}

impl RecordStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub async fn load_level(&self) -> HierarchyLevel {
        match self.read_raw(STORAGE_KEY_LEVEL).await {
            Some(raw) => raw.parse().unwrap_or_else(|err: String| {
                warn!(key = STORAGE_KEY_LEVEL, error = %err, "unknown focus level, using default");
                HierarchyLevel::default()
            }),
            None => HierarchyLevel::default(),
        }
    }

    pub async fn load_genres(&self) -> Vec<String> {
        self.read_json(STORAGE_KEY_GENRES).await
    }

    pub async fn load_favorites(&self) -> Vec<Quote> {
        self.read_json(STORAGE_KEY_FAVORITES).await
    }

    pub async fn load_onboarded(&self) -> bool {
        self.read_raw(STORAGE_KEY_ONBOARDED).await.is_some_and(|raw| !raw.is_empty())
    }

    pub async fn load_progress(&self) -> UserProgress {
        self.read_json(STORAGE_KEY_PROGRESS).await
    }

    pub async fn load_journal(&self) -> Vec<JournalEntry> {
        self.read_json(STORAGE_KEY_JOURNAL).await
    }

    pub async fn save_level(&self, level: HierarchyLevel) -> Result<()> {
        self.store.set(STORAGE_KEY_LEVEL, level.as_str()).await
    }

    pub async fn save_genres(&self, genres: &[String]) -> Result<()> {
        self.write_json(STORAGE_KEY_GENRES, genres).await
    }

    pub async fn save_favorites(&self, favorites: &[Quote]) -> Result<()> {
        self.write_json(STORAGE_KEY_FAVORITES, favorites).await
    }

    pub async fn mark_onboarded(&self) -> Result<()> {
        self.store.set(STORAGE_KEY_ONBOARDED, ONBOARDED_MARKER).await
    }

    pub async fn save_progress(&self, progress: &UserProgress) -> Result<()> {
        self.write_json(STORAGE_KEY_PROGRESS, progress).await
    }

    pub async fn save_journal(&self, entries: &[JournalEntry]) -> Result<()> {
        self.write_json(STORAGE_KEY_JOURNAL, entries).await
    }

    async fn read_raw(&self, key: &str) -> Option<String> {
        match self.store.get(key).await {
            Ok(value) => value,
            Err(err) => {
                error!(key, error = %err, "failed to read persisted record");
                None
            }
        }
    }

    async fn read_json<T>(&self, key: &str) -> T
    where
        T: DeserializeOwned + Default,
    {
        let Some(raw) = self.read_raw(key).await else {
            debug!(key, "record absent, using default");
            return T::default();
        };

        decode(key, &raw).unwrap_or_else(|err| {
            warn!(key, error = %err, "failed to decode persisted record, using default");
            T::default()
        })
    }

    async fn write_json<T>(&self, key: &str, value: &T) -> Result<()>
    where
        T: Serialize + ?Sized,
    {
        let encoded = serde_json::to_string(value)?;
        self.store.set(key, &encoded).await.map_err(|err| {
            error!(key, error = %err, "failed to persist record");
            err
        })
    }
}

/// Decode a raw payload stored under `key`, upgrading older shapes first.
pub fn decode<T: DeserializeOwned>(key: &str, raw: &str) -> Result<T> {
    let value: Value = serde_json::from_str(raw)?;
    serde_json::from_value(upgrade(key, value)).map_err(MindsetError::from)
}

/// Rewrite legacy payload shapes into the current schema.
pub fn upgrade(key: &str, value: Value) -> Value {
    match key {
        STORAGE_KEY_FAVORITES => map_array(value, upgrade_quote),
        STORAGE_KEY_JOURNAL => map_array(value, upgrade_journal_entry),
        STORAGE_KEY_PROGRESS if value.is_null() => Value::Object(Map::new()),
        _ => value,
    }
}

fn map_array(value: Value, f: fn(Value) -> Value) -> Value {
    match value {
        Value::Array(items) => Value::Array(items.into_iter().map(f).collect()),
        other => other,
    }
}

fn upgrade_quote(value: Value) -> Value {
    let Value::Object(mut quote) = value else {
        return value;
    };
    quote.remove("isFavorite");
    stringify_id(&mut quote);
    Value::Object(quote)
}

fn upgrade_journal_entry(value: Value) -> Value {
    let Value::Object(mut entry) = value else {
        return value;
    };
    stringify_id(&mut entry);
    if let Some(linked) = entry.remove("linkedQuote") {
        if !linked.is_null() {
            entry.insert("linkedQuote".to_string(), upgrade_quote(linked));
        }
    }
    Value::Object(entry)
}

fn stringify_id(object: &mut Map<String, Value>) {
    if let Some(Value::Number(id)) = object.get("id") {
        let id = id.to_string();
        object.insert("id".to_string(), Value::String(id));
    }
}
