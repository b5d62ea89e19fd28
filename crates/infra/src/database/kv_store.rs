//! SQLite-backed implementation of the `KeyValueStore` port

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use mindset_core::KeyValueStore;
use mindset_domain::{MindsetError, Result as DomainResult};
use rusqlite::{params, OptionalExtension};
use tokio::task;

use super::manager::{map_sql_error, DbManager};

/// Persisted store on a `kv_store` table, one row per key
pub struct SqliteKeyValueStore {
    db: Arc<DbManager>,
}

impl SqliteKeyValueStore {
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl KeyValueStore for SqliteKeyValueStore {
    async fn get(&self, key: &str) -> DomainResult<Option<String>> {
        let db = Arc::clone(&self.db);
        let key = key.to_string();

        task::spawn_blocking(move || -> DomainResult<Option<String>> {
            let conn = db.get_connection()?;
            conn.query_row("SELECT value FROM kv_store WHERE key = ?1", params![key], |row| {
                row.get(0)
            })
            .optional()
            .map_err(map_sql_error)
        })
        .await
        .map_err(map_join_error)?
    }

    async fn set(&self, key: &str, value: &str) -> DomainResult<()> {
        let db = Arc::clone(&self.db);
        let key = key.to_string();
        let value = value.to_string();

        task::spawn_blocking(move || -> DomainResult<()> {
            let conn = db.get_connection()?;
            conn.execute(
                "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
                params![key, value, Utc::now().timestamp_millis()],
            )
            .map_err(map_sql_error)?;
            Ok(())
        })
        .await
        .map_err(map_join_error)?
    }

    async fn remove(&self, key: &str) -> DomainResult<()> {
        let db = Arc::clone(&self.db);
        let key = key.to_string();

        task::spawn_blocking(move || -> DomainResult<()> {
            let conn = db.get_connection()?;
            conn.execute("DELETE FROM kv_store WHERE key = ?1", params![key])
                .map_err(map_sql_error)?;
            Ok(())
        })
        .await
        .map_err(map_join_error)?
    }
}

fn map_join_error(err: task::JoinError) -> MindsetError {
    if err.is_cancelled() {
        MindsetError::Internal("blocking key/value store task cancelled".into())
    } else {
        MindsetError::Internal(format!("blocking key/value store task failed: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn store_in(dir: &TempDir) -> SqliteKeyValueStore {
        let db = DbManager::new(dir.path().join("kv.db"), 2).expect("manager");
        db.run_migrations().expect("migrations");
        SqliteKeyValueStore::new(Arc::new(db))
    }

    #[tokio::test]
    async fn missing_key_reads_as_none() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        assert_eq!(store.get("mindset_level").await.unwrap(), None);
    }

    #[tokio::test]
    async fn set_overwrites_and_remove_deletes() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.set("mindset_level", "Safety").await.unwrap();
        store.set("mindset_level", "Esteem").await.unwrap();
        assert_eq!(store.get("mindset_level").await.unwrap().as_deref(), Some("Esteem"));

        store.remove("mindset_level").await.unwrap();
        assert_eq!(store.get("mindset_level").await.unwrap(), None);
    }

    #[tokio::test]
    async fn write_without_schema_is_a_storage_error() {
        let dir = TempDir::new().unwrap();
        let db = DbManager::new(dir.path().join("bare.db"), 1).expect("manager");
        let store = SqliteKeyValueStore::new(Arc::new(db));

        let result = store.set("k", "v").await;

        assert!(matches!(result, Err(MindsetError::Storage(_))), "got {result:?}");
    }
}
