#![allow(dead_code)]

use std::sync::Arc;

use chrono::NaiveDate;
use mindset_core::{FixedClock, MindsetSession, SessionOptions, UnconfiguredGenerator};
use mindset_infra::database::{DbManager, SqliteKeyValueStore};
use tempfile::TempDir;

/// Temporary database wrapper that keeps the underlying file alive for the
/// duration of a test run.
pub struct TestDatabase {
    pub manager: Arc<DbManager>,
    _temp_dir: TempDir,
}

impl TestDatabase {
    /// Create a migrated database in a fresh temp directory.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("temp dir should be created");
        let manager = Self::open(&temp_dir);
        Self { manager, _temp_dir: temp_dir }
    }

    /// Open a second manager on the same file, as a restarted process would.
    pub fn reopen(&self) -> Arc<DbManager> {
        Self::open(&self._temp_dir)
    }

    pub fn store(&self) -> Arc<SqliteKeyValueStore> {
        Arc::new(SqliteKeyValueStore::new(Arc::clone(&self.manager)))
    }

    fn open(temp_dir: &TempDir) -> Arc<DbManager> {
        let manager = DbManager::new(temp_dir.path().join("mindset.db"), 2)
            .expect("db manager should be created");
        manager.run_migrations().expect("migrations should run");
        Arc::new(manager)
    }
}

/// Session over `manager` with a clock fixed at 2024-03-06 09:00.
pub async fn sqlite_session(manager: Arc<DbManager>) -> MindsetSession {
    let local = NaiveDate::from_ymd_opt(2024, 3, 6)
        .and_then(|d| d.and_hms_opt(9, 0, 0))
        .expect("valid timestamp");
    MindsetSession::load(
        Arc::new(SqliteKeyValueStore::new(manager)),
        Arc::new(UnconfiguredGenerator),
        Arc::new(FixedClock::new(1_709_715_600_000, local)),
        SessionOptions::default(),
    )
    .await
}
