//! Application context - dependency injection container

use std::sync::Arc;

use mindset_core::{
    Clock, KeyValueStore, MindsetSession, QuoteGenerator, SessionOptions, SystemClock,
    UnconfiguredGenerator,
};
use mindset_domain::{Config, Result, StorageBackend};
use mindset_infra::{DbManager, GeminiClient, InMemoryKeyValueStore, SqliteKeyValueStore};
use tracing::info;

/// Application context - holds the configuration and the session
pub struct AppContext {
    pub config: Config,
    pub session: MindsetSession,
}

impl AppContext {
    /// Create a context on the system clock
    pub async fn new(config: Config) -> Result<Self> {
        Self::with_clock(config, Arc::new(SystemClock)).await
    }

    /// Create a context with a custom clock
    ///
    /// Tests use this to get stable ids and timestamps.
    pub async fn with_clock(config: Config, clock: Arc<dyn Clock>) -> Result<Self> {
        let store = build_store(&config)?;
        let generator = build_generator(&config)?;
        let options = SessionOptions::from_config(&config);

        let session = MindsetSession::load(store, generator, clock, options).await;

        info!(
            backend = %config.storage.backend,
            generation_configured = config.generation.is_configured(),
            "application context ready"
        );

        Ok(Self { config, session })
    }
}

fn build_store(config: &Config) -> Result<Arc<dyn KeyValueStore>> {
    match config.storage.backend {
        StorageBackend::Memory => {
            info!("using in-memory store, nothing will be persisted");
            Ok(Arc::new(InMemoryKeyValueStore::new()))
        }
        StorageBackend::Sqlite => {
            let db = Arc::new(DbManager::new(&config.storage.path, config.storage.pool_size)?);
            db.run_migrations()?;
            db.health_check()?;
            info!(path = %db.path().display(), "using SQLite store");
            Ok(Arc::new(SqliteKeyValueStore::new(db)))
        }
    }
}

fn build_generator(config: &Config) -> Result<Arc<dyn QuoteGenerator>> {
    match GeminiClient::from_settings(&config.generation)? {
        Some(client) => {
            info!(model = client.model(), "quote generation enabled");
            Ok(Arc::new(client))
        }
        None => {
            info!("no API key configured, quotes will use fallbacks");
            Ok(Arc::new(UnconfiguredGenerator))
        }
    }
}
