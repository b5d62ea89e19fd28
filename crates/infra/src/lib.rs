//! # Mindset Infrastructure
//!
//! Infrastructure implementations of core ports.
//!
//! This crate contains:
//! - SQLite key/value store behind an r2d2 pool
//! - In-memory key/value store
//! - HTTP client with retry
//! - Gemini quote generator
//! - Configuration loading from env and files
//!
//! ## Architecture
//! - Implements traits defined in `mindset-core`
//! - Contains all "impure" code (I/O, network, filesystem)

pub mod config;
pub mod database;
pub mod errors;
pub mod http;
pub mod integrations;
pub mod storage;

// Re-export commonly used items
pub use database::{DbManager, SqliteKeyValueStore};
pub use errors::InfraError;
pub use http::{HttpClient, HttpClientBuilder};
pub use integrations::GeminiClient;
pub use storage::InMemoryKeyValueStore;
