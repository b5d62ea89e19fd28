//! Non-SQLite store adapters

pub mod memory;

pub use memory::InMemoryKeyValueStore;
