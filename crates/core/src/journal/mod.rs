//! Journal storage and querying

pub mod book;
pub mod query;

pub use book::{JournalBook, UpsertOutcome};
pub use query::{available_tags, query};
