//! Domain types and models
//!
//! Field names serialize in camelCase so persisted records stay readable by
//! the web and mobile front ends that share the same store layout.

pub mod hierarchy;
pub mod journal;
pub mod progress;
pub mod quote;

pub use hierarchy::HierarchyLevel;
pub use journal::{JournalDraft, JournalEntry, JournalQuery, SortOption, TagFilter};
pub use progress::UserProgress;
pub use quote::{FallbackQuote, Quote, QuoteTriple, QuoteType, RewardMode};
