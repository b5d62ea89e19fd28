//! # Mindset Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port/adapter interfaces (traits) for the persisted store, quote
//!   generation and the clock
//! - The progress (gamification) engine and the journal query engine
//! - The session controller that owns application state
//!
//! ## Architecture Principles
//! - Only depends on `mindset-domain`
//! - No database, HTTP, or platform code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod clock;
pub mod journal;
pub mod progress;
pub mod quotes;
pub mod session;
pub mod storage;

#[cfg(test)]
mod testing;

// Re-export specific items to avoid ambiguity
pub use clock::{Clock, FixedClock, SystemClock};
pub use journal::{JournalBook, UpsertOutcome};
pub use progress::{MilestonePolicy, RewardError};
pub use quotes::ports::{
    DailyQuoteRequest, GenerationError, GenerationRequest, QuoteGenerator, RewardQuoteRequest,
};
pub use quotes::{greeting, DateContext, QuoteService, UnconfiguredGenerator};
pub use session::{AppState, FavoriteToggle, MindsetSession, SessionOptions};
pub use storage::ports::KeyValueStore;
pub use storage::RecordStore;
