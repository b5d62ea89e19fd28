//! # Mindset Domain
//!
//! Business domain types and models for Mindset.
//!
//! This crate contains:
//! - Domain data types (Quote, JournalEntry, UserProgress, etc.)
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Domain constants (storage keys, milestones, fallback quotes)
//!
//! ## Architecture
//! - No dependencies on other Mindset crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
