//! # Mindset App
//!
//! Command-line front end - argument parsing, wiring and command handlers.
//!
//! This crate contains:
//! - CLI definition (`clap` derive)
//! - Application context (dependency injection)
//! - Command handlers that drive the session and render plain text
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires up the hexagonal architecture

pub mod cli;
pub mod commands;
pub mod context;
pub mod utils;

// Re-export for convenience
pub use cli::{Cli, Command, JournalCommand, QuoteActions};
pub use commands::execute;
pub use context::AppContext;
