//! Quote generation with fallbacks
//!
//! [`ports::QuoteGenerator`] is the single capability an adapter provides.
//! [`QuoteService`] wraps it and guarantees a quote is always produced.

pub mod context;
pub mod ports;
pub mod service;
pub mod unconfigured;

pub use context::{greeting, DateContext};
pub use service::QuoteService;
pub use unconfigured::UnconfiguredGenerator;
