//! Persisted store access
//!
//! `ports` defines the raw key/value capability; `records` layers typed,
//! fail-closed decoding on top of it.

pub mod ports;
pub mod records;

pub use records::RecordStore;
