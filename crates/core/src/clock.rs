//! Clock port
//!
//! Entry ids, quote ids and date context all derive from the current time, so
//! the session reads time through this trait instead of calling `chrono`
//! directly.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{Local, NaiveDateTime, Utc};

/// Source of the current time
pub trait Clock: Send + Sync {
    /// Milliseconds since the Unix epoch.
    fn now_millis(&self) -> i64;

    /// Wall-clock time in the user's local timezone.
    fn local_now(&self) -> NaiveDateTime;
}

/// Clock backed by the system time
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }

    fn local_now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Deterministic clock.
///
/// Every call to `now_millis` advances the epoch counter by one millisecond so
/// consecutive saves get distinct ids; `local_now` is fixed.
#[derive(Debug)]
pub struct FixedClock {
    millis: AtomicI64,
    local: NaiveDateTime,
}

impl FixedClock {
    pub fn new(start_millis: i64, local: NaiveDateTime) -> Self {
        Self { millis: AtomicI64::new(start_millis), local }
    }

    /// Jump the epoch counter forward.
    pub fn advance(&self, millis: i64) {
        self.millis.fetch_add(millis, Ordering::SeqCst);
    }
}

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.millis.fetch_add(1, Ordering::SeqCst)
    }

    fn local_now(&self) -> NaiveDateTime {
        self.local
    }
}
