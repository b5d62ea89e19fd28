//! Gamification counters

use serde::{Deserialize, Serialize};

/// Engagement counters persisted under `mindset_progress`.
///
/// `quotes_saved` and `journals_written` count events ever recorded, not
/// current collection sizes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProgress {
    pub quotes_saved: u32,
    pub journals_written: u32,
    pub rewards_available: u32,
    pub total_rewards_claimed: u32,
}
