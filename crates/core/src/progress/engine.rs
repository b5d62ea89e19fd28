//! Gamification engine
//!
//! Pure transitions over [`UserProgress`]. Saving quotes and writing journal
//! entries advance monotonic counters; whenever a counter lands on an exact
//! multiple of its threshold one reward becomes available. Rewards are only
//! spent through [`MilestonePolicy::claim_reward`].
//!
//! The milestone check is an exact modulo test, so a counter that jumps by
//! more than one in a single step can skip a multiple. Every caller here
//! increments by exactly one.

use mindset_domain::constants::{JOURNALS_REQUIRED_FOR_REWARD, SAVES_REQUIRED_FOR_REWARD};
use mindset_domain::{MilestoneConfig, UserProgress};
use thiserror::Error;

/// Claiming failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RewardError {
    #[error("no reward available to claim")]
    NoRewardAvailable,
}

/// Reward thresholds for the two engagement counters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MilestonePolicy {
    journals_required: u32,
    saves_required: u32,
}

impl Default for MilestonePolicy {
    fn default() -> Self {
        Self::new(JOURNALS_REQUIRED_FOR_REWARD, SAVES_REQUIRED_FOR_REWARD)
    }
}

impl MilestonePolicy {
    /// Thresholds below one are raised to one.
    pub fn new(journals_required: u32, saves_required: u32) -> Self {
        Self { journals_required: journals_required.max(1), saves_required: saves_required.max(1) }
    }

    pub fn from_config(config: &MilestoneConfig) -> Self {
        Self::new(config.journals_required, config.saves_required)
    }

    pub fn journals_required(&self) -> u32 {
        self.journals_required
    }

    pub fn saves_required(&self) -> u32 {
        self.saves_required
    }

    /// A favorite was added (never called on removal).
    pub fn record_favorite_added(&self, progress: UserProgress) -> UserProgress {
        let next =
            UserProgress { quotes_saved: progress.quotes_saved.saturating_add(1), ..progress };
        self.evaluate_milestones(next)
    }

    /// A new journal entry was created (never called on edits).
    pub fn record_journal_created(&self, progress: UserProgress) -> UserProgress {
        let next = UserProgress {
            journals_written: progress.journals_written.saturating_add(1),
            ..progress
        };
        self.evaluate_milestones(next)
    }

    /// Grant one reward per counter sitting on a positive multiple of its
    /// threshold. Both checks run in the same pass.
    pub fn evaluate_milestones(&self, progress: UserProgress) -> UserProgress {
        let mut next = progress;

        if Self::on_milestone(progress.journals_written, self.journals_required) {
            next.rewards_available = next.rewards_available.saturating_add(1);
        }
        if Self::on_milestone(progress.quotes_saved, self.saves_required) {
            next.rewards_available = next.rewards_available.saturating_add(1);
        }

        next
    }

    /// Spend one available reward.
    pub fn claim_reward(&self, progress: UserProgress) -> Result<UserProgress, RewardError> {
        if progress.rewards_available == 0 {
            return Err(RewardError::NoRewardAvailable);
        }

        Ok(UserProgress {
            rewards_available: progress.rewards_available - 1,
            total_rewards_claimed: progress.total_rewards_claimed.saturating_add(1),
            ..progress
        })
    }

    fn on_milestone(count: u32, threshold: u32) -> bool {
        count > 0 && count % threshold == 0
    }
}
