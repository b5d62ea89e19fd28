//! Progress and reward milestones

pub mod engine;

pub use engine::{MilestonePolicy, RewardError};
