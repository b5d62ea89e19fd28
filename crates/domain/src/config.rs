//! Configuration structures
//!
//! Every section has defaults so partial JSON/TOML files load cleanly.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_GEMINI_API_URL, DEFAULT_GEMINI_MODEL, JOURNALS_REQUIRED_FOR_REWARD,
    SAVES_REQUIRED_FOR_REWARD,
};

/// Root application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub storage: StorageConfig,
    pub generation: GenerationConfig,
    pub milestones: MilestoneConfig,
    pub profile: ProfileConfig,
}

/// Which persisted store adapter backs the session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Process-lifetime store, nothing survives a restart
    Memory,
    #[default]
    Sqlite,
}

crate::impl_domain_str_conversions!(StorageBackend {
    Memory => "memory",
    Sqlite => "sqlite",
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    pub path: String,
    pub pool_size: u32,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { backend: StorageBackend::Sqlite, path: "mindset.db".to_string(), pool_size: 4 }
    }
}

/// Quote generation service settings
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// API key; generation falls back to canned quotes when absent
    pub api_key: Option<String>,
    pub model: String,
    pub api_url: String,
    pub timeout_secs: u64,
    /// Total attempts per request (1 = no retries)
    pub max_attempts: usize,
}

impl GenerationConfig {
    /// True when a non-blank API key is present.
    pub fn is_configured(&self) -> bool {
        self.api_key.as_deref().is_some_and(|key| !key.trim().is_empty())
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_GEMINI_MODEL.to_string(),
            api_url: DEFAULT_GEMINI_API_URL.to_string(),
            timeout_secs: 30,
            max_attempts: 1,
        }
    }
}

impl fmt::Debug for GenerationConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenerationConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("api_url", &self.api_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("max_attempts", &self.max_attempts)
            .finish()
    }
}

/// Reward thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MilestoneConfig {
    pub journals_required: u32,
    pub saves_required: u32,
}

impl Default for MilestoneConfig {
    fn default() -> Self {
        Self {
            journals_required: JOURNALS_REQUIRED_FOR_REWARD,
            saves_required: SAVES_REQUIRED_FOR_REWARD,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    /// Birthday in `MM-DD` format
    pub birthday: Option<String>,
}
