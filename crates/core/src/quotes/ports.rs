//! Port interface for quote generation

use async_trait::async_trait;
use mindset_domain::{HierarchyLevel, MindsetError, QuoteTriple, RewardMode};
use thiserror::Error;

use super::context::DateContext;

/// Inputs for the quote shown on the home screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyQuoteRequest {
    pub level: HierarchyLevel,
    pub genres: Vec<String>,
    pub context: DateContext,
}

/// Inputs for a personalized reward quote
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewardQuoteRequest {
    /// Newest journal contents, already truncated
    pub journal_excerpts: Vec<String>,
    /// Levels the user is not currently focused on
    pub ignored_levels: Vec<HierarchyLevel>,
    pub preferred_genres: Vec<String>,
    pub mode: RewardMode,
}

/// A single generation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationRequest {
    Daily(DailyQuoteRequest),
    Reward(RewardQuoteRequest),
}

/// Why a generator could not produce a quote
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// No API key is configured
    #[error("quote generation is not configured")]
    NotConfigured,

    #[error("network error: {0}")]
    Network(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Retry-after in seconds
    #[error("rate limit exceeded, retry after {0}s")]
    RateLimit(u64),

    #[error("authentication failed")]
    Authentication,

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("empty response")]
    EmptyResponse,
}

impl From<GenerationError> for MindsetError {
    fn from(err: GenerationError) -> Self {
        match err {
            GenerationError::NotConfigured => MindsetError::Config(err.to_string()),
            GenerationError::Network(_) => MindsetError::Network(err.to_string()),
            other => MindsetError::Generation(other.to_string()),
        }
    }
}

/// Produces a quote triple for a request
#[async_trait]
pub trait QuoteGenerator: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> Result<QuoteTriple, GenerationError>;
}
