//! Generator used when no API key is configured

use async_trait::async_trait;
use mindset_domain::QuoteTriple;

use super::ports::{GenerationError, GenerationRequest, QuoteGenerator};

/// Always reports [`GenerationError::NotConfigured`]
#[derive(Debug, Default, Clone, Copy)]
pub struct UnconfiguredGenerator;

#[async_trait]
impl QuoteGenerator for UnconfiguredGenerator {
    async fn generate(&self, _request: &GenerationRequest) -> Result<QuoteTriple, GenerationError> {
        Err(GenerationError::NotConfigured)
    }
}
