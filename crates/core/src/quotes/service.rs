//! Quote service - generation with a guaranteed result
//!
//! Generation never fails from the caller's point of view. A missing API key
//! yields the "unconfigured" canned quote; any other error, or a reply with no
//! text, yields the "failure" canned quote.

use std::sync::Arc;

use mindset_domain::constants::{
    FALLBACK_DAILY_FAILURE, FALLBACK_DAILY_UNCONFIGURED, FALLBACK_REWARD_FAILURE,
    FALLBACK_REWARD_UNCONFIGURED,
};
use mindset_domain::{FallbackQuote, Quote, QuoteTriple, QuoteType};
use tracing::{debug, warn};

use super::ports::{
    DailyQuoteRequest, GenerationError, GenerationRequest, QuoteGenerator, RewardQuoteRequest,
};
use crate::clock::Clock;

/// Canned quotes for one request kind
struct Fallbacks {
    unconfigured: FallbackQuote,
    failure: FallbackQuote,
}

const DAILY_FALLBACKS: Fallbacks =
    Fallbacks { unconfigured: FALLBACK_DAILY_UNCONFIGURED, failure: FALLBACK_DAILY_FAILURE };

const REWARD_FALLBACKS: Fallbacks =
    Fallbacks { unconfigured: FALLBACK_REWARD_UNCONFIGURED, failure: FALLBACK_REWARD_FAILURE };

/// Wraps a [`QuoteGenerator`] with the fallback contract
#[derive(Clone)]
pub struct QuoteService {
    generator: Arc<dyn QuoteGenerator>,
    clock: Arc<dyn Clock>,
}

impl QuoteService {
    pub fn new(generator: Arc<dyn QuoteGenerator>, clock: Arc<dyn Clock>) -> Self {
        Self { generator, clock }
    }

    /// Quote for the home screen, typed by the date context.
    pub async fn daily_quote(&self, request: DailyQuoteRequest) -> Quote {
        let quote_type = request.context.quote_type();
        let holiday = request.context.holiday.clone();
        let triple = self.generate(GenerationRequest::Daily(request), &DAILY_FALLBACKS).await;

        Quote::from_triple(triple, self.clock.now_millis())
            .with_type(quote_type)
            .with_holiday(holiday)
    }

    /// Personalized quote granted when a reward is claimed.
    pub async fn reward_quote(&self, request: RewardQuoteRequest) -> Quote {
        let triple = self.generate(GenerationRequest::Reward(request), &REWARD_FALLBACKS).await;

        Quote::from_triple(triple, self.clock.now_millis()).with_type(QuoteType::Custom)
    }

    async fn generate(&self, request: GenerationRequest, fallbacks: &Fallbacks) -> QuoteTriple {
        match self.generator.generate(&request).await {
            Ok(triple) if !triple.text.trim().is_empty() => {
                debug!(author = %triple.author, "quote generated");
                triple
            }
            Ok(_) => {
                warn!("generator returned a blank quote, using fallback");
                fallbacks.failure.to_triple()
            }
            Err(GenerationError::NotConfigured) => {
                warn!("no generation API key configured, using fallback quote");
                fallbacks.unconfigured.to_triple()
            }
            Err(err) => {
                warn!(error = %err, "quote generation failed, using fallback");
                fallbacks.failure.to_triple()
            }
        }
    }
}
