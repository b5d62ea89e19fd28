//! Google Gemini integration for quote generation
//!
//! [`GeminiClient`] implements the core `QuoteGenerator` port on top of the
//! `generateContent` endpoint:
//!
//! - `POST {api_url}/models/{model}:generateContent`
//! - API key in the `x-goog-api-key` header
//! - JSON mode (`responseMimeType: application/json`) with a response schema
//!   of `{text, author, category}`
//!
//! # Error Handling
//!
//! - **401/403**: `GenerationError::Authentication`
//! - **429**: `GenerationError::RateLimit`, honouring `Retry-After`
//! - **Other non-2xx**: `GenerationError::Api`
//! - **No candidate text**: `GenerationError::EmptyResponse`
//! - **Text that is not the quote schema**: `GenerationError::InvalidResponse`
//!
//! Transport failures are retried by [`crate::http::HttpClient`] when it was
//! built with more than one attempt.
//!
//! # Usage
//!
//! ```no_run
//! use mindset_core::{DailyQuoteRequest, DateContext, GenerationRequest, QuoteGenerator};
//! use mindset_domain::HierarchyLevel;
//! use mindset_infra::http::HttpClient;
//! use mindset_infra::integrations::gemini::GeminiClient;
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GeminiClient::new(std::env::var("GEMINI_API_KEY")?, HttpClient::new()?);
//! let request = GenerationRequest::Daily(DailyQuoteRequest {
//!     level: HierarchyLevel::Cognitive,
//!     genres: vec!["Wisdom".into()],
//!     context: DateContext::default(),
//! });
//! let quote = client.generate(&request).await?;
//! println!("{} - {}", quote.text, quote.author);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod types;

pub use client::{build_daily_prompt, build_reward_prompt, GeminiClient};
