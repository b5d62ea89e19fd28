//! Gemini API client for quote generation

use std::time::Duration;

use async_trait::async_trait;
use mindset_core::{
    DailyQuoteRequest, GenerationError, GenerationRequest, QuoteGenerator, RewardQuoteRequest,
};
use mindset_domain::constants::{DEFAULT_GEMINI_API_URL, DEFAULT_GEMINI_MODEL, REWARD_AUTHOR};
use mindset_domain::{
    GenerationConfig as GenerationSettings, MindsetError, QuoteTriple, RewardMode,
};
use reqwest::header::RETRY_AFTER;
use reqwest::Method;
use serde_json::json;
use tracing::{debug, info};

use super::types::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part,
    QuotePayload,
};
use crate::http::HttpClient;

const API_KEY_HEADER: &str = "x-goog-api-key";
const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// Gemini `generateContent` client implementing [`QuoteGenerator`]
pub struct GeminiClient {
    http_client: HttpClient,
    api_key: String,
    model: String,
    api_url: String,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>, http_client: HttpClient) -> Self {
        Self {
            http_client,
            api_key: api_key.into(),
            model: DEFAULT_GEMINI_MODEL.to_string(),
            api_url: DEFAULT_GEMINI_API_URL.to_string(),
        }
    }

    /// Build a client from generation settings.
    ///
    /// Returns `None` when no API key is configured.
    pub fn from_settings(settings: &GenerationSettings) -> Result<Option<Self>, MindsetError> {
        let Some(api_key) = settings.api_key.as_deref().filter(|_| settings.is_configured()) else {
            return Ok(None);
        };

        let http_client = HttpClient::builder()
            .timeout(Duration::from_secs(settings.timeout_secs.max(1)))
            .max_attempts(settings.max_attempts)
            .build()?;

        Ok(Some(
            Self::new(api_key.trim(), http_client)
                .with_model(settings.model.clone())
                .with_api_url(settings.api_url.clone()),
        ))
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Override the API base URL (`.../v1beta`).
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.api_url, self.model)
    }

    /// Call `generateContent` and decode the quote JSON the model returns.
    async fn call_api(&self, prompt: String) -> Result<QuoteTriple, GenerationError> {
        let payload = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part { text: Some(prompt) }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: json!({
                    "type": "OBJECT",
                    "properties": {
                        "text": { "type": "STRING" },
                        "author": { "type": "STRING" },
                        "category": { "type": "STRING" }
                    },
                    "required": ["text", "author", "category"]
                }),
            },
        };

        let request = self
            .http_client
            .request(Method::POST, self.endpoint())
            .header(API_KEY_HEADER, &self.api_key)
            .json(&payload);

        let response = self
            .http_client
            .send(request)
            .await
            .map_err(|err| GenerationError::Network(err.to_string()))?;

        let status = response.status();
        debug!(status = status.as_u16(), model = %self.model, "received Gemini response");

        if !status.is_success() {
            return Err(Self::handle_error_status(status.as_u16(), response).await);
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::InvalidResponse(format!("failed to parse body: {e}")))?;

        if let Some(usage) = body.usage_metadata {
            debug!(
                prompt_tokens = usage.prompt_token_count,
                output_tokens = usage.candidates_token_count,
                total_tokens = usage.total_token_count,
                "Gemini token usage"
            );
        }

        let text = body.text().ok_or(GenerationError::EmptyResponse)?;
        let quote: QuotePayload = serde_json::from_str(&text).map_err(|e| {
            GenerationError::InvalidResponse(format!("quote JSON did not match schema: {e}"))
        })?;

        if quote.text.trim().is_empty() {
            return Err(GenerationError::EmptyResponse);
        }

        Ok(QuoteTriple { text: quote.text, author: quote.author, category: quote.category })
    }

    async fn handle_error_status(status: u16, response: reqwest::Response) -> GenerationError {
        let retry_after = response
            .headers()
            .get(RETRY_AFTER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.trim().parse::<u64>().ok());
        let message = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());

        match status {
            401 | 403 => GenerationError::Authentication,
            429 => GenerationError::RateLimit(retry_after.unwrap_or(DEFAULT_RETRY_AFTER_SECS)),
            _ => GenerationError::Api { status, message },
        }
    }
}

#[async_trait]
impl QuoteGenerator for GeminiClient {
    async fn generate(&self, request: &GenerationRequest) -> Result<QuoteTriple, GenerationError> {
        let (kind, prompt) = match request {
            GenerationRequest::Daily(daily) => ("daily", build_daily_prompt(daily)),
            GenerationRequest::Reward(reward) => ("reward", build_reward_prompt(reward)),
        };

        info!(kind, model = %self.model, "requesting quote from Gemini");
        self.call_api(prompt).await
    }
}

/// Prompt for the home-screen quote.
pub fn build_daily_prompt(request: &DailyQuoteRequest) -> String {
    let level = request.level.as_str();
    let genre_phrase = if request.genres.is_empty() {
        "focusing on general wisdom".to_string()
    } else {
        format!("focusing on themes like {}", request.genres.join(", "))
    };

    let special_context = if let Some(holiday) = &request.context.holiday {
        format!(
            "The user is celebrating {holiday}. Make the quote relevant to this holiday while \
             still fitting the hierarchy level if possible."
        )
    } else if request.context.is_birthday {
        "It is the user's birthday. Offer a warm, forward-looking quote about growth and the \
         year ahead."
            .to_string()
    } else if request.context.is_sunday {
        "It is Sunday. Provide a reflective, 'Quote of the Week' style wisdom to start the week \
         right."
            .to_string()
    } else {
        String::new()
    };

    format!(
        "Generate a profound and inspiring quote suitable for a person currently at the Maslow's \
         Hierarchy level of \"{level}\".\n\
         The user is interested in {genre_phrase}.\n\
         {special_context}\n\n\
         IMPORTANT:\n\
         - Avoid \"Unknown\" authors if possible. Find real quotes from philosophers, authors, \
         leaders, or scientists.\n\
         - Ensure the quote aligns with the specific need of \"{level}\".\n\n\
         Return the response strictly as a JSON object with the following schema:\n\
         {{\"text\": \"The quote content\", \"author\": \"The person who said it\", \
         \"category\": \"A single word category fitting the quote\"}}"
    )
}

/// Prompt for a claimed reward.
pub fn build_reward_prompt(request: &RewardQuoteRequest) -> String {
    let journal_context = request.journal_excerpts.join("... ");
    let preferences = request.preferred_genres.join(", ");
    let instruction = match request.mode {
        RewardMode::Kind => "COMFORT & VALIDATION. Reinforce what they are doing well. Use their \
                             preferred genres."
            .to_string(),
        RewardMode::Helpful => {
            let ignored: Vec<&str> = request.ignored_levels.iter().map(|l| l.as_str()).collect();
            format!(
                "GROWTH & CHALLENGE. Gently nudge them towards areas they might be ignoring \
                 (like {}). Be helpful but challenging.",
                ignored.join(", ")
            )
        }
    };
    let category = request.mode.category();

    format!(
        "You are a wise mentor. The user has earned a reward.\n\n\
         User Context from recent journals: \"{journal_context}\"\n\
         User Preferences: {preferences}\n\n\
         Goal: Generate a custom, personal note or quote for this user.\n\
         Mode: {instruction}\n\n\
         Return the response strictly as a JSON object:\n\
         {{\"text\": \"The custom note/quote\", \"author\": \"{REWARD_AUTHOR}\", \
         \"category\": \"{category}\"}}"
    )
}

#[cfg(test)]
mod tests {
    use mindset_core::DateContext;
    use mindset_domain::HierarchyLevel;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    const GENERATE_PATH: &str = "/v1beta/models/gemini-2.5-flash:generateContent";

    fn test_client(server: &MockServer) -> GeminiClient {
        let http_client = HttpClient::builder()
            .timeout(Duration::from_secs(5))
            .max_attempts(1)
            .build()
            .expect("http client");

        GeminiClient::new("test-api-key", http_client)
            .with_api_url(format!("{}/v1beta", server.uri()))
    }

    fn daily_request(context: DateContext) -> GenerationRequest {
        GenerationRequest::Daily(DailyQuoteRequest {
            level: HierarchyLevel::Safety,
            genres: vec!["Peace".into(), "Trust".into()],
            context,
        })
    }

    fn reward_request(mode: RewardMode) -> RewardQuoteRequest {
        RewardQuoteRequest {
            journal_excerpts: vec!["walked by the river".into(), "called mom".into()],
            ignored_levels: vec![HierarchyLevel::Esteem, HierarchyLevel::Transcendence],
            preferred_genres: vec!["Nature".into()],
            mode,
        }
    }

    fn candidate_body(text: &str) -> serde_json::Value {
        json!({
            "candidates": [{ "content": { "role": "model", "parts": [{ "text": text }] } }],
            "usageMetadata": {
                "promptTokenCount": 80,
                "candidatesTokenCount": 20,
                "totalTokenCount": 100
            }
        })
    }

    #[tokio::test]
    async fn generates_quote_from_structured_reply() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .and(header("x-goog-api-key", "test-api-key"))
            .and(body_partial_json(json!({
                "generationConfig": { "responseMimeType": "application/json" }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(candidate_body(
                r#"{"text":"Peace comes from within.","author":"Buddha","category":"Peace"}"#,
            )))
            .expect(1)
            .mount(&server)
            .await;

        let triple = test_client(&server)
            .generate(&daily_request(DateContext::default()))
            .await
            .expect("quote");

        assert_eq!(triple.text, "Peace comes from within.");
        assert_eq!(triple.author, "Buddha");
        assert_eq!(triple.category, "Peace");
    }

    #[tokio::test]
    async fn authentication_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .respond_with(ResponseTemplate::new(403).set_body_string("API key not valid"))
            .mount(&server)
            .await;

        let result = test_client(&server).generate(&daily_request(DateContext::default())).await;

        assert_eq!(result, Err(GenerationError::Authentication));
    }

    #[tokio::test]
    async fn rate_limit_reads_retry_after() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .respond_with(ResponseTemplate::new(429).insert_header("retry-after", "12"))
            .mount(&server)
            .await;

        let result = test_client(&server).generate(&daily_request(DateContext::default())).await;

        assert_eq!(result, Err(GenerationError::RateLimit(12)));
    }

    #[tokio::test]
    async fn server_error_is_an_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .respond_with(ResponseTemplate::new(500).set_body_string("backend unavailable"))
            .mount(&server)
            .await;

        let result = test_client(&server).generate(&daily_request(DateContext::default())).await;

        match result {
            Err(GenerationError::Api { status, message }) => {
                assert_eq!(status, 500);
                assert!(message.contains("backend"));
            }
            other => panic!("expected API error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn reply_without_candidates_is_empty() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
            .mount(&server)
            .await;

        let result = test_client(&server).generate(&daily_request(DateContext::default())).await;

        assert_eq!(result, Err(GenerationError::EmptyResponse));
    }

    #[tokio::test]
    async fn non_json_quote_is_invalid() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(candidate_body("not json")))
            .mount(&server)
            .await;

        let result = test_client(&server).generate(&daily_request(DateContext::default())).await;

        assert!(matches!(result, Err(GenerationError::InvalidResponse(_))));
    }

    #[test]
    fn daily_prompt_mentions_level_genres_and_holiday() {
        let GenerationRequest::Daily(request) = daily_request(DateContext {
            is_sunday: true,
            holiday: Some("Earth Day".into()),
            is_birthday: false,
        }) else {
            unreachable!()
        };

        let prompt = build_daily_prompt(&request);

        assert!(prompt.contains("\"Safety\""));
        assert!(prompt.contains("focusing on themes like Peace, Trust"));
        assert!(prompt.contains("celebrating Earth Day"));
        assert!(!prompt.contains("Quote of the Week"));
    }

    #[test]
    fn daily_prompt_without_genres_asks_for_general_wisdom() {
        let request = DailyQuoteRequest {
            level: HierarchyLevel::BelongingAndLove,
            genres: vec![],
            context: DateContext { is_sunday: true, ..DateContext::default() },
        };

        let prompt = build_daily_prompt(&request);

        assert!(prompt.contains("focusing on general wisdom"));
        assert!(prompt.contains("Quote of the Week"));
        assert!(prompt.contains("\"Belonging and Love\""));
    }

    #[test]
    fn reward_prompt_depends_on_mode() {
        let kind = build_reward_prompt(&reward_request(RewardMode::Kind));
        assert!(kind.contains("COMFORT & VALIDATION"));
        assert!(kind.contains("walked by the river... called mom"));
        assert!(kind.contains("\"Comfort\""));
        assert!(!kind.contains("Transcendence"));

        let helpful = build_reward_prompt(&reward_request(RewardMode::Helpful));
        assert!(helpful.contains("GROWTH & CHALLENGE"));
        assert!(helpful.contains("(like Esteem, Transcendence)"));
        assert!(helpful.contains("\"Growth\""));
        assert!(helpful.contains(REWARD_AUTHOR));
    }

    #[test]
    fn settings_without_key_build_nothing() {
        let settings = GenerationSettings::default();
        assert!(GeminiClient::from_settings(&settings).unwrap().is_none());

        let configured = GenerationSettings {
            api_key: Some("abc".into()),
            model: "gemini-custom".into(),
            ..GenerationSettings::default()
        };
        let client = GeminiClient::from_settings(&configured).unwrap().unwrap();
        assert_eq!(client.model(), "gemini-custom");
    }
}
