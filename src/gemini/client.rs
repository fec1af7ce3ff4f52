use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use super::types::{Content, GenerateContentRequest, GenerateContentResponse};
use super::GeminiError;

/// Seam between the fallback chain and the provider.
#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn generate_content(
        &self,
        model: &str,
        contents: &[Content],
    ) -> Result<GenerateContentResponse, GeminiError>;
}

/// Gemini HTTP client for the v1 REST API.
pub struct GeminiClient {
    api_base: String,
    api_key: String,
    client: reqwest::Client,
    timeout_secs: u64,
}

impl GeminiClient {
    pub fn new(api_base: &str, api_key: &str, timeout_secs: u64) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            api_base: api_base.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            client,
            timeout_secs,
        }
    }
}

/// Error body shape the Gemini API returns alongside non-2xx statuses.
#[derive(Deserialize)]
struct ProviderErrorBody {
    error: ProviderErrorDetail,
}

#[derive(Deserialize)]
struct ProviderErrorDetail {
    message: String,
}

#[async_trait]
impl LlmClient for GeminiClient {
    async fn generate_content(
        &self,
        model: &str,
        contents: &[Content],
    ) -> Result<GenerateContentResponse, GeminiError> {
        // The key rides in the query string, so the URL must never be logged.
        let url = format!(
            "{}/v1/models/{}:generateContent?key={}",
            self.api_base, model, self.api_key
        );
        let body = GenerateContentRequest::new(contents.to_vec());

        debug!(model = %model, turns = contents.len(), "Calling Gemini generateContent");

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    GeminiError::Connection(self.api_base.clone())
                } else if e.is_timeout() {
                    GeminiError::Timeout(self.timeout_secs)
                } else {
                    GeminiError::HttpClient(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Prefer the provider's own message when the body is its
            // standard error envelope.
            let message = serde_json::from_str::<ProviderErrorBody>(&body)
                .map(|parsed| parsed.error.message)
                .unwrap_or(body);
            return Err(GeminiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json()
            .await
            .map_err(|e| GeminiError::ResponseParsing(e.to_string()))
    }
}

/// Mock LLM client for testing: serves scripted outcomes in order and
/// records which model each call asked for.
pub struct MockLlmClient {
    script: Mutex<VecDeque<Result<GenerateContentResponse, GeminiError>>>,
    calls: Mutex<Vec<String>>,
}

impl MockLlmClient {
    pub fn new() -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn push(&self, outcome: Result<GenerateContentResponse, GeminiError>) {
        self.script.lock().unwrap().push_back(outcome);
    }

    /// Models requested so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl Default for MockLlmClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn generate_content(
        &self,
        model: &str,
        _contents: &[Content],
    ) -> Result<GenerateContentResponse, GeminiError> {
        self.calls.lock().unwrap().push(model.to_string());
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(GeminiError::HttpClient("mock script exhausted".to_string())))
    }
}
