//! Wire types for the Gemini `generateContent` REST endpoint (v1).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

impl GenerateContentRequest {
    pub fn new(contents: Vec<Content>) -> Self {
        Self {
            contents,
            generation_config: GenerationConfig::default(),
        }
    }
}

/// One conversation turn as the provider sees it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    pub role: String,
    pub parts: Vec<Part>,
}

impl Content {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            parts: vec![Part { text: text.into() }],
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: "model".to_string(),
            parts: vec![Part { text: text.into() }],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

/// Sampling parameters sent with every request. Kept conservative so
/// pharmacy answers stay consistent between retries.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub max_output_tokens: u32,
    pub temperature: f64,
    pub top_p: f64,
    pub top_k: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            max_output_tokens: 1000,
            temperature: 0.5,
            top_p: 0.8,
            top_k: 40,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    pub candidates: Option<Vec<Candidate>>,
    pub prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<Content>,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    pub block_reason: Option<String>,
}

impl GenerateContentResponse {
    /// Successful response carrying one text candidate.
    pub fn with_text(text: &str) -> Self {
        Self {
            candidates: Some(vec![Candidate {
                content: Some(Content::model(text)),
                finish_reason: Some("STOP".to_string()),
            }]),
            prompt_feedback: None,
        }
    }

    /// Prompt-level refusal with the given block reason.
    pub fn blocked(reason: &str) -> Self {
        Self {
            candidates: None,
            prompt_feedback: Some(PromptFeedback {
                block_reason: Some(reason.to_string()),
            }),
        }
    }

    /// Candidate that stopped for the given finish reason without any text.
    pub fn finished(finish_reason: &str) -> Self {
        Self {
            candidates: Some(vec![Candidate {
                content: None,
                finish_reason: Some(finish_reason.to_string()),
            }]),
            prompt_feedback: None,
        }
    }

    /// Response with neither candidates nor prompt feedback.
    pub fn empty() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_with_camel_case_keys() {
        let request = GenerateContentRequest::new(vec![Content::user("olá")]);
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["contents"][0]["role"], "user");
        assert_eq!(json["contents"][0]["parts"][0]["text"], "olá");
        assert_eq!(json["generationConfig"]["maxOutputTokens"], 1000);
        assert_eq!(json["generationConfig"]["temperature"], 0.5);
        assert_eq!(json["generationConfig"]["topP"], 0.8);
        assert_eq!(json["generationConfig"]["topK"], 40);
    }

    #[test]
    fn response_deserializes_provider_payload() {
        let raw = r#"{
            "candidates": [
                {"content": {"role": "model", "parts": [{"text": "Olá!"}]}, "finishReason": "STOP"}
            ]
        }"#;
        let response: GenerateContentResponse = serde_json::from_str(raw).unwrap();

        let candidate = &response.candidates.unwrap()[0];
        assert_eq!(candidate.finish_reason.as_deref(), Some("STOP"));
        assert_eq!(candidate.content.as_ref().unwrap().parts[0].text, "Olá!");
        assert!(response.prompt_feedback.is_none());
    }

    #[test]
    fn response_deserializes_block_feedback() {
        let raw = r#"{"promptFeedback": {"blockReason": "SAFETY"}}"#;
        let response: GenerateContentResponse = serde_json::from_str(raw).unwrap();

        assert!(response.candidates.is_none());
        assert_eq!(
            response.prompt_feedback.unwrap().block_reason.as_deref(),
            Some("SAFETY")
        );
    }
}
