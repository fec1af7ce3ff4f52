//! Gemini REST provider integration.
//!
//! Split into the wire types for `generateContent`, the HTTP client, the
//! response classifier that turns provider safety signals into a tagged
//! verdict, and the model fallback chain that decides which model actually
//! answers a request.

mod classify;
mod client;
mod fallback;
mod types;

pub use classify::{classify, hard_block_reply, Verdict, SOFT_BLOCK_REPLY};
pub use client::{GeminiClient, LlmClient, MockLlmClient};
pub use fallback::{
    ChainReply, FallbackChain, ReplySource, LEGACY_MODELS, PIN_EVICTION_THRESHOLD, PRIMARY_MODELS,
};
pub use types::{
    Candidate, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part,
    PromptFeedback,
};

#[derive(Debug, thiserror::Error)]
pub enum GeminiError {
    #[error("Failed to connect to the Gemini API at {0}")]
    Connection(String),

    #[error("Gemini request timed out after {0}s")]
    Timeout(u64),

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("Gemini API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Failed to parse Gemini response: {0}")]
    ResponseParsing(String),
}
