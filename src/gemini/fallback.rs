//! Model fallback chain.
//!
//! The provider regularly retires model identifiers, so a single hardcoded
//! model name is a liability. The chain sweeps an ordered candidate list
//! until one model answers, then pins the winner so later requests cost a
//! single call. A pinned model that keeps failing is evicted and the sweep
//! starts over.
//!
//! Safety refusals are final: once a model hard- or soft-blocks, the chain
//! stops and the substituted refusal is the answer. Retrying another model
//! on a policy signal could hand the user the very medical advice the
//! block was meant to withhold.

use std::sync::{Arc, RwLock};

use tracing::{info, warn};

use super::classify::{classify, hard_block_reply, Verdict, SOFT_BLOCK_REPLY};
use super::client::LlmClient;
use super::types::Content;

/// Current production models, in preference order.
pub const PRIMARY_MODELS: &[&str] = &["gemini-2.5-flash", "gemini-2.5-pro"];

/// Retired identifiers still probed at the head of a full sweep; expected
/// to fail fast with a 404 once the provider drops them.
pub const LEGACY_MODELS: &[&str] = &["gemini-pro", "gemini-1.0-pro"];

/// Consecutive pinned-model failures tolerated before the pin is evicted.
pub const PIN_EVICTION_THRESHOLD: u32 = 2;

fn full_sequence() -> impl Iterator<Item = &'static str> {
    LEGACY_MODELS.iter().chain(PRIMARY_MODELS.iter()).copied()
}

#[derive(Debug, Clone)]
struct ModelPin {
    model: String,
    consecutive_failures: u32,
}

/// Where the final text of a chain run came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplySource {
    /// A model produced usable text.
    Model(String),
    /// A safety refusal was substituted for the model output.
    Refusal,
    /// Every candidate failed; static degraded-service text.
    Degraded,
}

#[derive(Debug, Clone)]
pub struct ChainReply {
    pub text: String,
    pub source: ReplySource,
}

pub struct FallbackChain {
    client: Arc<dyn LlmClient>,
    pin: RwLock<Option<ModelPin>>,
}

impl FallbackChain {
    pub fn new(client: Arc<dyn LlmClient>) -> Self {
        Self {
            client,
            pin: RwLock::new(None),
        }
    }

    /// Currently pinned model, if any.
    pub fn pinned_model(&self) -> Option<String> {
        self.pin
            .read()
            .ok()
            .and_then(|pin| pin.as_ref().map(|p| p.model.clone()))
    }

    /// Run the chain over the given conversation and return the final
    /// text. Never fails: the floor is a static degraded-service reply.
    pub async fn generate(&self, contents: &[Content]) -> ChainReply {
        // Step 1: pinned fast path. A responsive pin answers in one call;
        // a failing pin is recorded and the request falls through to the
        // full sweep instead of failing outright.
        if let Some(model) = self.pinned_model() {
            match self.try_model(&model, contents).await {
                Outcome::Answered(reply) => {
                    self.reset_pin_failures(&model);
                    return reply;
                }
                Outcome::Failed => self.record_pin_failure(&model),
            }
        }

        // Step 2: full sweep in fixed order.
        let mut tried: Vec<&str> = Vec::new();
        for model in full_sequence() {
            tried.push(model);
            match self.try_model(model, contents).await {
                Outcome::Answered(reply) => {
                    if let ReplySource::Model(_) = reply.source {
                        self.pin(model);
                        info!(model = %model, "Model pinned for subsequent requests");
                    }
                    return reply;
                }
                Outcome::Failed => continue,
            }
        }

        // Step 3: nothing answered.
        warn!(tried = ?tried, "All candidate models failed");
        ChainReply {
            text: degraded_reply(&tried),
            source: ReplySource::Degraded,
        }
    }

    /// One provider call plus classification. `Answered` carries a final
    /// reply (text or refusal); `Failed` means move on.
    async fn try_model(&self, model: &str, contents: &[Content]) -> Outcome {
        let response = match self.client.generate_content(model, contents).await {
            Ok(response) => response,
            Err(err) => {
                warn!(model = %model, error = %err, "Model call failed");
                return Outcome::Failed;
            }
        };

        match classify(&response) {
            Verdict::Success(text) => {
                info!(model = %model, chars = text.len(), "Model answered");
                Outcome::Answered(ChainReply {
                    text,
                    source: ReplySource::Model(model.to_string()),
                })
            }
            Verdict::HardBlock { reason } => {
                info!(model = %model, reason = %reason, "Prompt blocked by provider policy");
                Outcome::Answered(ChainReply {
                    text: hard_block_reply(&reason),
                    source: ReplySource::Refusal,
                })
            }
            Verdict::SoftBlock { finish_reason } => {
                info!(model = %model, finish_reason = %finish_reason, "Generation filtered by provider policy");
                Outcome::Answered(ChainReply {
                    text: SOFT_BLOCK_REPLY.to_string(),
                    source: ReplySource::Refusal,
                })
            }
            Verdict::StructuralFailure { detail } => {
                warn!(model = %model, detail = %detail, "Unusable response from model");
                Outcome::Failed
            }
        }
    }

    fn pin(&self, model: &str) {
        if let Ok(mut pin) = self.pin.write() {
            *pin = Some(ModelPin {
                model: model.to_string(),
                consecutive_failures: 0,
            });
        }
    }

    /// The pinned model responded (with text or a refusal), so its failure
    /// streak is over.
    fn reset_pin_failures(&self, model: &str) {
        if let Ok(mut guard) = self.pin.write() {
            if let Some(pin) = guard.as_mut() {
                if pin.model == model {
                    pin.consecutive_failures = 0;
                }
            }
        }
    }

    fn record_pin_failure(&self, model: &str) {
        if let Ok(mut guard) = self.pin.write() {
            if let Some(pin) = guard.as_mut() {
                if pin.model == model {
                    pin.consecutive_failures += 1;
                    if pin.consecutive_failures >= PIN_EVICTION_THRESHOLD {
                        warn!(
                            model = %model,
                            failures = pin.consecutive_failures,
                            "Evicting pinned model"
                        );
                        *guard = None;
                    }
                }
            }
        }
    }
}

enum Outcome {
    Answered(ChainReply),
    Failed,
}

fn degraded_reply(tried: &[&str]) -> String {
    format!(
        "🤖 Nossos modelos de IA estão temporariamente indisponíveis (tentados: {}). \
         Por favor, tente novamente em alguns instantes.",
        tried.join(", ")
    )
}
