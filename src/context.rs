//! Shared service state.
//!
//! One `BotContext` is built at startup and threaded through every handler
//! behind an `Arc`. Collaborators are injected explicitly, so tests swap
//! the HTTP clients for scripted mocks without touching globals.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::config::Settings;
use crate::conversation::ConversationStore;
use crate::gemini::{FallbackChain, GeminiClient, LlmClient};
use crate::whatsapp::{OutboundMessenger, WhatsAppClient};

pub struct BotContext {
    pub settings: Settings,
    pub store: ConversationStore,
    pub chain: FallbackChain,
    pub messenger: Arc<dyn OutboundMessenger>,
    pub started_at: DateTime<Utc>,
}

impl BotContext {
    pub fn new(
        settings: Settings,
        llm: Arc<dyn LlmClient>,
        messenger: Arc<dyn OutboundMessenger>,
    ) -> Self {
        Self {
            settings,
            store: ConversationStore::default(),
            chain: FallbackChain::new(llm),
            messenger,
            started_at: Utc::now(),
        }
    }

    /// Production wiring: real Gemini and WhatsApp clients built from the
    /// environment settings.
    pub fn from_settings(settings: Settings) -> Self {
        let llm: Arc<dyn LlmClient> = Arc::new(GeminiClient::new(
            &settings.gemini_api_base,
            &settings.gemini_api_key,
            settings.request_timeout_secs,
        ));
        let messenger: Arc<dyn OutboundMessenger> = Arc::new(WhatsAppClient::new(
            &settings.whatsapp_api_base,
            &settings.whatsapp_api_version,
            &settings.whatsapp_phone_number_id,
            &settings.whatsapp_access_token,
            settings.request_timeout_secs,
        ));
        Self::new(settings, llm, messenger)
    }
}

/// Context wired to scripted mocks, plus handles to drive them.
#[cfg(test)]
pub(crate) fn test_context() -> (
    BotContext,
    Arc<crate::gemini::MockLlmClient>,
    Arc<crate::whatsapp::MockMessenger>,
) {
    let llm = Arc::new(crate::gemini::MockLlmClient::new());
    let messenger = Arc::new(crate::whatsapp::MockMessenger::new());
    let ctx = BotContext::new(Settings::for_tests(), llm.clone(), messenger.clone());
    (ctx, llm, messenger)
}
