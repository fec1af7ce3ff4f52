//! WhatsApp Cloud API integration: outbound delivery and inbound webhook
//! payload shapes.

mod client;
mod inbound;

pub use client::{MockMessenger, OutboundMessenger, WhatsAppClient, MAX_TEXT_LENGTH};
pub use inbound::{Change, ChangeValue, Entry, InboundMessage, TextBody, WebhookEvent};

#[derive(Debug, thiserror::Error)]
pub enum WhatsAppError {
    #[error("Failed to connect to the WhatsApp API at {0}")]
    Connection(String),

    #[error("WhatsApp request timed out after {0}s")]
    Timeout(u64),

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("WhatsApp API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Failed to parse WhatsApp response: {0}")]
    ResponseParsing(String),
}
