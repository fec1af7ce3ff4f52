use std::sync::Mutex;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::WhatsAppError;

/// Hard cap the Cloud API puts on a text body. Longer replies are
/// truncated here, before the request goes out.
pub const MAX_TEXT_LENGTH: usize = 4096;

/// Seam for outbound delivery. The webhook handler and the send endpoint
/// depend on this, not on the concrete client.
#[async_trait]
pub trait OutboundMessenger: Send + Sync {
    async fn send_text(&self, to: &str, body: &str) -> Result<(), WhatsAppError>;
}

/// WhatsApp Cloud API client (Graph API, versioned endpoint).
pub struct WhatsAppClient {
    api_base: String,
    api_version: String,
    phone_number_id: String,
    access_token: String,
    client: reqwest::Client,
    timeout_secs: u64,
}

impl WhatsAppClient {
    pub fn new(
        api_base: &str,
        api_version: &str,
        phone_number_id: &str,
        access_token: &str,
        timeout_secs: u64,
    ) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            api_base: api_base.trim_end_matches('/').to_string(),
            api_version: api_version.to_string(),
            phone_number_id: phone_number_id.to_string(),
            access_token: access_token.to_string(),
            client,
            timeout_secs,
        }
    }
}

/// The Graph API rejects formatted numbers; only digits survive.
fn normalize_recipient(to: &str) -> String {
    to.chars().filter(char::is_ascii_digit).collect()
}

fn truncate_body(body: &str) -> String {
    body.chars().take(MAX_TEXT_LENGTH).collect()
}

#[derive(Serialize)]
struct OutboundTextMessage<'a> {
    messaging_product: &'a str,
    recipient_type: &'a str,
    to: &'a str,
    #[serde(rename = "type")]
    kind: &'a str,
    text: TextPayload<'a>,
}

#[derive(Serialize)]
struct TextPayload<'a> {
    preview_url: bool,
    body: &'a str,
}

#[derive(Deserialize)]
struct SendResponse {
    #[serde(default)]
    messages: Vec<SentMessage>,
}

#[derive(Deserialize)]
struct SentMessage {
    id: String,
}

/// Error envelope the Graph API returns with non-2xx statuses.
#[derive(Deserialize)]
struct GraphErrorBody {
    error: GraphErrorDetail,
}

#[derive(Deserialize)]
struct GraphErrorDetail {
    message: String,
}

#[async_trait]
impl OutboundMessenger for WhatsAppClient {
    async fn send_text(&self, to: &str, body: &str) -> Result<(), WhatsAppError> {
        let recipient = normalize_recipient(to);
        if body.chars().count() > MAX_TEXT_LENGTH {
            warn!(to = %recipient, chars = body.chars().count(), "Truncating over-length reply");
        }
        let truncated = truncate_body(body);

        let url = format!(
            "{}/{}/{}/messages",
            self.api_base, self.api_version, self.phone_number_id
        );
        let payload = OutboundTextMessage {
            messaging_product: "whatsapp",
            recipient_type: "individual",
            to: &recipient,
            kind: "text",
            text: TextPayload {
                preview_url: false,
                body: &truncated,
            },
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.access_token)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    WhatsAppError::Connection(self.api_base.clone())
                } else if e.is_timeout() {
                    WhatsAppError::Timeout(self.timeout_secs)
                } else {
                    WhatsAppError::HttpClient(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<GraphErrorBody>(&body)
                .map(|parsed| parsed.error.message)
                .unwrap_or(body);
            return Err(WhatsAppError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let sent: SendResponse = response
            .json()
            .await
            .map_err(|e| WhatsAppError::ResponseParsing(e.to_string()))?;
        if let Some(message) = sent.messages.first() {
            debug!(message_id = %message.id, to = %recipient, "Message accepted by WhatsApp");
        }
        Ok(())
    }
}

/// Mock messenger for testing: records sends instead of delivering them,
/// optionally failing every call.
pub struct MockMessenger {
    sent: Mutex<Vec<(String, String)>>,
    failing: bool,
}

impl MockMessenger {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            failing: false,
        }
    }

    /// A messenger whose every send fails with an API error.
    pub fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            failing: true,
        }
    }

    /// (recipient, body) pairs attempted so far, in order.
    pub fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().unwrap().clone()
    }
}

impl Default for MockMessenger {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OutboundMessenger for MockMessenger {
    async fn send_text(&self, to: &str, body: &str) -> Result<(), WhatsAppError> {
        self.sent
            .lock()
            .unwrap()
            .push((to.to_string(), body.to_string()));
        if self.failing {
            return Err(WhatsAppError::Api {
                status: 500,
                message: "mock delivery failure".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recipient_keeps_digits_only() {
        assert_eq!(normalize_recipient("+55 (11) 91234-5678"), "5511912345678");
        assert_eq!(normalize_recipient("5511912345678"), "5511912345678");
        assert_eq!(normalize_recipient("wa:+55 11 9888"), "55119888");
    }

    #[test]
    fn bodies_at_the_cap_pass_untouched() {
        let body = "a".repeat(MAX_TEXT_LENGTH);
        assert_eq!(truncate_body(&body).chars().count(), MAX_TEXT_LENGTH);
        assert_eq!(truncate_body(&body), body);
    }

    #[test]
    fn over_length_bodies_are_cut_at_the_cap() {
        let body = "é".repeat(MAX_TEXT_LENGTH + 100);
        let truncated = truncate_body(&body);
        assert_eq!(truncated.chars().count(), MAX_TEXT_LENGTH);
        assert!(truncated.chars().all(|c| c == 'é'));
    }

    #[test]
    fn client_constructor_trims_trailing_slash() {
        let client = WhatsAppClient::new("https://graph.facebook.com/", "v21.0", "123", "tok", 30);
        assert_eq!(client.api_base, "https://graph.facebook.com");
        assert_eq!(client.api_version, "v21.0");
        assert_eq!(client.timeout_secs, 30);
    }

    #[test]
    fn outbound_payload_has_the_cloud_api_shape() {
        let payload = OutboundTextMessage {
            messaging_product: "whatsapp",
            recipient_type: "individual",
            to: "5511912345678",
            kind: "text",
            text: TextPayload {
                preview_url: false,
                body: "Olá!",
            },
        };

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["messaging_product"], "whatsapp");
        assert_eq!(json["recipient_type"], "individual");
        assert_eq!(json["type"], "text");
        assert_eq!(json["text"]["preview_url"], false);
        assert_eq!(json["text"]["body"], "Olá!");
    }

    #[tokio::test]
    async fn mock_messenger_records_sends() {
        let mock = MockMessenger::new();
        mock.send_text("5511912345678", "primeira").await.unwrap();
        mock.send_text("5511912345678", "segunda").await.unwrap();

        let sent = mock.sent();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[1], ("5511912345678".to_string(), "segunda".to_string()));
    }

    #[tokio::test]
    async fn failing_mock_records_the_attempt_and_errors() {
        let mock = MockMessenger::failing();
        let err = mock.send_text("5511", "oi").await.unwrap_err();
        assert!(matches!(err, WhatsAppError::Api { status: 500, .. }));
        assert_eq!(mock.sent().len(), 1);
    }
}
