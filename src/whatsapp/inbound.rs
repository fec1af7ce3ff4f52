//! Inbound webhook payload shapes.
//!
//! Meta wraps every event in entry/changes layers and mixes text messages
//! with delivery receipts, read receipts and media notifications. Only
//! text messages matter here; everything else deserializes quietly into
//! ignored or empty fields.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct WebhookEvent {
    #[serde(default)]
    pub object: String,
    #[serde(default)]
    pub entry: Vec<Entry>,
}

#[derive(Debug, Deserialize)]
pub struct Entry {
    #[serde(default)]
    pub changes: Vec<Change>,
}

#[derive(Debug, Deserialize)]
pub struct Change {
    #[serde(default)]
    pub value: ChangeValue,
}

#[derive(Debug, Default, Deserialize)]
pub struct ChangeValue {
    #[serde(default)]
    pub messages: Vec<InboundMessage>,
}

#[derive(Debug, Deserialize)]
pub struct InboundMessage {
    pub from: String,
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub text: Option<TextBody>,
}

#[derive(Debug, Deserialize)]
pub struct TextBody {
    pub body: String,
}

impl WebhookEvent {
    /// Text messages across all entries, paired with their body. Status
    /// notifications and non-text messages are filtered out.
    pub fn text_messages(&self) -> impl Iterator<Item = (&InboundMessage, &str)> {
        self.entry
            .iter()
            .flat_map(|entry| entry.changes.iter())
            .flat_map(|change| change.value.messages.iter())
            .filter(|message| message.kind == "text")
            .filter_map(|message| {
                message
                    .text
                    .as_ref()
                    .map(|text| (message, text.body.as_str()))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_event() -> serde_json::Value {
        serde_json::json!({
            "object": "whatsapp_business_account",
            "entry": [{
                "id": "104",
                "changes": [{
                    "field": "messages",
                    "value": {
                        "messaging_product": "whatsapp",
                        "metadata": {
                            "display_phone_number": "5511988887777",
                            "phone_number_id": "123456789"
                        },
                        "contacts": [{"profile": {"name": "Maria"}, "wa_id": "5511912345678"}],
                        "messages": [{
                            "from": "5511912345678",
                            "id": "wamid.ABCD",
                            "timestamp": "1700000000",
                            "type": "text",
                            "text": {"body": "qual a posologia da losartana?"}
                        }]
                    }
                }]
            }]
        })
    }

    #[test]
    fn text_message_is_extracted_with_sender_and_body() {
        let event: WebhookEvent = serde_json::from_value(text_event()).unwrap();

        let messages: Vec<_> = event.text_messages().collect();
        assert_eq!(messages.len(), 1);
        let (message, body) = messages[0];
        assert_eq!(message.from, "5511912345678");
        assert_eq!(message.id, "wamid.ABCD");
        assert_eq!(body, "qual a posologia da losartana?");
    }

    #[test]
    fn status_only_events_yield_no_messages() {
        let raw = serde_json::json!({
            "object": "whatsapp_business_account",
            "entry": [{
                "changes": [{
                    "field": "messages",
                    "value": {
                        "messaging_product": "whatsapp",
                        "statuses": [{"id": "wamid.X", "status": "delivered"}]
                    }
                }]
            }]
        });
        let event: WebhookEvent = serde_json::from_value(raw).unwrap();
        assert_eq!(event.text_messages().count(), 0);
    }

    #[test]
    fn non_text_messages_are_skipped() {
        let raw = serde_json::json!({
            "object": "whatsapp_business_account",
            "entry": [{
                "changes": [{
                    "field": "messages",
                    "value": {
                        "messages": [
                            {
                                "from": "5511912345678",
                                "id": "wamid.IMG",
                                "type": "image",
                                "image": {"id": "media-1"}
                            },
                            {
                                "from": "5511912345678",
                                "id": "wamid.TXT",
                                "type": "text",
                                "text": {"body": "oi"}
                            }
                        ]
                    }
                }]
            }]
        });
        let event: WebhookEvent = serde_json::from_value(raw).unwrap();

        let messages: Vec<_> = event.text_messages().collect();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].0.id, "wamid.TXT");
    }

    #[test]
    fn empty_event_deserializes() {
        let event: WebhookEvent = serde_json::from_str("{}").unwrap();
        assert_eq!(event.object, "");
        assert_eq!(event.text_messages().count(), 0);
    }
}
