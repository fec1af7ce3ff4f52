//! Structured-action dispatch.
//!
//! The model answers bula and stock questions with a fenced JSON payload
//! instead of prose. That fence is untrusted model output: shape is
//! validated before acting, and malformed payloads degrade to a fixed
//! apology rather than surfacing raw structure to the user. Keeping the
//! fence parsing here, behind one function, leaves room to swap it for
//! native function calling later.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;
use tracing::{error, warn};

use crate::bulario;

/// First ```json fenced block in a reply, non-greedy across lines.
static ACTION_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```json\s*([\s\S]*?)\s*```").expect("Invalid action fence regex"));

/// Fence present but its payload is not valid JSON.
pub const PARSE_FAILURE_REPLY: &str = "Desculpe, houve um problema ao interpretar a informação \
    do medicamento. Por favor, tente novamente.";

/// Payload parsed but matches no known action shape.
pub const UNKNOWN_ACTION_REPLY: &str = "Desculpe, não consegui processar a informação específica \
    do medicamento. Por favor, tente reformular.";

fn non_empty<'a>(payload: &'a Value, key: &str) -> Option<&'a str> {
    payload
        .get(key)
        .and_then(Value::as_str)
        .filter(|value| !value.is_empty())
}

/// Replace a structured action in the AI text with its result. Text
/// without a fence passes through untouched.
pub fn dispatch(ai_text: &str) -> String {
    let Some(captures) = ACTION_FENCE.captures(ai_text) else {
        return ai_text.to_string();
    };
    let raw = captures.get(1).map(|m| m.as_str()).unwrap_or_default();

    let payload: Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(err) => {
            error!(error = %err, "Failed to parse action payload");
            return PARSE_FAILURE_REPLY.to_string();
        }
    };

    match payload.get("action").and_then(Value::as_str) {
        Some("get_bula_info") => {
            if let (Some(drug), Some(info_type)) =
                (non_empty(&payload, "drug"), non_empty(&payload, "info_type"))
            {
                return bulario::lookup(drug, info_type);
            }
        }
        Some("get_stock_info") => {
            if let Some(drug) = non_empty(&payload, "drug") {
                return format!(
                    "Funcionalidade de estoque para '{drug}' ainda não implementada."
                );
            }
        }
        _ => {}
    }

    warn!(payload = %payload, "Unrecognized action payload");
    UNKNOWN_ACTION_REPLY.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prose_without_fence_passes_through() {
        let text = "Olá! Posso ajudar com informações sobre medicamentos.";
        assert_eq!(dispatch(text), text);
    }

    #[test]
    fn untagged_fence_passes_through() {
        let text = "Veja:\n```\n{\"action\": \"get_bula_info\"}\n```";
        assert_eq!(dispatch(text), text);
    }

    #[test]
    fn bula_action_is_replaced_by_the_lookup_result() {
        let text = "```json\n{\"action\": \"get_bula_info\", \"drug\": \"Losartana\", \
                    \"info_type\": \"posologia\"}\n```";

        let reply = dispatch(text);
        assert_eq!(reply, bulario::lookup("Losartana", "posologia"));
        assert!(reply.contains("* **Posologia** do medicamento **Losartana**"));
        assert!(reply.contains("50 mg"));
    }

    #[test]
    fn surrounding_prose_is_discarded_when_an_action_fires() {
        let text = "Claro, vou buscar:\n```json\n{\"action\": \"get_bula_info\", \
                    \"drug\": \"Omeprazol\", \"info_type\": \"tudo\"}\n```\nEspero que ajude!";

        let reply = dispatch(text);
        assert!(reply.starts_with("Informações completas sobre **Omeprazol**"));
        assert!(!reply.contains("Espero que ajude"));
    }

    #[test]
    fn stock_action_returns_the_not_implemented_message() {
        let text = "```json\n{\"action\": \"get_stock_info\", \"drug\": \"Sinvastatina\"}\n```";
        assert_eq!(
            dispatch(text),
            "Funcionalidade de estoque para 'Sinvastatina' ainda não implementada."
        );
    }

    #[test]
    fn unknown_action_gets_the_reformulate_apology() {
        let text = "```json\n{\"action\": \"get_price_info\", \"drug\": \"Losartana\"}\n```";
        assert_eq!(dispatch(text), UNKNOWN_ACTION_REPLY);
    }

    #[test]
    fn bula_action_missing_fields_gets_the_reformulate_apology() {
        let text = "```json\n{\"action\": \"get_bula_info\", \"drug\": \"Losartana\"}\n```";
        assert_eq!(dispatch(text), UNKNOWN_ACTION_REPLY);

        let text = "```json\n{\"action\": \"get_bula_info\", \"drug\": \"\", \
                    \"info_type\": \"posologia\"}\n```";
        assert_eq!(dispatch(text), UNKNOWN_ACTION_REPLY);
    }

    #[test]
    fn malformed_payload_gets_the_parse_apology() {
        let text = "```json\n{\"action\": \"get_bula_info\", \"drug\": \n```";
        assert_eq!(dispatch(text), PARSE_FAILURE_REPLY);
    }

    #[test]
    fn fence_tolerates_extra_whitespace() {
        let text = "```json   \n\n  {\"action\": \"get_stock_info\", \"drug\": \"Nimesulida\"}  \n\n```";
        assert_eq!(
            dispatch(text),
            "Funcionalidade de estoque para 'Nimesulida' ainda não implementada."
        );
    }
}
