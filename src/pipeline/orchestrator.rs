//! End-to-end handling of one inbound message.

use tracing::{error, info};

use crate::context::BotContext;
use crate::conversation::{Role, Turn};
use crate::pipeline::commands::{parse_command, Command, CLEARED_REPLY, HELP_REPLY};
use crate::pipeline::dispatch::dispatch;
use crate::pipeline::prompt::build_contents;

/// Floor reply for internal faults. Anything more specific already
/// happened by the time this is used.
pub const GENERIC_FAILURE_REPLY: &str =
    "❌ Desculpe, ocorreu um erro ao processar sua mensagem. Tente novamente em alguns instantes.";

/// Run the full pipeline for one user message and return the reply text.
/// Infallible by contract: every failure maps to user-facing text.
pub async fn handle_incoming_message(ctx: &BotContext, user_id: &str, text: &str) -> String {
    // 1. Inline commands short-circuit before any model work.
    if let Some(command) = parse_command(text) {
        return match command {
            Command::ClearHistory => clear_conversation(ctx, user_id),
            Command::Help => HELP_REPLY.to_string(),
        };
    }

    // 2. Record the user turn.
    if let Err(err) = ctx.store.append(user_id, Turn::new(Role::User, text)) {
        error!(user_id = %user_id, error = %err, "Failed to record user turn");
        return GENERIC_FAILURE_REPLY.to_string();
    }

    // 3. Assemble the prompt from the bounded history.
    let history = match ctx.store.history(user_id) {
        Ok(history) => history,
        Err(err) => {
            error!(user_id = %user_id, error = %err, "Failed to load history");
            return GENERIC_FAILURE_REPLY.to_string();
        }
    };
    let contents = build_contents(&history, text);

    // 4. Ask the model chain. Refusals and the degraded floor come back
    // as ordinary text.
    let reply = ctx.chain.generate(&contents).await;

    // 5. Structured actions replace the model text.
    let final_text = dispatch(&reply.text);

    // 6. Record what the user actually received. Losing this turn costs
    // context, not the reply.
    if let Err(err) = ctx
        .store
        .append(user_id, Turn::new(Role::Model, final_text.clone()))
    {
        error!(user_id = %user_id, error = %err, "Failed to record model turn");
    }

    info!(
        user_id = %user_id,
        source = ?reply.source,
        chars = final_text.len(),
        "Reply ready"
    );
    final_text
}

/// Clear a user's history and confirm. Shared by the /limpar command and
/// the conversation endpoint.
pub fn clear_conversation(ctx: &BotContext, user_id: &str) -> String {
    match ctx.store.clear(user_id) {
        Ok(()) => {
            info!(user_id = %user_id, "Conversation cleared");
            CLEARED_REPLY.to_string()
        }
        Err(err) => {
            error!(user_id = %user_id, error = %err, "Failed to clear conversation");
            GENERIC_FAILURE_REPLY.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::test_context;
    use crate::gemini::{hard_block_reply, GenerateContentResponse};

    #[tokio::test]
    async fn plain_chat_records_both_turns() {
        let (ctx, llm, _messenger) = test_context();
        llm.push(Ok(GenerateContentResponse::with_text(
            "Olá! Como posso ajudar?",
        )));

        let reply = handle_incoming_message(&ctx, "5511999990000", "oi").await;

        assert_eq!(reply, "Olá! Como posso ajudar?");
        let history = ctx.store.history("5511999990000").unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].role, Role::User);
        assert_eq!(history[0].text, "oi");
        assert_eq!(history[1].role, Role::Model);
        assert_eq!(history[1].text, "Olá! Como posso ajudar?");
    }

    #[tokio::test]
    async fn clear_command_short_circuits_the_model() {
        let (ctx, llm, _messenger) = test_context();
        llm.push(Ok(GenerateContentResponse::with_text("antes")));
        handle_incoming_message(&ctx, "u1", "primeira mensagem").await;

        let reply = handle_incoming_message(&ctx, "u1", "/limpar").await;

        assert_eq!(reply, CLEARED_REPLY);
        assert!(ctx.store.history("u1").unwrap().is_empty());
        // Only the first message reached the provider.
        assert_eq!(llm.calls().len(), 1);
    }

    #[tokio::test]
    async fn help_command_replies_without_calling_the_model() {
        let (ctx, llm, _messenger) = test_context();

        let reply = handle_incoming_message(&ctx, "u1", "  AJUDA ").await;

        assert_eq!(reply, HELP_REPLY);
        assert!(llm.calls().is_empty());
        assert!(ctx.store.history("u1").unwrap().is_empty());
    }

    #[tokio::test]
    async fn bula_action_reply_is_the_lookup_text() {
        let (ctx, llm, _messenger) = test_context();
        llm.push(Ok(GenerateContentResponse::with_text(
            "```json\n{\"action\": \"get_bula_info\", \"drug\": \"Losartana\", \
             \"info_type\": \"posologia\"}\n```",
        )));

        let reply = handle_incoming_message(&ctx, "u1", "qual a posologia da losartana?").await;

        assert!(reply.starts_with("* **Posologia** do medicamento **Losartana**"));
        assert!(reply.contains("50 mg"));
        // The stored model turn is the dispatched text, not the fence.
        let history = ctx.store.history("u1").unwrap();
        assert_eq!(history[1].text, reply);
        assert!(!history[1].text.contains("```"));
    }

    #[tokio::test]
    async fn hard_block_reply_is_persisted_as_the_model_turn() {
        let (ctx, llm, _messenger) = test_context();
        llm.push(Ok(GenerateContentResponse::blocked("SAFETY")));

        let reply =
            handle_incoming_message(&ctx, "u1", "qual remédio tomar para dor no peito?").await;

        assert_eq!(reply, hard_block_reply("SAFETY"));
        let history = ctx.store.history("u1").unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[1].text, reply);
    }

    #[tokio::test]
    async fn exhausted_chain_yields_the_degraded_reply() {
        let (ctx, llm, _messenger) = test_context();
        // Empty script: every model call errors out.

        let reply = handle_incoming_message(&ctx, "u1", "oi").await;

        assert!(reply.contains("temporariamente indisponíveis"));
        assert_eq!(llm.calls().len(), 4);
        assert_eq!(ctx.store.history("u1").unwrap().len(), 2);
    }

    #[tokio::test]
    async fn chain_reply_source_reaches_the_pin() {
        let (ctx, llm, _messenger) = test_context();
        llm.push(Ok(GenerateContentResponse::with_text("oi")));

        handle_incoming_message(&ctx, "u1", "olá").await;

        assert_eq!(ctx.chain.pinned_model().as_deref(), Some("gemini-pro"));
        llm.push(Ok(GenerateContentResponse::with_text("de novo")));
        let reply = handle_incoming_message(&ctx, "u1", "tudo bem?").await;
        assert_eq!(reply, "de novo");
        assert_eq!(llm.calls().len(), 2);
    }

    #[tokio::test]
    async fn clear_conversation_is_idempotent_for_unknown_users() {
        let (ctx, _llm, _messenger) = test_context();
        assert_eq!(clear_conversation(&ctx, "ghost"), CLEARED_REPLY);
    }

    #[test]
    fn generic_failure_reply_is_user_facing_portuguese() {
        assert!(GENERIC_FAILURE_REPLY.starts_with("❌"));
        assert!(GENERIC_FAILURE_REPLY.contains("Tente novamente"));
    }
}
