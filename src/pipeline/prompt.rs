//! Prompt assembly for the model call.
//!
//! The system instruction is not stored as a conversation turn. It is
//! injected into the final user turn of every request, so the model always
//! sees it freshly even after the history window slides.

use crate::conversation::{Role, Turn};
use crate::gemini::Content;

/// Persona, safety policy and the structured-action protocol, in the
/// model's working language.
pub const SYSTEM_INSTRUCTION: &str = r#"Você é um assistente farmacêutico amigável e prestativo, integrado ao WhatsApp, especializado em fornecer informações sobre medicamentos (bulas) e status de estoque da farmácia.

Sua prioridade é a segurança. Sob NENHUMA circunstância, forneça aconselhamento médico, diagnóstico, recomendações de dosagem ou interprete sintomas. Se for perguntado sobre um medicamento ou tratamento de saúde que envolva indicação, dosagem, ou conselho médico, sua resposta DEVE ser: "Atenção (Política de Conteúdo da IA) - Para sua segurança, por favor, consulte diretamente um farmacêutico em nossa loja ou um médico. Como assistente, não posso fornecer informações ou recomendações médicas."

**Instruções Específicas de Resposta (MUITO IMPORTANTE):**

1.  **Se a pergunta do usuário for CLARAMENTE sobre as informações de bula de um medicamento** (como posologia, indicações, efeitos colaterais, contraindicações, mecanismo de ação, interações medicamentosas, classe farmacológica, ou "tudo" sobre ele), você DEVE responder EXCLUSIVAMENTE no formato JSON, **sem texto adicional antes ou depois**.
    *   **Formato JSON para Bula:**
        ```json
        {
          "action": "get_bula_info",
          "drug": "Nome do Medicamento",
          "info_type": "tipo_de_informacao"
        }
        ```
    *   **Exemplos:**
        *   Usuário: "Qual a posologia da Losartana?" -> { "action": "get_bula_info", "drug": "Losartana", "info_type": "posologia" }
        *   Usuário: "Me diga as indicações da Sinvastatina." -> { "action": "get_bula_info", "drug": "Sinvastatina", "info_type": "indicacoes" }
        *   Usuário: "Quais os efeitos colaterais do Diclofenaco?" -> { "action": "get_bula_info", "drug": "Diclofenaco", "info_type": "efeitos colaterais" }
        *   Usuário: "Gostaria de saber tudo sobre o Esomeprazol." -> { "action": "get_bula_info", "drug": "Esomeprazol", "info_type": "tudo" }
        *   Usuário: "Losartana, classe terapeutica?" -> { "action": "get_bula_info", "drug": "Losartana", "info_type": "classe terapeutica" }
        *   Usuário: "Mecanismo de acao da Nimesulida." -> { "action": "get_bula_info", "drug": "Nimesulida", "info_type": "mecanismo de acao" }

2.  **Se a pergunta do usuário for CLARAMENTE sobre o estoque de um medicamento**, você DEVE responder EXCLUSIVAMENTE no formato JSON, **sem texto adicional antes ou depois**.
    *   **Formato JSON para Estoque:**
        ```json
        {
          "action": "get_stock_info",
          "drug": "Nome do Medicamento"
        }
        ```
    *   **Exemplos:**
        *   Usuário: "Tem Losartana em estoque?" -> { "action": "get_stock_info", "drug": "Losartana" }
        *   Usuário: "Verificar estoque de Sinvastatina." -> { "action": "get_stock_info", "drug": "Sinvastatina" }

3.  **Para todas as outras perguntas** que não se encaixam nas categorias acima (e não violam a política de segurança), responda de forma natural e amigável como um assistente de farmácia."#;

/// Convert the bounded history into provider turns, wrapping the current
/// message (the final turn) with the system instruction.
pub fn build_contents(history: &[Turn], current_message: &str) -> Vec<Content> {
    let mut contents: Vec<Content> = history
        .iter()
        .map(|turn| match turn.role {
            Role::User => Content::user(turn.text.clone()),
            Role::Model => Content::model(turn.text.clone()),
        })
        .collect();

    let wrapped = format!("{SYSTEM_INSTRUCTION} \n\n--- Mensagem do Usuário: {current_message}");
    match contents.last_mut() {
        Some(last) => *last = Content::user(wrapped),
        // Unreachable when the caller appends the user turn first; kept so
        // the instruction is never silently dropped.
        None => contents.push(Content::user(wrapped)),
    }
    contents
}

#[cfg(test)]
mod tests {
    use super::*;

    fn turn(role: Role, text: &str) -> Turn {
        Turn::new(role, text)
    }

    #[test]
    fn final_turn_carries_instruction_and_raw_message() {
        let history = vec![
            turn(Role::User, "oi"),
            turn(Role::Model, "Olá! Como posso ajudar?"),
            turn(Role::User, "qual a posologia da losartana?"),
        ];

        let contents = build_contents(&history, "qual a posologia da losartana?");

        assert_eq!(contents.len(), 3);
        let last = &contents[2];
        assert_eq!(last.role, "user");
        assert!(last.parts[0].text.starts_with(SYSTEM_INSTRUCTION));
        assert!(last.parts[0]
            .text
            .ends_with("--- Mensagem do Usuário: qual a posologia da losartana?"));
    }

    #[test]
    fn earlier_turns_pass_through_unchanged() {
        let history = vec![
            turn(Role::User, "oi"),
            turn(Role::Model, "Olá!"),
            turn(Role::User, "tem sinvastatina?"),
        ];

        let contents = build_contents(&history, "tem sinvastatina?");

        assert_eq!(contents[0].role, "user");
        assert_eq!(contents[0].parts[0].text, "oi");
        assert_eq!(contents[1].role, "model");
        assert_eq!(contents[1].parts[0].text, "Olá!");
        assert!(!contents[1].parts[0].text.contains(SYSTEM_INSTRUCTION));
    }

    #[test]
    fn empty_history_still_produces_one_wrapped_turn() {
        let contents = build_contents(&[], "oi");
        assert_eq!(contents.len(), 1);
        assert!(contents[0].parts[0].text.contains("--- Mensagem do Usuário: oi"));
    }

    #[test]
    fn instruction_mandates_refusal_sentence_and_action_formats() {
        assert!(SYSTEM_INSTRUCTION.contains("assistente farmacêutico"));
        assert!(SYSTEM_INSTRUCTION
            .contains("Atenção (Política de Conteúdo da IA) - Para sua segurança"));
        assert!(SYSTEM_INSTRUCTION.contains("\"action\": \"get_bula_info\""));
        assert!(SYSTEM_INSTRUCTION.contains("\"action\": \"get_stock_info\""));
    }
}
