//! Provider response classification.
//!
//! Every `generateContent` response passes through [`classify`] before any
//! other code looks at it, so partial or filtered output is never mistaken
//! for an answer. Hard and soft blocks are expected outcomes for a pharmacy
//! bot and map to fixed pt-BR messages; only structural failures feed the
//! retry loop.

use super::types::GenerateContentResponse;

/// Finish reasons that mean the provider filtered or cut the output.
const SOFT_BLOCK_FINISH_REASONS: &[&str] = &["MAX_TOKENS", "SAFETY", "RECITATION"];

/// What a provider response actually is, decided once per call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Usable text, no block indicators.
    Success(String),
    /// The prompt itself was refused before generation started.
    HardBlock { reason: String },
    /// Generation ran but was filtered, truncated or left empty.
    SoftBlock { finish_reason: String },
    /// Response shape is unusable; a transient fault, not a policy signal.
    StructuralFailure { detail: String },
}

pub fn classify(response: &GenerateContentResponse) -> Verdict {
    // Block indicators are checked before any text is extracted.
    if let Some(reason) = response
        .prompt_feedback
        .as_ref()
        .and_then(|feedback| feedback.block_reason.clone())
    {
        return Verdict::HardBlock { reason };
    }

    let Some(candidate) = response.candidates.as_ref().and_then(|c| c.first()) else {
        return Verdict::StructuralFailure {
            detail: "NO_CANDIDATE".to_string(),
        };
    };

    let finish_reason = candidate.finish_reason.clone().unwrap_or_default();
    if SOFT_BLOCK_FINISH_REASONS.contains(&finish_reason.as_str()) {
        return Verdict::SoftBlock { finish_reason };
    }

    let text = candidate.content.as_ref().and_then(|content| {
        content
            .parts
            .iter()
            .find(|part| !part.text.is_empty())
            .map(|part| part.text.clone())
    });

    match text {
        Some(text) => Verdict::Success(text),
        None => Verdict::SoftBlock {
            finish_reason: if finish_reason.is_empty() {
                "EMPTY_CANDIDATE".to_string()
            } else {
                finish_reason
            },
        },
    }
}

/// Reply substituted for a hard block, embedding the provider's reason code.
pub fn hard_block_reply(reason: &str) -> String {
    format!(
        "🤖 **Atenção (Política de Conteúdo da IA)**\n\n\
         *Olá! Como assistente de IA, não posso fornecer informações ou recomendações diretas \
         sobre medicamentos ou tratamentos de saúde. Isso é feito para sua segurança e para \
         cumprir as diretrizes de conteúdo médico da Google (Motivo: {reason}).*\n\n\
         **Para sua segurança e orientações precisas, por favor, consulte diretamente um \
         farmacêutico em nossa loja ou um médico.**"
    )
}

/// Reply substituted for a soft block. No reason code: finish reasons are
/// not reliable enough to show to users.
pub const SOFT_BLOCK_REPLY: &str = concat!(
    "🤖 **Atenção (Política de Conteúdo da IA)**\n\n",
    "*Ocorreu uma interrupção na geração da resposta devido à sensibilidade do tema ",
    "(saúde/medicamentos). Para sua segurança, como assistente de IA, não posso fornecer ",
    "informações ou recomendações diretas sobre medicamentos ou tratamentos.*\n\n",
    "**Para sua segurança e orientações precisas, por favor, consulte diretamente um ",
    "farmacêutico em nossa loja ou um médico.**"
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gemini::types::{Candidate, Content};

    #[test]
    fn usable_text_is_success() {
        let response = GenerateContentResponse::with_text("Olá! Como posso ajudar?");
        assert_eq!(
            classify(&response),
            Verdict::Success("Olá! Como posso ajudar?".to_string())
        );
    }

    #[test]
    fn block_reason_wins_even_when_text_is_present() {
        let mut response = GenerateContentResponse::with_text("resposta parcial");
        response.prompt_feedback = GenerateContentResponse::blocked("SAFETY").prompt_feedback;

        assert_eq!(
            classify(&response),
            Verdict::HardBlock {
                reason: "SAFETY".to_string()
            }
        );
    }

    #[test]
    fn filtered_finish_reasons_are_soft_blocks() {
        for reason in ["MAX_TOKENS", "SAFETY", "RECITATION"] {
            let response = GenerateContentResponse::finished(reason);
            assert_eq!(
                classify(&response),
                Verdict::SoftBlock {
                    finish_reason: reason.to_string()
                },
                "finish reason {reason}"
            );
        }
    }

    #[test]
    fn truncated_partial_text_is_still_a_soft_block() {
        let response = GenerateContentResponse {
            candidates: Some(vec![Candidate {
                content: Some(Content::model("A dose usual é de 50")),
                finish_reason: Some("MAX_TOKENS".to_string()),
            }]),
            prompt_feedback: None,
        };

        assert_eq!(
            classify(&response),
            Verdict::SoftBlock {
                finish_reason: "MAX_TOKENS".to_string()
            }
        );
    }

    #[test]
    fn candidate_without_text_is_a_soft_block() {
        let response = GenerateContentResponse {
            candidates: Some(vec![Candidate {
                content: None,
                finish_reason: None,
            }]),
            prompt_feedback: None,
        };

        assert_eq!(
            classify(&response),
            Verdict::SoftBlock {
                finish_reason: "EMPTY_CANDIDATE".to_string()
            }
        );
    }

    #[test]
    fn missing_candidates_is_a_structural_failure() {
        assert_eq!(
            classify(&GenerateContentResponse::empty()),
            Verdict::StructuralFailure {
                detail: "NO_CANDIDATE".to_string()
            }
        );

        let empty_list = GenerateContentResponse {
            candidates: Some(Vec::new()),
            prompt_feedback: None,
        };
        assert_eq!(
            classify(&empty_list),
            Verdict::StructuralFailure {
                detail: "NO_CANDIDATE".to_string()
            }
        );
    }

    #[test]
    fn block_replies_point_to_a_professional() {
        let hard = hard_block_reply("PROHIBITED_CONTENT");
        assert!(hard.contains("Motivo: PROHIBITED_CONTENT"));
        assert!(hard.contains("consulte diretamente um farmacêutico"));

        assert!(SOFT_BLOCK_REPLY.contains("Ocorreu uma interrupção"));
        assert!(SOFT_BLOCK_REPLY.contains("consulte diretamente um farmacêutico"));
        assert!(!SOFT_BLOCK_REPLY.contains("Motivo"));
    }
}
