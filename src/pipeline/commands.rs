//! Inline commands recognized in raw user text, before any model work.

/// User-issued commands. Matching is whole-message: a command word inside
/// a longer sentence is ordinary conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ClearHistory,
    Help,
}

pub fn parse_command(text: &str) -> Option<Command> {
    match text.trim().to_lowercase().as_str() {
        "/limpar" | "limpar" => Some(Command::ClearHistory),
        "/ajuda" | "ajuda" => Some(Command::Help),
        _ => None,
    }
}

pub const CLEARED_REPLY: &str =
    "🗑️ Histórico de conversa limpo! Vamos começar uma nova conversa.";

pub const HELP_REPLY: &str = concat!(
    "🤖 *Comandos disponíveis:*\n\n",
    "• /limpar - Limpa o histórico da conversa\n",
    "• /ajuda - Mostra esta mensagem\n\n",
    "Envie qualquer mensagem para conversar comigo!"
);
