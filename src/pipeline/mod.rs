//! Message-handling pipeline.
//!
//! Order for one inbound message: inline commands short-circuit, the user
//! turn is recorded, the prompt is assembled from the bounded history, the
//! model chain produces text (or a refusal, or the degraded floor), and
//! structured actions in that text are dispatched. The pipeline never
//! fails: every path ends in user-facing text.

pub mod commands;
pub mod dispatch;
pub mod orchestrator;
pub mod prompt;

pub use commands::{parse_command, Command, CLEARED_REPLY, HELP_REPLY};
pub use dispatch::{dispatch, PARSE_FAILURE_REPLY, UNKNOWN_ACTION_REPLY};
pub use orchestrator::{clear_conversation, handle_incoming_message, GENERIC_FAILURE_REPLY};
pub use prompt::{build_contents, SYSTEM_INSTRUCTION};
