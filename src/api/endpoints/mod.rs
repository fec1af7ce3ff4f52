//! API endpoint handlers.
//!
//! Each module covers one surface: the WhatsApp webhook, the direct chat
//! endpoint, conversation inspection, and the health probe.

pub mod chat;
pub mod conversations;
pub mod health;
pub mod whatsapp;
