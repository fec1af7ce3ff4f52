//! FarmaZap: WhatsApp pharmacy assistant service.
//!
//! Receives customer messages through the WhatsApp Cloud API webhook,
//! answers them with Gemini behind a model fallback chain, resolves the
//! model's structured drug-information actions against the built-in
//! catalog, and delivers the reply back through the Cloud API.

pub mod api;
pub mod bulario; // drug catalog + lookup
pub mod config;
pub mod context;
pub mod conversation;
pub mod gemini; // provider client + fallback chain
pub mod pipeline;
pub mod whatsapp;
