//! Runtime configuration loaded from the environment.
//!
//! Credentials are required: a missing variable is a startup error so the
//! process fails fast instead of answering users with broken upstreams.
//! Endpoints and timeouts have defaults and can be overridden, which the
//! tests use to point clients at local fixtures.

use std::net::SocketAddr;

/// Application-level constants
pub const APP_NAME: &str = "FarmaZap";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default HTTP timeout for outbound provider calls.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_WHATSAPP_API_BASE: &str = "https://graph.facebook.com";
const DEFAULT_WHATSAPP_API_VERSION: &str = "v21.0";

/// Tracing filter used when `RUST_LOG` is not set.
pub fn default_log_filter() -> String {
    format!("info,{}=debug", env!("CARGO_PKG_NAME"))
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),
    #[error("Invalid value for {name}: {value}")]
    InvalidVar { name: &'static str, value: String },
}

/// Everything the service needs from its environment.
#[derive(Debug, Clone)]
pub struct Settings {
    pub gemini_api_key: String,
    pub gemini_api_base: String,
    pub whatsapp_access_token: String,
    pub whatsapp_phone_number_id: String,
    pub whatsapp_verify_token: String,
    pub whatsapp_api_base: String,
    pub whatsapp_api_version: String,
    pub bind_addr: SocketAddr,
    pub request_timeout_secs: u64,
}

impl Settings {
    /// Load settings from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::load(|key| std::env::var(key).ok())
    }

    /// Load settings through a lookup function (tests pass a map).
    fn load(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |name: &'static str| -> Result<String, ConfigError> {
            match get(name) {
                Some(v) if !v.trim().is_empty() => Ok(v),
                _ => Err(ConfigError::MissingVar(name)),
            }
        };

        let bind_raw = get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidVar {
                name: "BIND_ADDR",
                value: bind_raw.clone(),
            })?;

        let timeout_raw = get("REQUEST_TIMEOUT_SECS");
        let request_timeout_secs = match timeout_raw {
            Some(raw) => raw.parse::<u64>().map_err(|_| ConfigError::InvalidVar {
                name: "REQUEST_TIMEOUT_SECS",
                value: raw.clone(),
            })?,
            None => DEFAULT_REQUEST_TIMEOUT_SECS,
        };

        Ok(Self {
            gemini_api_key: required("GEMINI_API_KEY")?,
            gemini_api_base: get("GEMINI_API_BASE")
                .unwrap_or_else(|| DEFAULT_GEMINI_API_BASE.to_string()),
            whatsapp_access_token: required("WHATSAPP_ACCESS_TOKEN")?,
            whatsapp_phone_number_id: required("WHATSAPP_PHONE_NUMBER_ID")?,
            whatsapp_verify_token: required("WHATSAPP_VERIFY_TOKEN")?,
            whatsapp_api_base: get("WHATSAPP_API_BASE")
                .unwrap_or_else(|| DEFAULT_WHATSAPP_API_BASE.to_string()),
            whatsapp_api_version: get("WHATSAPP_API_VERSION")
                .unwrap_or_else(|| DEFAULT_WHATSAPP_API_VERSION.to_string()),
            bind_addr,
            request_timeout_secs,
        })
    }

    /// Settings with dummy credentials for in-process tests.
    #[cfg(test)]
    pub(crate) fn for_tests() -> Self {
        Self {
            gemini_api_key: "test-key".into(),
            gemini_api_base: DEFAULT_GEMINI_API_BASE.into(),
            whatsapp_access_token: "test-token".into(),
            whatsapp_phone_number_id: "123456789".into(),
            whatsapp_verify_token: "segredo".into(),
            whatsapp_api_base: DEFAULT_WHATSAPP_API_BASE.into(),
            whatsapp_api_version: DEFAULT_WHATSAPP_API_VERSION.into(),
            bind_addr: "127.0.0.1:0".parse().unwrap(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}
