//! Environment-driven service configuration.
//!
//! Every knob has a production-friendly default and a `WORDBLOOM_*`
//! environment override, so the binary runs with no flags at all.

use std::env;
use std::net::SocketAddr;
use std::time::Duration;

/// Connection settings for the hosted model endpoint.
#[derive(Debug, Clone)]
pub struct ModelConfig {
    /// Base URL of the model gateway, without the completions path.
    pub base_url: String,
    /// Fixed model identifier sent with every invocation.
    pub model: String,
    pub api_key: Option<String>,
    pub timeout: Duration,
}

/// Top-level service configuration.
///
/// `model` is optional by design: with no endpoint configured, word-list
/// requests fall back to the dictionary and story requests fail with a
/// `success:false` envelope.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub addr: SocketAddr,
    pub model: Option<ModelConfig>,
    pub cache_enabled: bool,
    pub cache_capacity: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 8788)),
            model: None,
            cache_enabled: true,
            cache_capacity: 1024,
        }
    }
}

impl ServiceConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_addr(mut self, addr: SocketAddr) -> Self {
        self.addr = addr;
        self
    }

    pub fn with_model(mut self, model: ModelConfig) -> Self {
        self.model = Some(model);
        self
    }

    pub fn with_cache_enabled(mut self, enabled: bool) -> Self {
        self.cache_enabled = enabled;
        self
    }

    /// Read configuration from the environment.
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `WORDBLOOM_ADDR` | `127.0.0.1:8788` |
    /// | `WORDBLOOM_MODEL_URL` | unset (no model; dictionary only) |
    /// | `WORDBLOOM_MODEL` | `llama-3-8b-instruct` |
    /// | `WORDBLOOM_API_KEY` | unset |
    /// | `WORDBLOOM_HTTP_TIMEOUT_SECS` | `30` |
    /// | `WORDBLOOM_CACHE` | `on` |
    /// | `WORDBLOOM_CACHE_CAPACITY` | `1024` |
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let addr = env::var("WORDBLOOM_ADDR")
            .ok()
            .and_then(|s| s.parse::<SocketAddr>().ok())
            .unwrap_or(defaults.addr);

        let model = env::var("WORDBLOOM_MODEL_URL").ok().map(|base_url| {
            let timeout_secs = env::var("WORDBLOOM_HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(30);
            ModelConfig {
                base_url,
                model: env::var("WORDBLOOM_MODEL")
                    .unwrap_or_else(|_| "llama-3-8b-instruct".to_string()),
                api_key: env::var("WORDBLOOM_API_KEY").ok(),
                timeout: Duration::from_secs(timeout_secs),
            }
        });

        let cache_enabled = env::var("WORDBLOOM_CACHE")
            .map(|v| !matches!(v.as_str(), "off" | "0" | "false"))
            .unwrap_or(defaults.cache_enabled);

        let cache_capacity = env::var("WORDBLOOM_CACHE_CAPACITY")
            .ok()
            .and_then(|s| s.parse::<usize>().ok())
            .unwrap_or(defaults.cache_capacity);

        Self {
            addr,
            model,
            cache_enabled,
            cache_capacity,
        }
    }
}
