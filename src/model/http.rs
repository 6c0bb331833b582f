//! HTTP model client over a chat-completions style endpoint.

use super::TextModel;
use crate::config::ModelConfig;
use crate::{Error, Result};
use async_trait::async_trait;
use serde_json::json;
use tracing::debug;

pub struct HttpModelClient {
    client: reqwest::Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
}

impl HttpModelClient {
    pub fn new(config: &ModelConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::Transport(TransportError::Other(e.to_string())))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/v1/chat/completions", self.base_url)
    }
}

#[async_trait]
impl TextModel for HttpModelClient {
    async fn generate(&self, system: &str, user: &str) -> Result<String> {
        let body = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": system },
                { "role": "user", "content": user }
            ]
        });

        debug!(model = %self.model, "invoking model endpoint");

        let mut request = self.client.post(self.endpoint()).json(&body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await.map_err(TransportError::Http)?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::model(format!(
                "model endpoint returned HTTP {}",
                status.as_u16()
            )));
        }

        let payload: serde_json::Value = response.json().await.map_err(TransportError::Http)?;

        // Hosted runtimes expose a bare `response` text field; OpenAI-style
        // gateways nest it under `choices`. Accept either shape.
        let text = payload["response"]
            .as_str()
            .or_else(|| payload["choices"][0]["message"]["content"].as_str())
            .ok_or_else(|| Error::model("model response missing text content"))?;

        Ok(text.to_string())
    }

    fn name(&self) -> &'static str {
        "http"
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("transport error: {0}")]
    Other(String),
}
