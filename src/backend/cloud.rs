use std::time::Duration;

use serde_json::Value;
use tracing::{debug, info};

use super::common::TextBackend;
use crate::error::DispatchError;
use crate::settings::{CloudCredential, Settings};

/// Client for Ollama Cloud. Sends a single-turn chat request authenticated
/// with the bearer token resolved at startup.
pub struct CloudBackend {
    host: String,
    timeout: Duration,
    credential: CloudCredential,
}

impl CloudBackend {
    pub fn new(settings: &Settings, credential: CloudCredential) -> Self {
        Self {
            host: settings.cloud.host.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(settings.cloud.timeout_seconds),
            credential,
        }
    }
}

impl TextBackend for CloudBackend {
    fn generate(&self, model: &str, prompt: &str) -> Result<String, DispatchError> {
        info!("sending prompt to cloud model {model}");
        let body = serde_json::json!({
            "model": model,
            "messages": [{"role": "user", "content": prompt}],
            "stream": false,
        });
        let url = format!("{}/api/chat", self.host);

        let reply = tokio::runtime::Runtime::new()?.block_on(async {
            let client = reqwest::Client::builder().timeout(self.timeout).build()?;
            let response = client
                .post(&url)
                .bearer_auth(self.credential.token())
                .json(&body)
                .send()
                .await?;
            let status = response.status();
            if !status.is_success() {
                let text = response.text().await.unwrap_or_default();
                return Err(DispatchError::status(status, text));
            }
            let envelope: Value = response.json().await?;
            envelope
                .get("message")
                .and_then(|message| message.get("content"))
                .and_then(|content| content.as_str())
                .map(str::to_string)
                .ok_or_else(|| {
                    DispatchError::MalformedResponse("missing message.content".to_string())
                })
        })?;

        debug!("cloud backend replied");
        Ok(reply)
    }
}
