use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, info};

use super::common::TextBackend;
use crate::constants::NO_RESPONSE_PLACEHOLDER;
use crate::error::DispatchError;
use crate::settings::Settings;

/// The `/api/generate` envelope. `response` is the generated text; a body
/// without it is still a valid reply and maps to the fixed placeholder.
#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: Option<String>,
}

/// Client for an Ollama instance on the local machine.
pub struct LocalBackend {
    endpoint: String,
    timeout: Duration,
}

impl LocalBackend {
    pub fn new(settings: &Settings) -> Self {
        Self {
            endpoint: settings.local.endpoint.clone(),
            timeout: Duration::from_secs(settings.local.timeout_seconds),
        }
    }
}

impl TextBackend for LocalBackend {
    fn generate(&self, model: &str, prompt: &str) -> Result<String, DispatchError> {
        info!("sending prompt to local model {model}");
        let body = serde_json::json!({
            "model": model,
            "prompt": prompt,
            "stream": false,
        });

        let parsed = tokio::runtime::Runtime::new()?.block_on(async {
            let client = reqwest::Client::builder().timeout(self.timeout).build()?;
            let response = client.post(&self.endpoint).json(&body).send().await?;
            let status = response.status();
            if !status.is_success() {
                let text = response.text().await.unwrap_or_default();
                return Err(DispatchError::status(status, text));
            }
            let parsed: GenerateResponse = response.json().await?;
            Ok(parsed)
        })?;

        debug!("local backend replied");
        Ok(parsed
            .response
            .unwrap_or_else(|| NO_RESPONSE_PLACEHOLDER.to_string()))
    }
}
