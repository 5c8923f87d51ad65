use std::path::PathBuf;

use config::Config;
use serde::Deserialize;

use crate::constants::{CLOUD_API_KEY_ENV, DEFAULT_CONFIG_CONTENT, DEFAULT_MODEL};

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub verbosity: Option<String>,
    pub default_model: String,
    pub local: LocalSettings,
    pub cloud: CloudSettings,
}

#[derive(Debug, Deserialize)]
pub struct LocalSettings {
    pub endpoint: String,
    pub timeout_seconds: u64,
}

#[derive(Debug, Deserialize)]
pub struct CloudSettings {
    pub host: String,
    pub timeout_seconds: u64,
    pub api_key: Option<String>,
}

impl Settings {
    pub fn new() -> Result<Self, config::ConfigError> {
        let config_path = dirs::config_dir()
            .map(|mut path| {
                path.push("ollama-cli");
                path.push("config");
                path
            })
            .unwrap_or_else(|| PathBuf::from("config"));

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).ok();
        }
        // Seed a commented config file on first run
        if !config_path.with_extension("toml").exists() {
            std::fs::write(config_path.with_extension("toml"), DEFAULT_CONFIG_CONTENT).ok();
        }

        let settings = Config::builder()
            .add_source(config::File::from(config_path.with_extension("toml")).required(false))
            .add_source(config::Environment::with_prefix("OLLAMA_CLI"))
            .set_default("default_model", DEFAULT_MODEL)?
            .set_default("local.endpoint", "http://localhost:11434/api/generate")?
            .set_default("local.timeout_seconds", 120)?
            .set_default("cloud.host", "https://ollama.com")?
            .set_default("cloud.timeout_seconds", 120)?
            .build()?;

        settings.try_deserialize()
    }
}

/// Bearer token for Ollama Cloud. Resolved once at startup and handed to the
/// dispatcher; absence disables the cloud path for the process lifetime.
#[derive(Debug, Clone)]
pub struct CloudCredential(String);

impl CloudCredential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The environment wins over the config file; blank values count as unset.
    pub fn resolve(settings: &Settings) -> Option<Self> {
        std::env::var(CLOUD_API_KEY_ENV)
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .or_else(|| {
                settings
                    .cloud
                    .api_key
                    .as_ref()
                    .map(|value| value.trim().to_string())
                    .filter(|value| !value.is_empty())
            })
            .map(Self)
    }

    pub fn token(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings_with_api_key(api_key: Option<&str>) -> Settings {
        Settings {
            verbosity: None,
            default_model: DEFAULT_MODEL.to_string(),
            local: LocalSettings {
                endpoint: "http://localhost:11434/api/generate".to_string(),
                timeout_seconds: 120,
            },
            cloud: CloudSettings {
                host: "https://ollama.com".to_string(),
                timeout_seconds: 120,
                api_key: api_key.map(str::to_string),
            },
        }
    }

    #[test]
    fn credential_falls_back_to_config_value() {
        std::env::remove_var(CLOUD_API_KEY_ENV);
        let settings = settings_with_api_key(Some("  config-key  "));
        let credential = CloudCredential::resolve(&settings).expect("config fallback");
        assert_eq!(credential.token(), "config-key");
    }

    #[test]
    fn blank_credential_counts_as_unset() {
        std::env::remove_var(CLOUD_API_KEY_ENV);
        let settings = settings_with_api_key(Some("   "));
        assert!(CloudCredential::resolve(&settings).is_none());

        let settings = settings_with_api_key(None);
        assert!(CloudCredential::resolve(&settings).is_none());
    }
}
