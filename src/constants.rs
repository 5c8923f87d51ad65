// constants file
pub const DEFAULT_MODEL: &str = "qwen3:4b";

/// Substring that routes a model selector to Ollama Cloud. Every occurrence
/// is stripped from the selector before it is sent upstream.
pub const CLOUD_MARKER: &str = "-cloud";

pub const CLOUD_API_KEY_ENV: &str = "OLLAMA_API_KEY";

pub const PROMPT_REQUIRED_MSG: &str = "Please enter a prompt.";
pub const CLOUD_UNAVAILABLE_MSG: &str =
    "Error: OLLAMA_API_KEY not set or cloud client unavailable.";
pub const NO_RESPONSE_PLACEHOLDER: &str = "No response.";

pub const DEFAULT_CONFIG_CONTENT: &str = r#"# ollama-cli configuration
#
# Values here are overridden by OLLAMA_CLI_* environment variables and
# command-line flags.

# Log level used when no -v/-q flag is passed: error, warn, info, debug, trace
# verbosity = "info"

# Model used when --model is not passed. Selectors containing "-cloud" are
# served by Ollama Cloud, everything else by the local instance.
# Known-good selectors: qwen:0.5b, qwen3:4b, mistral:latest, gpt-oss:120b-cloud
default_model = "qwen3:4b"

[local]
endpoint = "http://localhost:11434/api/generate"
timeout_seconds = 120

[cloud]
host = "https://ollama.com"
timeout_seconds = 120
# api_key = ""   # or set OLLAMA_API_KEY in the environment
"#;
