use tracing::debug;

use crate::backend::{CloudBackend, LocalBackend, TextBackend};
use crate::constants::{CLOUD_MARKER, CLOUD_UNAVAILABLE_MSG, PROMPT_REQUIRED_MSG};
use crate::error::DispatchError;
use crate::settings::{CloudCredential, Settings};

/// Backend tag parsed from a model selector, carrying the model name the
/// chosen backend expects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Local { model: String },
    Cloud { model: String },
}

impl Route {
    /// Selectors containing the cloud marker anywhere are served by Ollama
    /// Cloud with every occurrence of the marker removed; everything else
    /// goes to the local instance verbatim.
    pub fn resolve(selector: &str) -> Route {
        if selector.contains(CLOUD_MARKER) {
            Route::Cloud {
                model: selector.replace(CLOUD_MARKER, ""),
            }
        } else {
            Route::Local {
                model: selector.to_string(),
            }
        }
    }
}

/// Owns the local-vs-cloud decision, request shaping, and the flattening of
/// heterogeneous failures into one display string. The cloud backend exists
/// only when a credential was resolved at startup.
pub struct Dispatcher {
    local: LocalBackend,
    cloud: Option<CloudBackend>,
}

impl Dispatcher {
    pub fn new(settings: &Settings, credential: Option<CloudCredential>) -> Self {
        Self {
            local: LocalBackend::new(settings),
            cloud: credential.map(|credential| CloudBackend::new(settings, credential)),
        }
    }

    /// Core dispatch: precondition checks, routing, one backend call.
    /// Whitespace-only prompts count as empty.
    pub fn try_dispatch(&self, prompt: &str, selector: &str) -> Result<String, DispatchError> {
        if prompt.trim().is_empty() {
            return Err(DispatchError::EmptyPrompt);
        }
        match Route::resolve(selector) {
            Route::Local { model } => {
                debug!("routing {selector} to the local backend");
                self.local.generate(&model, prompt)
            }
            Route::Cloud { model } => {
                debug!("routing {selector} to the cloud backend");
                let cloud = self
                    .cloud
                    .as_ref()
                    .ok_or(DispatchError::MissingCredential)?;
                cloud.generate(&model, prompt)
            }
        }
    }

    /// Presentation wrapper over [`try_dispatch`]: never fails, every outcome
    /// becomes a human-readable string.
    ///
    /// [`try_dispatch`]: Dispatcher::try_dispatch
    pub fn dispatch(&self, prompt: &str, selector: &str) -> String {
        match self.try_dispatch(prompt, selector) {
            Ok(text) => text,
            Err(DispatchError::EmptyPrompt) => PROMPT_REQUIRED_MSG.to_string(),
            Err(DispatchError::MissingCredential) => CLOUD_UNAVAILABLE_MSG.to_string(),
            Err(err) => format!("An error occurred: {err}"),
        }
    }
}
