use crate::error::DispatchError;

/// A text-generation backend: one blocking call per generation request.
/// `model` is the name the backend expects, already stripped of any routing
/// convention.
pub trait TextBackend {
    fn generate(&self, model: &str, prompt: &str) -> Result<String, DispatchError>;
}
