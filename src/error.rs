use reqwest::StatusCode;
use thiserror::Error;

/// Everything that can go wrong during a single dispatch. The presentation
/// layer decides how each variant reads; nothing here is user-facing text.
#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("prompt is empty")]
    EmptyPrompt,

    #[error("no cloud credential is configured")]
    MissingCredential,

    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error("backend returned HTTP {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("malformed backend response: {0}")]
    MalformedResponse(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl DispatchError {
    /// Non-success HTTP status, with the body capped so a long error page
    /// does not flood the display.
    pub(crate) fn status(status: StatusCode, body: String) -> Self {
        let body = body.chars().take(200).collect();
        Self::Status { status, body }
    }
}
