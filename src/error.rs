use thiserror::Error;

/// Failures of a single gist export. None of them are retried.
#[derive(Debug, Error)]
pub enum ExportError {
    /// No active conversation, or the host failed to hand one over.
    #[error("{0}")]
    NoConversation(String),

    #[error("Invalid visibility: {0}")]
    InvalidVisibility(String),

    /// Any non-201 answer from the gist endpoint.
    #[error("GitHub API error: {status} {message}")]
    Api { status: u16, message: String },

    #[error("{0}")]
    Transport(#[from] reqwest::Error),
}

impl ExportError {
    pub fn no_current_conversation() -> Self {
        ExportError::NoConversation("No current conversation".to_string())
    }
}
